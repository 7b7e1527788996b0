use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown semantic role: {0}")]
    UnknownRole(String),
    #[error("invalid column mapping '{0}': expected COLUMN=ROLE")]
    InvalidMappingPair(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
