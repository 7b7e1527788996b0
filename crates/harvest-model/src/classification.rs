use serde::{Deserialize, Serialize};

use crate::role::SemanticRole;

/// Role proposed for one source column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnClassification {
    /// Header as it appears in the source table.
    pub column_name: String,
    /// Best-scoring role, or `None` when no role clears the confidence floor.
    pub proposed_role: Option<SemanticRole>,
    /// Winning score rounded to two decimals (0.0 to 1.0).
    pub confidence: f64,
    /// Values the classification was based on, in the order supplied.
    pub sample_values: Vec<String>,
}

impl ColumnClassification {
    /// True when a human has to pick the role for this column.
    pub fn needs_mapping(&self) -> bool {
        self.proposed_role.is_none()
    }
}
