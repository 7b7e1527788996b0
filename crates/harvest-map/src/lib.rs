//! Column classification for harvest spreadsheets.
//!
//! Each column gets a proposed [`SemanticRole`](harvest_model::SemanticRole)
//! from keyword matches on its header, boosted by what its sample values
//! look like. Columns are classified independently of one another.

pub mod classifier;
pub mod keywords;
pub mod score;

pub use classifier::{
    CONFIDENCE_THRESHOLD, Classifier, ClassifierConfig, DATE_RANGE_BOOST, DEFAULT_SAMPLE_SIZE,
    MONTH_HIT_BOOST, NUMERIC_RANGE_BOOST, classify_column, classify_table, default_classifier,
    propose_mapping, score_header,
};
pub use keywords::{DEFAULT_KEYWORDS, KeywordTable};
pub use score::{EXACT_MATCH_SCORE, PREFIX_MATCH_SCORE, RoleScores, score_header_keywords};
