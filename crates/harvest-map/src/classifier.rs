//! Column type classifier.

use std::sync::LazyLock;

use harvest_model::{ColumnClassification, ColumnMapping, Month, SemanticRole};
use regex::Regex;
use tracing::{debug, trace};

use crate::keywords::KeywordTable;
use crate::score::{RoleScores, score_header_keywords};

/// A role must score above this to be proposed.
pub const CONFIDENCE_THRESHOLD: f64 = 0.3;
/// Boost to `harvest_calendar` when the samples mention a month.
pub const MONTH_HIT_BOOST: f64 = 0.3;
/// Boost to `harvest_calendar` when the samples contain a numeric range.
pub const NUMERIC_RANGE_BOOST: f64 = 0.2;
/// Boost to `start_date` and `end_date` when the samples contain a numeric range.
pub const DATE_RANGE_BOOST: f64 = 0.15;
/// Number of sample values a caller should pass per column.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

static NUMERIC_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*-\s*\d+").expect("Invalid numeric range regex"));

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Immutable classifier configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub keywords: KeywordTable,
    pub confidence_threshold: f64,
    pub month_boost: f64,
    pub range_boost: f64,
    pub date_range_boost: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordTable::default(),
            confidence_threshold: CONFIDENCE_THRESHOLD,
            month_boost: MONTH_HIT_BOOST,
            range_boost: NUMERIC_RANGE_BOOST,
            date_range_boost: DATE_RANGE_BOOST,
        }
    }
}

/// Proposes a semantic role for a column from its header and sample values.
///
/// Every call is independent of every other; a classifier can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Scores a header against one role, ignoring sample values.
    pub fn score_header(&self, header: &str, role: SemanticRole) -> f64 {
        score_header_keywords(header, self.config.keywords.keywords(role))
    }

    /// Scores a column against every role, including value-based boosts.
    pub fn score_column<S: AsRef<str>>(&self, header: &str, sample_values: &[S]) -> RoleScores {
        let mut scores = RoleScores::new(
            self.config
                .keywords
                .iter()
                .map(|(role, keywords)| (role, score_header_keywords(header, keywords)))
                .collect(),
        );

        let blob = sample_values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if contains_month_name(&blob) {
            trace!(column = header, "samples mention a month");
            scores.boost(SemanticRole::HarvestCalendar, self.config.month_boost);
        }
        if NUMERIC_RANGE.is_match(&blob) {
            trace!(column = header, "samples contain a numeric range");
            scores.boost(SemanticRole::HarvestCalendar, self.config.range_boost);
            scores.boost(SemanticRole::StartDate, self.config.date_range_boost);
            scores.boost(SemanticRole::EndDate, self.config.date_range_boost);
        }
        scores
    }

    /// Classifies one column. Never fails; weak columns get no role.
    pub fn classify_column<S: AsRef<str>>(
        &self,
        header: &str,
        sample_values: &[S],
    ) -> ColumnClassification {
        let scores = self.score_column(header, sample_values);
        let (role, score) = scores.best().unwrap_or((SemanticRole::Ignore, 0.0));
        let proposed_role = (score > self.config.confidence_threshold).then_some(role);
        let confidence = round_confidence(score);

        debug!(
            column = header,
            role = proposed_role.map_or("unknown", |r| r.as_str()),
            confidence,
            scores = %scores.explain(),
            "classified column"
        );

        ColumnClassification {
            column_name: header.to_string(),
            proposed_role,
            confidence,
            sample_values: sample_values
                .iter()
                .map(|value| value.as_ref().to_string())
                .collect(),
        }
    }

    /// Classifies every column independently, preserving column order.
    ///
    /// `sampler` supplies the sample values for a column name.
    pub fn classify_table<S, F>(&self, columns: &[S], mut sampler: F) -> Vec<ColumnClassification>
    where
        S: AsRef<str>,
        F: FnMut(&str) -> Vec<String>,
    {
        columns
            .iter()
            .map(|column| {
                let column = column.as_ref();
                let samples = sampler(column);
                self.classify_column(column, &samples)
            })
            .collect()
    }
}

/// Process-wide classifier built from the default configuration.
pub fn default_classifier() -> &'static Classifier {
    &DEFAULT_CLASSIFIER
}

/// [`Classifier::score_header`] with the default configuration.
pub fn score_header(header: &str, role: SemanticRole) -> f64 {
    default_classifier().score_header(header, role)
}

/// [`Classifier::classify_column`] with the default configuration.
pub fn classify_column<S: AsRef<str>>(header: &str, sample_values: &[S]) -> ColumnClassification {
    default_classifier().classify_column(header, sample_values)
}

/// [`Classifier::classify_table`] with the default configuration.
pub fn classify_table<S, F>(columns: &[S], sampler: F) -> Vec<ColumnClassification>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Vec<String>,
{
    default_classifier().classify_table(columns, sampler)
}

/// Builds a mapping from proposed roles; columns without a role are left out.
pub fn propose_mapping(classifications: &[ColumnClassification]) -> ColumnMapping {
    classifications
        .iter()
        .filter_map(|c| c.proposed_role.map(|role| (c.column_name.clone(), role)))
        .collect()
}

/// True when any whole word of `text` is a month name or abbreviation.
fn contains_month_name(text: &str) -> bool {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .any(|word| Month::from_name(word).is_some())
}

fn round_confidence(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
