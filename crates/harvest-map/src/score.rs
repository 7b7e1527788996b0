//! Header scoring and per-role score maps.
//!
//! A header scores against a role by comparing it with the role's keywords:
//! an exact match short-circuits at 1.0, a contained keyword scores by how
//! much of the header it covers, and a shared prefix in either direction
//! floors the score at [`PREFIX_MATCH_SCORE`].

use harvest_model::SemanticRole;
use serde::{Deserialize, Serialize};

/// Score for an exact keyword match.
pub const EXACT_MATCH_SCORE: f64 = 1.0;
/// Floor applied when header and keyword share a prefix.
pub const PREFIX_MATCH_SCORE: f64 = 0.7;

/// Scores a header against one role's keywords.
///
/// Returns 0.0 for an empty header or when no keyword matches at all.
pub fn score_header_keywords(header: &str, keywords: &[String]) -> f64 {
    let header = header.trim().to_lowercase();
    if header.is_empty() {
        return 0.0;
    }
    let header_len = header.chars().count() as f64;

    let mut best: f64 = 0.0;
    for keyword in keywords {
        if *keyword == header {
            return EXACT_MATCH_SCORE;
        }
        if header.contains(keyword.as_str()) {
            best = best.max(keyword.chars().count() as f64 / header_len);
        }
        if header.starts_with(keyword.as_str()) || keyword.starts_with(header.as_str()) {
            best = best.max(PREFIX_MATCH_SCORE);
        }
    }
    best
}

/// Scores of one column against every role, in table declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleScores {
    entries: Vec<(SemanticRole, f64)>,
}

impl RoleScores {
    pub(crate) fn new(entries: Vec<(SemanticRole, f64)>) -> Self {
        Self { entries }
    }

    /// Score for `role`; 0.0 when the role was not scored.
    pub fn get(&self, role: SemanticRole) -> f64 {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map_or(0.0, |(_, score)| *score)
    }

    /// Adds `delta` to a role's score, clamping to 1.0.
    pub(crate) fn boost(&mut self, role: SemanticRole, delta: f64) {
        if let Some((_, score)) = self.entries.iter_mut().find(|(r, _)| *r == role) {
            *score = (*score + delta).min(1.0);
        }
    }

    /// Highest-scoring role; the earliest role wins a tie.
    pub fn best(&self) -> Option<(SemanticRole, f64)> {
        let mut best: Option<(SemanticRole, f64)> = None;
        for &(role, score) in &self.entries {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((role, score)),
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (SemanticRole, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Human-readable breakdown of the non-zero scores.
    pub fn explain(&self) -> String {
        self.entries
            .iter()
            .filter(|(_, score)| *score > 0.0)
            .map(|(role, score)| format!("{role}: {:.0}%", score * 100.0))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn exact_match_short_circuits() {
        let kw = keywords(&["crop", "crop type"]);
        assert_eq!(score_header_keywords("  Crop Type ", &kw), 1.0);
    }

    #[test]
    fn substring_scores_by_coverage() {
        let kw = keywords(&["region"]);
        // "main region" has 11 characters, "region" covers 6 of them.
        let score = score_header_keywords("main region", &kw);
        assert!((score - 6.0 / 11.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn shared_prefix_floors_at_point_seven() {
        let kw = keywords(&["harvest"]);
        assert_eq!(score_header_keywords("harvest window dates", &kw), 0.7);
        // Header is a prefix of the keyword.
        assert_eq!(score_header_keywords("harv", &kw), 0.7);
    }

    #[test]
    fn no_overlap_scores_zero() {
        let kw = keywords(&["country"]);
        assert_eq!(score_header_keywords("xyz123", &kw), 0.0);
        assert_eq!(score_header_keywords("   ", &kw), 0.0);
    }

    #[test]
    fn best_prefers_earlier_role_on_tie() {
        let scores = RoleScores::new(vec![
            (SemanticRole::StartDate, 0.5),
            (SemanticRole::EndDate, 0.5),
        ]);
        assert_eq!(scores.best(), Some((SemanticRole::StartDate, 0.5)));
    }

    #[test]
    fn boost_clamps_to_one() {
        let mut scores = RoleScores::new(vec![(SemanticRole::HarvestCalendar, 0.9)]);
        scores.boost(SemanticRole::HarvestCalendar, 0.3);
        assert_eq!(scores.get(SemanticRole::HarvestCalendar), 1.0);
        assert!(scores.explain().contains("harvest_calendar: 100%"));
    }
}
