//! Classifier behaviour on realistic spreadsheet headers.

use std::collections::HashMap;

use harvest_map::{
    Classifier, ClassifierConfig, classify_column, classify_table, propose_mapping, score_header,
};
use harvest_model::SemanticRole;
use proptest::prelude::*;

const NO_SAMPLES: &[&str] = &[];

#[test]
fn exact_header_is_fully_confident() {
    let result = classify_column("Crop Type", &["Wheat", "Maize"]);
    assert_eq!(result.proposed_role, Some(SemanticRole::CropName));
    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.sample_values, vec!["Wheat", "Maize"]);
}

#[test]
fn unrelated_header_gets_no_role() {
    let result = classify_column("xyz123", NO_SAMPLES);
    assert_eq!(result.proposed_role, None);
    assert_eq!(result.confidence, 0.0);
    assert!(result.needs_mapping());
}

#[test]
fn partial_header_match_scores_by_coverage() {
    let result = classify_column("Main Region", NO_SAMPLES);
    assert_eq!(result.proposed_role, Some(SemanticRole::Country));
    assert_eq!(result.confidence, 0.55);
    assert!((score_header("main region", SemanticRole::Country) - 6.0 / 11.0).abs() < 1e-9);
}

#[test]
fn month_samples_alone_stay_at_threshold() {
    // 0.3 from the month boost is not strictly above the threshold.
    let result = classify_column("Window", &["Jan-Mar", "Oct"]);
    assert_eq!(result.proposed_role, None);
    assert_eq!(result.confidence, 0.3);
}

#[test]
fn month_and_range_samples_propose_harvest_calendar() {
    let result = classify_column("Window", &["3-5", "March"]);
    assert_eq!(result.proposed_role, Some(SemanticRole::HarvestCalendar));
    assert_eq!(result.confidence, 0.5);
}

#[test]
fn boosted_score_is_clamped() {
    let result = classify_column("Timing", &["Oct-Feb", "6-8"]);
    assert_eq!(result.proposed_role, Some(SemanticRole::HarvestCalendar));
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn range_boost_reaches_date_roles() {
    let classifier = Classifier::default();
    let scores = classifier.score_column("x", &["1-3"]);
    assert_eq!(scores.get(SemanticRole::HarvestCalendar), 0.2);
    assert_eq!(scores.get(SemanticRole::StartDate), 0.15);
    assert_eq!(scores.get(SemanticRole::EndDate), 0.15);
}

#[test]
fn tie_goes_to_earlier_role() {
    let classifier = Classifier::new(ClassifierConfig {
        range_boost: 0.0,
        date_range_boost: 0.5,
        ..ClassifierConfig::default()
    });
    let result = classifier.classify_column("x", &["10-12"]);
    assert_eq!(result.proposed_role, Some(SemanticRole::StartDate));
    assert_eq!(result.confidence, 0.5);
}

#[test]
fn table_classification_keeps_column_order() {
    let samples: HashMap<&str, Vec<String>> = HashMap::from([
        ("Country", vec!["Kenya".to_string()]),
        ("Harvest Period", vec!["Oct-Feb".to_string()]),
    ]);
    let columns = ["Country", "Crop", "Harvest Period", "Notes", "zzz"];
    let results = classify_table(&columns, |column| {
        samples.get(column).cloned().unwrap_or_default()
    });

    let names: Vec<_> = results.iter().map(|c| c.column_name.as_str()).collect();
    assert_eq!(names, columns);
    let roles: Vec<_> = results.iter().map(|c| c.proposed_role).collect();
    assert_eq!(
        roles,
        vec![
            Some(SemanticRole::Country),
            Some(SemanticRole::CropName),
            Some(SemanticRole::HarvestCalendar),
            Some(SemanticRole::Ignore),
            None,
        ]
    );

    let mapping = propose_mapping(&results);
    assert_eq!(mapping.assignments().len(), 4);
    assert_eq!(
        mapping.authoritative(SemanticRole::HarvestCalendar),
        Some("Harvest Period")
    );
    assert_eq!(mapping.role_of("zzz"), None);
}

proptest! {
    #[test]
    fn month_samples_never_lower_harvest_score(header in "[a-z ]{0,16}") {
        let classifier = Classifier::default();
        let plain = classifier.score_column(&header, NO_SAMPLES);
        let boosted = classifier.score_column(&header, &["harvest in march"]);
        prop_assert!(
            boosted.get(SemanticRole::HarvestCalendar) >= plain.get(SemanticRole::HarvestCalendar)
        );
    }

    #[test]
    fn confidence_stays_in_unit_interval(header in ".{0,24}", sample in ".{0,24}") {
        let result = classify_column(&header, &[sample]);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        if result.proposed_role.is_some() {
            prop_assert!(result.confidence >= 0.3);
        }
    }
}
