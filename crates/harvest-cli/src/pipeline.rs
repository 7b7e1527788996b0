//! Stages shared by the `classify` and `normalize` commands.

use std::path::Path;

use anyhow::{Context, Result};
use harvest_ingest::{read_csv_table, sample_values};
use harvest_map::classify_table;
use harvest_model::{
    ColumnClassification, ColumnMapping, NormalizationReport, SemanticRole, SourceTable,
};
use harvest_transform::RecordNormalizer;
use serde::Serialize;
use tracing::{info, warn};

/// Everything produced by one `normalize` run.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeOutcome {
    pub source: String,
    pub classifications: Vec<ColumnClassification>,
    pub mapping: ColumnMapping,
    pub summary: ReportSummary,
    pub records: NormalizationReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub resolved: usize,
    pub requires_review: usize,
}

impl From<&NormalizationReport> for ReportSummary {
    fn from(report: &NormalizationReport) -> Self {
        Self {
            total: report.total(),
            resolved: report.resolved_count(),
            requires_review: report.review_count(),
        }
    }
}

pub fn load_table(path: &Path) -> Result<SourceTable> {
    let table = read_csv_table(path).with_context(|| format!("read {}", path.display()))?;
    info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "loaded table"
    );
    Ok(table)
}

/// Classifies every column of `table` from up to `samples` values each.
pub fn classify_source(table: &SourceTable, samples: usize) -> Vec<ColumnClassification> {
    let classifications = classify_table(&table.headers, |column| {
        sample_values(table, column, samples)
    });
    let unmapped = classifications.iter().filter(|c| c.needs_mapping()).count();
    info!(
        columns = classifications.len(),
        unmapped, "classified columns"
    );
    classifications
}

/// Merges explicit `COLUMN=ROLE` overrides with the proposed roles.
///
/// Overrides come first, so an overridden column is authoritative for its
/// role even when another column was proposed for the same role.
pub fn build_mapping(
    table: &SourceTable,
    classifications: &[ColumnClassification],
    overrides: &[(String, SemanticRole)],
) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();
    for (column, role) in overrides {
        let Some(index) = table.column_index(column) else {
            warn!(column = %column, role = role.as_str(), "mapping override names an unknown column");
            continue;
        };
        mapping.assign(table.headers[index].clone(), *role);
    }
    for classification in classifications {
        if let Some(role) = classification.proposed_role
            && mapping.role_of(&classification.column_name).is_none()
        {
            mapping.assign(classification.column_name.clone(), role);
        }
    }
    mapping
}

/// Loads, classifies, maps, and normalizes one file.
pub fn normalize_file(
    path: &Path,
    samples: usize,
    overrides: &[(String, SemanticRole)],
) -> Result<NormalizeOutcome> {
    let table = load_table(path)?;
    let classifications = classify_source(&table, samples);
    let mapping = build_mapping(&table, &classifications, overrides);
    if mapping.authoritative(SemanticRole::HarvestCalendar).is_none()
        && mapping.authoritative(SemanticRole::StartDate).is_none()
    {
        warn!("no harvest period or start date column mapped; every row will need review");
    }

    let records = RecordNormalizer::default().normalize_table(&table, &mapping);
    let summary = ReportSummary::from(&records);
    info!(
        total = summary.total,
        resolved = summary.resolved,
        review = summary.requires_review,
        "normalized rows"
    );
    Ok(NormalizeOutcome {
        source: path.display().to_string(),
        classifications,
        mapping,
        summary,
        records,
    })
}
