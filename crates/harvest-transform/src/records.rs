//! Table-level normalization driven by a column mapping.

use std::collections::BTreeMap;

use harvest_model::{
    ColumnMapping, MonthMask, NormalizationReport, NormalizedPeriod, NormalizedRecord,
    SemanticRole, SourceTable,
};
use tracing::{debug, warn};

use crate::period::PeriodNormalizer;

/// Cell values that switch an all-year flag column on.
pub const TRUTHY_FLAGS: &[&str] = &["yes", "y", "true", "1", "x"];

/// Header of the generic period column some sheets carry next to the
/// dedicated harvest calendar.
pub const GENERIC_PERIOD_HEADER: &str = "period";

/// Column indices of the roles a row is normalized from.
#[derive(Debug, Default, Clone, Copy)]
struct RoleColumns {
    crop_name: Option<usize>,
    country: Option<usize>,
    season: Option<usize>,
    harvest_calendar: Option<usize>,
    secondary_period: Option<usize>,
    start_date: Option<usize>,
    end_date: Option<usize>,
    all_year: Option<usize>,
    current_year: Option<usize>,
}

impl RoleColumns {
    fn resolve(table: &SourceTable, mapping: &ColumnMapping) -> Self {
        let index = |role: SemanticRole| {
            let column = mapping.authoritative(role)?;
            let found = table.column_index(column);
            if found.is_none() {
                warn!(column, role = role.as_str(), "mapped column not found in table");
            }
            found
        };
        let season = index(SemanticRole::Season);
        let harvest_calendar = index(SemanticRole::HarvestCalendar);
        let secondary_period = secondary_period_column(table, mapping, harvest_calendar).or(season);
        Self {
            crop_name: index(SemanticRole::CropName),
            country: index(SemanticRole::Country),
            season,
            harvest_calendar,
            secondary_period,
            start_date: index(SemanticRole::StartDate),
            end_date: index(SemanticRole::EndDate),
            all_year: index(SemanticRole::AllYear),
            current_year: index(SemanticRole::CurrentYear),
        }
    }
}

/// The generic period column a row falls back to.
///
/// A second `harvest_calendar` column wins, then any other column headed
/// "period". Without a primary column there is nothing to fall back from,
/// and the caller uses `season`.
fn secondary_period_column(
    table: &SourceTable,
    mapping: &ColumnMapping,
    primary: Option<usize>,
) -> Option<usize> {
    let primary = primary?;
    mapping
        .columns_for(SemanticRole::HarvestCalendar)
        .into_iter()
        .filter_map(|column| table.column_index(column))
        .find(|&index| index != primary)
        .or_else(|| {
            table
                .headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(GENERIC_PERIOD_HEADER))
                .filter(|&index| index != primary)
        })
}

/// Normalizes every row of a table into a [`NormalizedRecord`].
#[derive(Debug, Clone, Default)]
pub struct RecordNormalizer {
    periods: PeriodNormalizer,
}

impl RecordNormalizer {
    pub fn new(periods: PeriodNormalizer) -> Self {
        Self { periods }
    }

    pub fn periods(&self) -> &PeriodNormalizer {
        &self.periods
    }

    /// Normalizes all rows, in input order.
    ///
    /// When several columns share a role, the first one in the mapping is
    /// used and the rest are reported. The second `harvest_calendar`
    /// column is the exception: it is the row's fallback period text.
    pub fn normalize_table(
        &self,
        table: &SourceTable,
        mapping: &ColumnMapping,
    ) -> NormalizationReport {
        warn_duplicate_roles(mapping);
        let columns = RoleColumns::resolve(table, mapping);

        let records: Vec<NormalizedRecord> = (0..table.len())
            .map(|row| self.normalize_row(table, &columns, row))
            .collect();
        let report = NormalizationReport { records };

        debug!(
            rows = report.total(),
            resolved = report.resolved_count(),
            review = report.review_count(),
            "normalized table"
        );
        report
    }

    fn normalize_row(&self, table: &SourceTable, columns: &RoleColumns, row: usize) -> NormalizedRecord {
        let text = |column: Option<usize>| {
            column
                .map(|index| table.cell(row, index).trim())
                .filter(|value| !value.is_empty())
        };

        let mut period = self.periods.normalize_with_fallback(
            text(columns.harvest_calendar),
            text(columns.secondary_period),
            text(columns.start_date),
            text(columns.end_date),
        );
        if let Some(flag) = text(columns.all_year)
            && self.is_truthy(flag)
        {
            period = NormalizedPeriod::from_mask(MonthMask::ALL, flag);
        }

        let raw: BTreeMap<String, String> = table
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| (header.clone(), table.cell(row, index).to_string()))
            .collect();

        NormalizedRecord {
            row_number: row + 1,
            crop_name: text(columns.crop_name).map(str::to_string),
            country: text(columns.country).map(str::to_string),
            season: text(columns.season).map(str::to_string),
            current_year: text(columns.current_year).map(str::to_string),
            period,
            raw,
        }
    }

    fn is_truthy(&self, flag: &str) -> bool {
        let lowered = flag.trim().to_lowercase();
        TRUTHY_FLAGS.contains(&lowered.as_str()) || self.periods.is_all_year(&lowered)
    }
}

fn warn_duplicate_roles(mapping: &ColumnMapping) {
    for role in SemanticRole::ALL {
        if role == SemanticRole::Ignore {
            continue;
        }
        let columns = mapping.columns_for(role);
        let kept = if role == SemanticRole::HarvestCalendar { 2 } else { 1 };
        if columns.len() > kept {
            warn!(
                role = role.as_str(),
                used = ?&columns[..kept],
                ignored = ?&columns[kept..],
                "several columns share a role; extra columns are ignored"
            );
        }
    }
}
