//! Semantic roles a spreadsheet column can play.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The meaning of a source column.
///
/// Declaration order is significant: it is the tie-break order used when
/// two roles score equally for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    /// Name of the crop or commodity.
    CropName,
    /// Country or region the row applies to.
    Country,
    /// Named season, often carrying its own period text ("Main: Nov-Jan").
    Season,
    /// Free-text harvest period; the primary input to period normalization.
    HarvestCalendar,
    /// Start of the harvest window as a date or month.
    StartDate,
    /// End of the harvest window as a date or month.
    EndDate,
    /// Flag marking year-round production.
    AllYear,
    /// Reference or marketing year of the row.
    CurrentYear,
    /// Column deliberately left out of normalization.
    Ignore,
}

impl SemanticRole {
    /// All roles in declaration order.
    pub const ALL: [SemanticRole; 9] = [
        SemanticRole::CropName,
        SemanticRole::Country,
        SemanticRole::Season,
        SemanticRole::HarvestCalendar,
        SemanticRole::StartDate,
        SemanticRole::EndDate,
        SemanticRole::AllYear,
        SemanticRole::CurrentYear,
        SemanticRole::Ignore,
    ];

    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticRole::CropName => "crop_name",
            SemanticRole::Country => "country",
            SemanticRole::Season => "season",
            SemanticRole::HarvestCalendar => "harvest_calendar",
            SemanticRole::StartDate => "start_date",
            SemanticRole::EndDate => "end_date",
            SemanticRole::AllYear => "all_year",
            SemanticRole::CurrentYear => "current_year",
            SemanticRole::Ignore => "ignore",
        }
    }

    /// Human-readable label for tables and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            SemanticRole::CropName => "Crop Name",
            SemanticRole::Country => "Country/Region",
            SemanticRole::Season => "Season",
            SemanticRole::HarvestCalendar => "Harvest Calendar",
            SemanticRole::StartDate => "Start Date/Month",
            SemanticRole::EndDate => "End Date/Month",
            SemanticRole::AllYear => "All Year (Year-Round)",
            SemanticRole::CurrentYear => "Current Year",
            SemanticRole::Ignore => "Ignore",
        }
    }

    /// True for roles whose cells feed period normalization.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            SemanticRole::Season
                | SemanticRole::HarvestCalendar
                | SemanticRole::StartDate
                | SemanticRole::EndDate
                | SemanticRole::AllYear
        )
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticRole {
    type Err = ModelError;

    /// Accepts snake_case, camelCase (`allYear`), and spaced forms
    /// (`Crop Name`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        SemanticRole::ALL
            .into_iter()
            .find(|role| role.as_str().replace('_', "") == squashed)
            .ok_or_else(|| ModelError::UnknownRole(s.trim().to_string()))
    }
}
