//! Header keywords per semantic role.

use harvest_model::SemanticRole;
use serde::{Deserialize, Serialize};

/// Built-in keywords, in role declaration order.
///
/// The order of the entries is the classifier's tie-break order.
pub const DEFAULT_KEYWORDS: &[(SemanticRole, &[&str])] = &[
    (
        SemanticRole::CropName,
        &[
            "crop",
            "crop name",
            "crop_name",
            "crop type",
            "crops",
            "commodity",
            "product",
            "culture",
            "species",
            "variety",
        ],
    ),
    (
        SemanticRole::Country,
        &[
            "country",
            "country name",
            "country_name",
            "nation",
            "region",
            "location",
            "territory",
            "province",
            "state",
            "area",
        ],
    ),
    (
        SemanticRole::Season,
        &[
            "season",
            "seasons",
            "season name",
            "growing season",
            "cropping season",
            "main season",
            "campaign",
        ],
    ),
    (
        SemanticRole::HarvestCalendar,
        &[
            "harvest",
            "harvest calendar",
            "harvest_calendar",
            "harvest period",
            "harvest months",
            "harvest time",
            "harvest season",
            "harvesting",
            "harvesting period",
            "calendar",
            "period",
            "months",
            "timing",
        ],
    ),
    (
        SemanticRole::StartDate,
        &[
            "start",
            "start date",
            "start_date",
            "start month",
            "begin",
            "beginning",
            "harvest start",
            "from date",
            "date from",
        ],
    ),
    (
        SemanticRole::EndDate,
        &[
            "end",
            "end date",
            "end_date",
            "end month",
            "finish",
            "harvest end",
            "to date",
            "date to",
            "until",
        ],
    ),
    (
        SemanticRole::AllYear,
        &[
            "all year",
            "all_year",
            "allyear",
            "all year round",
            "year round",
            "year-round",
            "year_round",
            "perennial",
        ],
    ),
    (
        SemanticRole::CurrentYear,
        &[
            "current year",
            "current_year",
            "year",
            "crop year",
            "marketing year",
            "reference year",
        ],
    ),
    (
        SemanticRole::Ignore,
        &[
            "id",
            "notes",
            "note",
            "comment",
            "comments",
            "remarks",
            "source",
            "index",
            "reference",
        ],
    ),
];

/// Ordered role-to-keywords table used for header scoring.
///
/// Keywords are stored lower-cased and trimmed; empty keywords are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTable {
    entries: Vec<(SemanticRole, Vec<String>)>,
}

impl KeywordTable {
    /// Builds a table from `(role, keywords)` pairs, keeping their order.
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SemanticRole, K)>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (role, keywords) in entries {
            table.set_keywords(role, keywords);
        }
        table
    }

    /// Replaces the keywords of `role`, appending the role if it is new.
    pub fn set_keywords<K>(&mut self, role: SemanticRole, keywords: K)
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let mut cleaned: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !cleaned.contains(&keyword) {
                cleaned.push(keyword);
            }
        }
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some((_, existing)) => *existing = cleaned,
            None => self.entries.push((role, cleaned)),
        }
    }

    /// Keywords for `role`; empty when the role is not in the table.
    pub fn keywords(&self, role: SemanticRole) -> &[String] {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, keywords)| keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Roles in declaration order.
    pub fn roles(&self) -> impl Iterator<Item = SemanticRole> + '_ {
        self.entries.iter().map(|(role, _)| *role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SemanticRole, &[String])> {
        self.entries
            .iter()
            .map(|(role, keywords)| (*role, keywords.as_slice()))
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_KEYWORDS
                .iter()
                .map(|(role, keywords)| (*role, keywords.iter().copied())),
        )
    }
}
