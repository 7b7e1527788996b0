//! Column-to-role mapping finalized by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::role::SemanticRole;

/// One column assigned to one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    pub column: String,
    pub role: SemanticRole,
}

/// Ordered column-to-role assignments.
///
/// Several columns may share a role; the first one in assignment order is
/// the authoritative column for that role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    assignments: Vec<ColumnAssignment>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `role` to `column`, replacing any earlier role for that column.
    pub fn assign(&mut self, column: impl Into<String>, role: SemanticRole) {
        let column = column.into();
        match self.assignments.iter_mut().find(|a| a.column == column) {
            Some(existing) => existing.role = role,
            None => self.assignments.push(ColumnAssignment { column, role }),
        }
    }

    pub fn assignments(&self) -> &[ColumnAssignment] {
        &self.assignments
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn role_of(&self, column: &str) -> Option<SemanticRole> {
        self.assignments
            .iter()
            .find(|a| a.column == column)
            .map(|a| a.role)
    }

    /// Every column assigned to `role`, in assignment order.
    pub fn columns_for(&self, role: SemanticRole) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.role == role)
            .map(|a| a.column.as_str())
            .collect()
    }

    /// The column that speaks for `role`.
    pub fn authoritative(&self, role: SemanticRole) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.role == role)
            .map(|a| a.column.as_str())
    }

    /// Parses a `COLUMN=ROLE` pair. The column may itself contain `=`; the
    /// last one separates the role.
    pub fn parse_pair(raw: &str) -> Result<(String, SemanticRole)> {
        let Some((column, role)) = raw.rsplit_once('=') else {
            return Err(ModelError::InvalidMappingPair(raw.to_string()));
        };
        let column = column.trim();
        if column.is_empty() {
            return Err(ModelError::InvalidMappingPair(raw.to_string()));
        }
        Ok((column.to_string(), role.parse()?))
    }
}

impl FromIterator<(String, SemanticRole)> for ColumnMapping {
    fn from_iter<I: IntoIterator<Item = (String, SemanticRole)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (column, role) in iter {
            mapping.assign(column, role);
        }
        mapping
    }
}
