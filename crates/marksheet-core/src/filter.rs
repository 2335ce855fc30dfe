//! # Filter
//!
//! Derived, non-owning projection of the record store.
//!
//! A row passes when its name contains the pattern (case-insensitive) and
//! its division matches the selection. Every row carries the index of the
//! record in the unfiltered store, so edit and delete actions taken on a
//! filtered view always reach the right record.

use crate::grade::{Division, ParseDivisionError};
use crate::record::StudentRecord;
use crate::store::RecordStore;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Division selection for the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionFilter {
    #[default]
    All,
    Only(Division),
}

impl DivisionFilter {
    #[must_use]
    pub fn matches(self, division: Division) -> bool {
        match self {
            DivisionFilter::All => true,
            DivisionFilter::Only(selected) => selected == division,
        }
    }
}

impl fmt::Display for DivisionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionFilter::All => f.write_str("All Divisions"),
            DivisionFilter::Only(division) => division.fmt(f),
        }
    }
}

impl FromStr for DivisionFilter {
    type Err = ParseDivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "all divisions" | "alldivisions" | "*" => Ok(DivisionFilter::All),
            _ => s.parse().map(DivisionFilter::Only),
        }
    }
}

/// Name pattern plus division selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    name_pattern: String,
    division: DivisionFilter,
}

impl RecordFilter {
    #[must_use]
    pub fn new(name_pattern: impl Into<String>, division: DivisionFilter) -> Self {
        Self {
            name_pattern: name_pattern.into(),
            division,
        }
    }

    #[must_use]
    pub fn name_pattern(&self) -> &str {
        &self.name_pattern
    }

    #[must_use]
    pub fn division(&self) -> DivisionFilter {
        self.division
    }

    /// Copy of this filter with a different name pattern.
    #[must_use]
    pub fn with_name_pattern(self, name_pattern: impl Into<String>) -> Self {
        Self {
            name_pattern: name_pattern.into(),
            ..self
        }
    }

    /// Copy of this filter with a different division selection.
    #[must_use]
    pub fn with_division(self, division: DivisionFilter) -> Self {
        Self { division, ..self }
    }

    /// True when some records could be hidden.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.name_pattern.is_empty() || self.division != DivisionFilter::All
    }

    #[must_use]
    pub fn matches(&self, record: &StudentRecord) -> bool {
        let name_match = record
            .name()
            .to_lowercase()
            .contains(&self.name_pattern.to_lowercase());
        name_match && self.division.matches(record.division())
    }

    /// Project the store through this filter, keeping store order.
    #[must_use]
    pub fn apply<'a>(&self, store: &'a RecordStore) -> Vec<FilteredRow<'a>> {
        store
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(index, record)| FilteredRow { index, record })
            .collect()
    }
}

/// One visible row: the record and where it lives in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilteredRow<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub record: &'a StudentRecord,
}

/// Filter `store` by name substring and division.
#[must_use]
pub fn filter<'a>(
    store: &'a RecordStore,
    name_pattern: &str,
    division: DivisionFilter,
) -> Vec<FilteredRow<'a>> {
    RecordFilter::new(name_pattern, division).apply(store)
}

// =============================================================================
// TESTS
// =============================================================================
