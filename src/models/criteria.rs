use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::models::record::{Category, Region};

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// The set of predicates narrowing the record collection for one request.
///
/// A record matches when its date falls inside `[start_date, end_date]`
/// (inclusive on both ends) and its category and region are members of the
/// respective sets. Criteria are transient: constructed per request, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub categories: BTreeSet<Category>,
    pub regions: BTreeSet<Region>,
}

impl FilterCriteria {
    /// Permissive criteria covering a full calendar year with every category
    /// and region selected. Mirrors the dashboard's default filter state.
    ///
    /// Returns `None` for years outside chrono's supported range.
    pub fn for_year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(Self {
            start_date: start,
            end_date: end,
            categories: Category::ALL.into_iter().collect(),
            regions: Region::ALL.into_iter().collect(),
        })
    }

    /// Replace the date range.
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Replace the allowed category set.
    pub fn with_categories<I: IntoIterator<Item = Category>>(mut self, categories: I) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Replace the allowed region set.
    pub fn with_regions<I: IntoIterator<Item = Region>>(mut self, regions: I) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }

    /// Validate the criteria before any filtering is attempted.
    ///
    /// A reversed date range is a caller-level error that halts the request;
    /// empty category or region sets are rejected for the same reason (the
    /// dashboard's multi-selects never submit an empty selection).
    pub fn validate(&self) -> Result<()> {
        if self.start_date > self.end_date {
            return Err(DashboardError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.categories.is_empty() {
            return Err(DashboardError::InvalidCriteria(
                "no categories selected".into(),
            ));
        }
        if self.regions.is_empty() {
            return Err(DashboardError::InvalidCriteria("no regions selected".into()));
        }
        Ok(())
    }
}
