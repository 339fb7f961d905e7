//! Filter engine: conjunctive predicate evaluation over the record sequence.

use crate::error::Result;
use crate::models::{FilterCriteria, SalesRecord};

// ---------------------------------------------------------------------------
// RecordQuery
// ---------------------------------------------------------------------------

/// Filter interface bound to a borrowed record sequence.
///
/// Obtained via [`Dashboard::query()`](crate::Dashboard::query). Filtering is
/// order-preserving and side-effect free; an empty result is a valid outcome,
/// not an error.
pub struct RecordQuery<'a> {
    records: &'a [SalesRecord],
}

impl<'a> RecordQuery<'a> {
    /// Create a new `RecordQuery` bound to the given record sequence.
    pub fn new(records: &'a [SalesRecord]) -> Self {
        Self { records }
    }

    /// The underlying (unfiltered) record sequence.
    pub fn records(&self) -> &'a [SalesRecord] {
        self.records
    }

    /// Return the ordered subsequence of records satisfying all criteria
    /// predicates: date inside the inclusive range, category and region
    /// members of their allowed sets.
    ///
    /// The criteria are validated first; a reversed date range or an empty
    /// selection set fails the request before any filtering is attempted.
    pub fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<SalesRecord>> {
        criteria.validate()?;
        Ok(self
            .records
            .iter()
            .filter(|r| matches(r, criteria))
            .copied()
            .collect())
    }

    /// Count the records satisfying the criteria without materializing them.
    pub fn count(&self, criteria: &FilterCriteria) -> Result<usize> {
        criteria.validate()?;
        Ok(self.records.iter().filter(|r| matches(r, criteria)).count())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Conjunction of the three criteria predicates for a single record.
///
/// Assumes the criteria have already been validated.
pub fn matches(record: &SalesRecord, criteria: &FilterCriteria) -> bool {
    record.date >= criteria.start_date
        && record.date <= criteria.end_date
        && criteria.categories.contains(&record.category)
        && criteria.regions.contains(&record.region)
}
