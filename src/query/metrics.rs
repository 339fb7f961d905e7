//! Aggregator: KPI computation and chart-ready grouped sums.

use std::collections::BTreeMap;

use crate::error::{DashboardError, Result};
use crate::models::{Category, FilterCriteria, Region, SalesRecord, SalesSummary};
use crate::query::filter::RecordQuery;

// ---------------------------------------------------------------------------
// MetricsQuery
// ---------------------------------------------------------------------------

/// Aggregation interface bound to a borrowed record sequence.
///
/// Obtained via [`Dashboard::metrics()`](crate::Dashboard::metrics). Combines
/// the filter engine with the free-standing aggregation functions below, one
/// full recomputation per interaction.
pub struct MetricsQuery<'a> {
    records: &'a [SalesRecord],
}

impl<'a> MetricsQuery<'a> {
    /// Create a new `MetricsQuery` bound to the given record sequence.
    pub fn new(records: &'a [SalesRecord]) -> Self {
        Self { records }
    }

    /// Filter the dataset and compute the four KPIs over the selection.
    ///
    /// Fails with [`DashboardError::EmptySelection`] when no record matches
    /// the criteria, and with the criteria's own validation error when the
    /// criteria are malformed.
    pub fn summarize_filtered(&self, criteria: &FilterCriteria) -> Result<SalesSummary> {
        let filtered = RecordQuery::new(self.records).filter(criteria)?;
        summarize(&filtered)
    }

    /// Filter the dataset and compute the per-region grouped sums (the bar
    /// chart input).
    pub fn sales_by_region_filtered(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<BTreeMap<Region, u64>> {
        let filtered = RecordQuery::new(self.records).filter(criteria)?;
        Ok(sales_by_region(&filtered))
    }

    /// Filter the dataset and compute the per-category grouped sums (the pie
    /// chart input).
    pub fn sales_by_category_filtered(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<BTreeMap<Category, u64>> {
        let filtered = RecordQuery::new(self.records).filter(criteria)?;
        Ok(sales_by_category(&filtered))
    }
}

// ---------------------------------------------------------------------------
// Free-standing aggregation functions
// ---------------------------------------------------------------------------

/// Sum of sales over a record sequence. Zero for an empty sequence.
pub fn total_sales(records: &[SalesRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.sales)).sum()
}

/// Sum of sales grouped by category.
pub fn sales_by_category(records: &[SalesRecord]) -> BTreeMap<Category, u64> {
    let mut sums: BTreeMap<Category, u64> = BTreeMap::new();
    for r in records {
        *sums.entry(r.category).or_default() += u64::from(r.sales);
    }
    sums
}

/// Sum of sales grouped by region.
pub fn sales_by_region(records: &[SalesRecord]) -> BTreeMap<Region, u64> {
    let mut sums: BTreeMap<Region, u64> = BTreeMap::new();
    for r in records {
        *sums.entry(r.region).or_default() += u64::from(r.sales);
    }
    sums
}

/// Compute the four KPIs over an already-filtered record sequence.
///
/// Pure function of its input. An empty sequence has no defined average or
/// top groups and fails with [`DashboardError::EmptySelection`]; callers
/// surface that as "no data in selection" rather than a numeric error.
///
/// Tie-break: when several categories (or regions) share the maximal grouped
/// sum, the lexicographically smallest name wins. Grouping uses `BTreeMap`
/// and the comparison keeps the first maximum, so the result is
/// deterministic.
pub fn summarize(records: &[SalesRecord]) -> Result<SalesSummary> {
    if records.is_empty() {
        return Err(DashboardError::EmptySelection);
    }

    let total = total_sales(records);
    let avg = total as f64 / records.len() as f64;

    // is_empty() was checked above, so both grouped maps are non-empty.
    let top_category = max_group(&sales_by_category(records)).ok_or(DashboardError::EmptySelection)?;
    let top_region = max_group(&sales_by_region(records)).ok_or(DashboardError::EmptySelection)?;

    Ok(SalesSummary {
        total_sales: total,
        avg_daily_sales: avg,
        top_category,
        top_region,
    })
}

/// Key with the maximal value; first key in ascending key order on ties.
fn max_group<K: Copy + Ord>(sums: &BTreeMap<K, u64>) -> Option<K> {
    let mut best: Option<(K, u64)> = None;
    for (&key, &sum) in sums {
        match best {
            Some((_, best_sum)) if sum <= best_sum => {}
            _ => best = Some((key, sum)),
        }
    }
    best.map(|(key, _)| key)
}
