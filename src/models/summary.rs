use serde::{Deserialize, Serialize};

use crate::models::record::{Category, Region};

/// The four dashboard KPIs computed over a filtered record collection.
///
/// Derived data: recomputed on every filter change, never cached. Produced by
/// [`summarize`](crate::query::metrics::summarize), which rejects empty input
/// instead of emitting an undefined average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Sum of sales over the filtered records.
    pub total_sales: u64,
    /// Arithmetic mean of the daily sales amounts.
    pub avg_daily_sales: f64,
    /// Category with the maximal grouped sales sum (ties resolve to the
    /// lexicographically smallest name).
    pub top_category: Category,
    /// Region with the maximal grouped sales sum (same tie-break).
    pub top_region: Region,
}
