//! Dashboard SDK for Rust.
//!
//! Provides the logical core of a small sales dashboard: a synthetic daily
//! sales dataset generated once per session, a filter engine applying
//! date-range and category/region predicates, and an aggregator computing
//! the dashboard KPIs. A separate [`notion`] module fetches Notion pages by
//! identifier and extracts their display metadata.
//!
//! # Quick start
//!
//! ```no_run
//! use dashboard_sdk::Dashboard;
//!
//! let dash = Dashboard::builder().year(2023).build().unwrap();
//!
//! // Filter and aggregate with the default (permissive) criteria
//! let criteria = dash.default_criteria();
//! let filtered = dash.query().filter(&criteria).unwrap();
//! let summary = dash.metrics().summarize_filtered(&criteria).unwrap();
//!
//! println!("{} records, total ${}", filtered.len(), summary.total_sales);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod notion;
pub mod query;

#[cfg(feature = "async")]
pub use async_client::{AsyncDashboard, AsyncNotionClient};
pub use error::{DashboardError, Result};
pub use models::{
    Category, FilterCriteria, Page, PageMetadata, Region, SalesRecord, SalesSummary,
};
pub use notion::NotionClient;
pub use query::{MetricsQuery, RecordQuery};

use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// DashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Dashboard`] instance.
///
/// Use [`Dashboard::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DashboardBuilder::build) to generate the
/// dataset and create the dashboard.
pub struct DashboardBuilder {
    year: i32,
    seed: Option<u64>,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self {
            year: config::DEFAULT_YEAR,
            seed: None,
        }
    }
}

impl DashboardBuilder {
    /// Set the calendar year the dataset covers. Defaults to
    /// [`config::DEFAULT_YEAR`].
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Seed the random source so repeated builds yield the same dataset.
    ///
    /// Without a seed, each build draws fresh random data.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate the dataset and build the dashboard.
    ///
    /// Generation happens exactly once here; all subsequent filter and
    /// aggregate operations reuse the owned dataset.
    pub fn build(self) -> Result<Dashboard> {
        let records = match self.seed {
            Some(seed) => generator::generate_seeded(self.year, seed),
            None => generator::generate(self.year),
        }
        .ok_or_else(|| {
            DashboardError::InvalidArgument(format!("year {} is out of range", self.year))
        })?;

        Ok(Dashboard {
            year: self.year,
            records,
        })
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// The main entry point for the dashboard SDK.
///
/// Owns the synthetic dataset for the session (generated once at build time,
/// immutable afterwards) and exposes the filter and aggregation interfaces
/// as lightweight borrowing wrappers.
///
/// Created via [`Dashboard::builder()`].
#[derive(Debug)]
pub struct Dashboard {
    year: i32,
    records: Vec<SalesRecord>,
}

impl Dashboard {
    /// Create a new builder for configuring the dashboard.
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the filter engine.
    ///
    /// Returns a lightweight wrapper that borrows the dataset and provides
    /// predicate-based filtering.
    pub fn query(&self) -> RecordQuery<'_> {
        RecordQuery::new(&self.records)
    }

    /// Access the aggregation interface (KPIs and chart-ready grouped sums).
    pub fn metrics(&self) -> MetricsQuery<'_> {
        MetricsQuery::new(&self.records)
    }

    // -- Dataset accessors -------------------------------------------------

    /// The full generated record sequence, in date order.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// The calendar year the dataset covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The earliest date in the dataset (January 1 of the year).
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// The latest date in the dataset (December 31 of the year).
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// Permissive criteria matching every record: the dataset's full date
    /// range with all categories and regions selected. This is the filter
    /// state a fresh dashboard session starts from.
    pub fn default_criteria(&self) -> FilterCriteria {
        // A built dashboard always holds a full year of records, so the
        // date bounds exist; the defaults are unreachable.
        FilterCriteria {
            start_date: self.min_date().unwrap_or_default(),
            end_date: self.max_date().unwrap_or_default(),
            categories: Category::ALL.into_iter().collect(),
            regions: Region::ALL.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dashboard(year={}, records={})",
            self.year,
            self.records.len()
        )
    }
}
