//! Async wrapper around [`Dashboard`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! filter and aggregate operations are CPU-bound but fast, and the Notion
//! fetch is a single blocking HTTP call, making this approach sufficient.
//!
//! # Example
//!
//! ```no_run
//! use dashboard_sdk::AsyncDashboard;
//!
//! #[tokio::main]
//! async fn main() {
//!     let dash = AsyncDashboard::builder().year(2023).build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let criteria = dash.run(|d| Ok(d.default_criteria())).await.unwrap();
//!     let summary = dash.summarize(&criteria).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{DashboardError, Result};
use crate::models::{FilterCriteria, Page, PageMetadata, SalesRecord, SalesSummary};
use crate::notion::NotionClient;
use crate::Dashboard;

// ---------------------------------------------------------------------------
// AsyncDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDashboard`] instance.
#[derive(Default)]
pub struct AsyncDashboardBuilder {
    year: Option<i32>,
    seed: Option<u64>,
}

impl AsyncDashboardBuilder {
    /// Set the calendar year the dataset covers.
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Seed the random source for reproducible datasets.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the async dashboard, generating the dataset on the blocking
    /// thread pool so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncDashboard> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Dashboard::builder();
            if let Some(year) = self.year {
                builder = builder.year(year);
            }
            if let Some(seed) = self.seed {
                builder = builder.seed(seed);
            }
            let dash = builder.build()?;
            Ok(AsyncDashboard {
                inner: Arc::new(Mutex::new(dash)),
            })
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDashboard
// ---------------------------------------------------------------------------

/// Async wrapper around [`Dashboard`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`Dashboard`] is protected
/// by a [`Mutex`] so the wrapper is `Send + Sync`.
///
/// Use [`run()`](Self::run) to execute any sync SDK method:
///
/// ```no_run
/// # use dashboard_sdk::AsyncDashboard;
/// # async fn example() -> dashboard_sdk::Result<()> {
/// let dash = AsyncDashboard::builder().build().await?;
/// let n = dash.run(|d| Ok(d.records().len())).await?;
/// # Ok(())
/// # }
/// ```
pub struct AsyncDashboard {
    inner: Arc<Mutex<Dashboard>>,
}

impl AsyncDashboard {
    /// Create a new builder for configuring the async dashboard.
    pub fn builder() -> AsyncDashboardBuilder {
        AsyncDashboardBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&Dashboard` reference and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Dashboard) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let dash = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = dash
                .lock()
                .map_err(|_| DashboardError::InvalidArgument("dashboard lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Filter the dataset asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`RecordQuery::filter()`](crate::query::RecordQuery::filter).
    pub async fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<SalesRecord>> {
        let criteria = criteria.clone();
        self.run(move |d| d.query().filter(&criteria)).await
    }

    /// Compute the KPI summary for a filtered selection asynchronously.
    pub async fn summarize(&self, criteria: &FilterCriteria) -> Result<SalesSummary> {
        let criteria = criteria.clone();
        self.run(move |d| d.metrics().summarize_filtered(&criteria))
            .await
    }
}

// ---------------------------------------------------------------------------
// AsyncNotionClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`NotionClient`].
///
/// The blocking page fetch runs via [`tokio::task::spawn_blocking`]. The
/// underlying client is immutable and `Send + Sync`, so it is shared through
/// an [`Arc`] without locking.
pub struct AsyncNotionClient {
    inner: Arc<NotionClient>,
}

impl AsyncNotionClient {
    /// Wrap an already-built sync client.
    pub fn new(client: NotionClient) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&NotionClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Retrieve a page document asynchronously.
    pub async fn retrieve_page(&self, page_id: &str) -> Result<Page> {
        let page_id = page_id.to_string();
        self.run(move |c| c.retrieve_page(&page_id)).await
    }

    /// Retrieve a page and extract its metadata asynchronously.
    pub async fn page_metadata(&self, page_id: &str) -> Result<PageMetadata> {
        let page_id = page_id.to_string();
        self.run(move |c| c.page_metadata(&page_id)).await
    }
}
