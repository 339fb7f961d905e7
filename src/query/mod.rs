//! Query modules for the dashboard SDK.
//!
//! Each module provides a query struct that borrows the generated record
//! sequence from a [`Dashboard`](crate::Dashboard) and exposes methods
//! returning `Result<T>`.

pub mod filter;
pub mod metrics;

pub use filter::RecordQuery;
pub use metrics::MetricsQuery;
