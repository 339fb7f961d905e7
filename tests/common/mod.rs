//! Shared test fixtures for the dashboard SDK integration tests.
//!
//! Provides a small fixed record set with known sums and helpers for building
//! dates and criteria, so aggregate assertions are exact.

#![allow(dead_code)]

use chrono::NaiveDate;
use dashboard_sdk::{Category, FilterCriteria, Region, SalesRecord};

/// Shorthand for a date that is known to be valid.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Three-record fixture:
///
/// | date       | sales | category | region |
/// |------------|-------|----------|--------|
/// | 2023-01-01 | 100   | Food     | North  |
/// | 2023-01-02 | 200   | Food     | South  |
/// | 2023-01-03 | 50    | Books    | North  |
pub fn sample_records() -> Vec<SalesRecord> {
    vec![
        SalesRecord::new(date(2023, 1, 1), 100, Category::Food, Region::North),
        SalesRecord::new(date(2023, 1, 2), 200, Category::Food, Region::South),
        SalesRecord::new(date(2023, 1, 3), 50, Category::Books, Region::North),
    ]
}

/// Permissive criteria for the fixture's year: full 2023 with every category
/// and region selected.
pub fn all_of_2023() -> FilterCriteria {
    FilterCriteria::for_year(2023).unwrap()
}
