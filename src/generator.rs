//! Synthetic daily sales dataset generation.
//!
//! Produces one record per calendar day of a year with a uniformly random
//! sales amount and uniformly chosen category and region. Generation happens
//! once per [`Dashboard`](crate::Dashboard); every filter interaction reuses
//! the same dataset.

use chrono::NaiveDate;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::config;
use crate::models::{Category, Region, SalesRecord};

/// Generate the synthetic dataset for a calendar year.
///
/// Returns one record per day from January 1 to December 31 in date order
/// (365 entries, or 366 in a leap year). Sales amounts are drawn uniformly
/// from [`config::SALES_RANGE`]; category and region are chosen uniformly
/// from their fixed sets.
///
/// Returns `None` for years outside chrono's supported range.
pub fn generate(year: i32) -> Option<Vec<SalesRecord>> {
    generate_with_rng(year, &mut thread_rng())
}

/// Generate a reproducible dataset for a calendar year.
///
/// Identical to [`generate`] except the random source is seeded, so the same
/// `(year, seed)` pair always yields the same dataset.
pub fn generate_seeded(year: i32, seed: u64) -> Option<Vec<SalesRecord>> {
    generate_with_rng(year, &mut StdRng::seed_from_u64(seed))
}

fn generate_with_rng<R: Rng>(year: i32, rng: &mut R) -> Option<Vec<SalesRecord>> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)?;

    let mut records = Vec::with_capacity(366);
    for date in start.iter_days().take_while(|d| *d <= end) {
        let sales = rng.gen_range(config::SALES_RANGE);
        // ALL tables are non-empty, so choose() cannot return None.
        let category = *Category::ALL.choose(rng).unwrap_or(&Category::ALL[0]);
        let region = *Region::ALL.choose(rng).unwrap_or(&Region::ALL[0]);
        records.push(SalesRecord::new(date, sales, category, region));
    }

    Some(records)
}
