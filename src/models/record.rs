use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category / Region — closed value sets for the synthetic dataset
// ---------------------------------------------------------------------------

/// Product category of a daily sales observation.
///
/// Variants are declared in lexicographic order; `Ord` therefore sorts by
/// name, which is the tie-break order used by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Books,
    Clothing,
    Electronics,
    Food,
}

impl Category {
    /// All categories, in lexicographic order.
    pub const ALL: [Category; 4] = [
        Category::Books,
        Category::Clothing,
        Category::Electronics,
        Category::Food,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Books => "Books",
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Food => "Food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Books" => Ok(Category::Books),
            "Clothing" => Ok(Category::Clothing),
            "Electronics" => Ok(Category::Electronics),
            "Food" => Ok(Category::Food),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// Sales region of a daily sales observation.
///
/// Same ordering contract as [`Category`]: declaration order is lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    East,
    North,
    South,
    West,
}

impl Region {
    /// All regions, in lexicographic order.
    pub const ALL: [Region; 4] = [Region::East, Region::North, Region::South, Region::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::East => "East",
            Region::North => "North",
            Region::South => "South",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "East" => Ok(Region::East),
            "North" => Ok(Region::North),
            "South" => Ok(Region::South),
            "West" => Ok(Region::West),
            other => Err(format!("unknown region: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// SalesRecord — one synthetic daily observation
// ---------------------------------------------------------------------------

/// One day of synthetic sales data.
///
/// The dataset is an ordered sequence of these, one per calendar day of the
/// configured year, immutable after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub sales: u32,
    pub category: Category,
    pub region: Region,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, sales: u32, category: Category, region: Region) -> Self {
        Self {
            date,
            sales,
            category,
            region,
        }
    }
}
