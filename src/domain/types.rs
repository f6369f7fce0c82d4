//! Rating buckets and problem records.
//!
//! These types are intentionally kept lightweight and deserializable so they
//! can be:
//!
//! - decoded straight out of the API response
//! - passed read-only through aggregation and reporting

use serde::Deserialize;

/// A named half-open rating interval `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBucket {
    pub label: &'static str,
    pub lower: i64,
    pub upper: i64,
}

/// The fixed bucket table, ordered by ascending lower bound.
///
/// Classification scans this table top to bottom and returns the first
/// match, so earlier entries would win on overlap. The table itself is
/// checked for overlap and gaps in tests, not at runtime.
pub const RATING_BUCKETS: [RatingBucket; 5] = [
    RatingBucket { label: "0-1000", lower: 0, upper: 1000 },
    RatingBucket { label: "1000-1300", lower: 1000, upper: 1300 },
    RatingBucket { label: "1300-1600", lower: 1300, upper: 1600 },
    RatingBucket { label: "1600-1900", lower: 1600, upper: 1900 },
    // 2100 inclusive.
    RatingBucket { label: "1900-2100", lower: 1900, upper: 2101 },
];

/// Return the label of the first bucket (in table order) whose interval
/// contains `rating`, or `None` if the rating is missing or outside all
/// defined buckets.
pub fn bucket_label(rating: Option<i64>) -> Option<&'static str> {
    let rating = rating?;
    RATING_BUCKETS
        .iter()
        .find(|b| b.lower <= rating && rating < b.upper)
        .map(|b| b.label)
}

/// One problem record from the problemset API.
///
/// Both fields are optional on the wire; a missing `tags` list is treated as
/// empty and a missing `rating` classifies to no bucket. Neither is an error.
#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}
