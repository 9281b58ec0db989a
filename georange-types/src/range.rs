use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix that sorts after every symbol of the geohash alphabet.
pub const RANGE_SENTINEL: &str = "~";

/// A half-open interval `[start, end)` over geohash strings.
///
/// A store that indexes geohashes as plain strings can execute the range
/// directly as `start <= geohash < end`.
///
/// # Examples
///
/// ```
/// use georange_types::range::QueryRange;
///
/// let range = QueryRange::new("9q8", "9q9");
/// assert!(range.contains("9q8yyk"));
/// assert!(!range.contains("9q9"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryRange {
    /// Inclusive lower bound.
    pub start: String,
    /// Exclusive upper bound.
    pub end: String,
}

impl QueryRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether `geohash` lies in `[start, end)` under byte-wise ordering.
    pub fn contains(&self, geohash: &str) -> bool {
        self.start.as_str() <= geohash && geohash < self.end.as_str()
    }
}

impl fmt::Display for QueryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
