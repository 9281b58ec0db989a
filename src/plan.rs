//! Query plans: everything a caller needs to run one proximity search.

use crate::compute::geohash::{MAX_BITS, chars_for_bits};
use crate::compute::precision::bounding_box_bits;
use crate::compute::range::{QueryRanges, ranges_with_bits};
use crate::error::Result;
use georange_types::coordinate::Coordinate;
use georange_types::range::QueryRange;
use serde::{Deserialize, Serialize};

/// The ranges covering one search circle, with the precision they were
/// planned at.
///
/// A plan is an owned value built per call; nothing is shared between plans,
/// so callers may run its ranges concurrently and union the results.
///
/// # Examples
///
/// ```rust
/// use georange::{Coordinate, QueryPlan, encode};
///
/// let center = Coordinate::new(40.7128, -74.0060);
/// let plan = QueryPlan::new(center, 5_000.0)?;
///
/// for range in plan.iter() {
///     // store.range_scan("geohash", &range.start, &range.end) ...
///     assert!(range.start <= range.end);
/// }
///
/// let empire_state = encode(&Coordinate::new(40.7484, -73.9857), 10)?;
/// assert!(plan.covers(&empire_state));
/// # Ok::<(), georange::GeoRangeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPlan {
    pub center: Coordinate,
    pub radius_m: f64,
    /// Leading geohash bits shared by every match of a range.
    pub bits: u32,
    /// Geohash characters the bounding points were encoded at.
    pub precision: usize,
    pub ranges: QueryRanges,
}

impl QueryPlan {
    /// Plans the ranges for all points within `radius_m` meters of `center`.
    pub fn new(center: Coordinate, radius_m: f64) -> Result<Self> {
        Self::with_max_bits(center, radius_m, MAX_BITS)
    }

    /// Like [`QueryPlan::new`], but never shares more than `max_bits` leading
    /// bits per range. Keys stored with `n` characters need `max_bits <= 5 * n`
    /// to sort inside the ranges. Coarser ranges still cover the circle.
    pub fn with_max_bits(center: Coordinate, radius_m: f64, max_bits: u32) -> Result<Self> {
        let bits = bounding_box_bits(&center, radius_m)?.min(max_bits.max(1));
        let ranges = ranges_with_bits(&center, radius_m, bits)?;

        Ok(Self {
            center,
            radius_m,
            bits,
            precision: chars_for_bits(bits),
            ranges,
        })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryRange> {
        self.ranges.iter()
    }

    /// Whether some range of the plan contains `geohash`.
    pub fn covers(&self, geohash: &str) -> bool {
        self.ranges.iter().any(|range| range.contains(geohash))
    }

    pub fn into_ranges(self) -> Vec<QueryRange> {
        self.ranges.into_vec()
    }
}

impl<'a> IntoIterator for &'a QueryPlan {
    type Item = &'a QueryRange;
    type IntoIter = std::slice::Iter<'a, QueryRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
