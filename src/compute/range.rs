//! Lexicographic range queries over geohash strings.
//!
//! Every geohash sharing the first `bits` bits of a given hash sorts into one
//! contiguous block. [`query_for_geohash`] turns that block into a half-open
//! `[start, end)` string interval, and [`geohash_queries`] produces the
//! deduplicated set of such intervals that together cover a search circle.

use crate::compute::bbox::bounding_box_coordinates;
use crate::compute::geohash::{BITS_PER_CHAR, char_index, chars_for_bits, encode, symbol};
use crate::compute::precision::bounding_box_bits;
use crate::compute::validation::validate_geohash;
use crate::error::{GeoRangeError, Result};
use georange_types::coordinate::Coordinate;
use georange_types::range::{QueryRange, RANGE_SENTINEL};
use smallvec::SmallVec;

/// Ranges for one search. Nine at most, one per bounding-box point.
pub type QueryRanges = SmallVec<[QueryRange; 9]>;

/// The `[start, end)` range of all geohashes that share the first `bits` bits
/// of `geohash`.
///
/// When `geohash` is shorter than the characters those bits need, the range
/// cannot be narrowed beyond the whole hash and becomes `[geohash, geohash~)`.
/// When the masked last symbol has no successor in the alphabet, `end` is the
/// prefix followed by `~`. Zero bits match everything: `["", "~")`.
///
/// # Examples
///
/// ```
/// use georange::query_for_geohash;
///
/// let range = query_for_geohash("s", 5).unwrap();
/// assert_eq!((range.start.as_str(), range.end.as_str()), ("s", "t"));
///
/// let range = query_for_geohash("dr5", 12).unwrap();
/// assert_eq!((range.start.as_str(), range.end.as_str()), ("dr0", "dr8"));
/// ```
pub fn query_for_geohash(geohash: &str, bits: u32) -> Result<QueryRange> {
    validate_geohash(geohash)?;

    if bits == 0 {
        return Ok(QueryRange::new("", RANGE_SENTINEL));
    }

    let precision = chars_for_bits(bits);
    if geohash.len() < precision {
        return Ok(QueryRange::new(
            geohash,
            format!("{geohash}{RANGE_SENTINEL}"),
        ));
    }

    // The alphabet is ASCII, so byte offsets are character offsets.
    let (base, last) = geohash[..precision].split_at(precision - 1);
    let last_value = last
        .chars()
        .next()
        .and_then(char_index)
        .ok_or_else(|| GeoRangeError::InvalidGeohash(format!("geohash {geohash:?} is truncated")))?;

    let significant_bits = bits - base.len() as u32 * BITS_PER_CHAR;
    let unused_bits = BITS_PER_CHAR - significant_bits;

    let start_value = (last_value >> unused_bits) << unused_bits;
    let end_value = start_value + (1 << unused_bits);

    let start = format!("{base}{}", symbol(start_value));
    if end_value > 31 {
        Ok(QueryRange::new(start, format!("{base}{RANGE_SENTINEL}")))
    } else {
        Ok(QueryRange::new(start, format!("{base}{}", symbol(end_value))))
    }
}

/// Removes exact duplicate ranges, keeping the first occurrence of each and
/// the original order otherwise. Applying it twice changes nothing.
pub fn dedup_ranges(ranges: impl IntoIterator<Item = QueryRange>) -> QueryRanges {
    let mut unique = QueryRanges::new();
    for range in ranges {
        if !unique.contains(&range) {
            unique.push(range);
        }
    }
    unique
}

/// Ranges covering the circle at a precomputed bit precision.
pub(crate) fn ranges_with_bits(
    center: &Coordinate,
    radius_m: f64,
    bits: u32,
) -> Result<QueryRanges> {
    let precision = chars_for_bits(bits);
    let coordinates = bounding_box_coordinates(center, radius_m)?;

    let mut ranges = QueryRanges::new();
    for coordinate in &coordinates {
        let hash = encode(coordinate, precision)?;
        ranges.push(query_for_geohash(&hash, bits)?);
    }

    let ranges = dedup_ranges(ranges);
    log::debug!(
        "Planned {} geohash ranges at {} bits ({} chars) for {}m around {}",
        ranges.len(),
        bits,
        precision,
        radius_m,
        center
    );
    for range in &ranges {
        log::trace!("geohash range {}", range);
    }

    Ok(ranges)
}

/// The set of `[start, end)` ranges whose union contains the geohash of every
/// point within `radius_m` meters of `center`.
///
/// Ranges may also match points outside the circle; filter candidates by
/// exact distance afterwards. At most nine ranges are returned, without
/// duplicates.
///
/// # Examples
///
/// ```
/// use georange::{Coordinate, geohash_queries};
///
/// let ranges = geohash_queries(&Coordinate::new(40.7128, -74.0060), 5_000.0).unwrap();
/// assert!((1..=9).contains(&ranges.len()));
/// for range in &ranges {
///     assert!(range.start <= range.end);
/// }
/// ```
pub fn geohash_queries(center: &Coordinate, radius_m: f64) -> Result<Vec<QueryRange>> {
    let bits = bounding_box_bits(center, radius_m)?;
    Ok(ranges_with_bits(center, radius_m, bits)?.into_vec())
}
