//! Base-32 geohash encoding.
//!
//! A geohash interleaves the bits of a binary subdivision of longitude and
//! latitude, longitude first, and packs them five at a time into symbols of
//! the alphabet `0123456789bcdefghjkmnpqrstuvwxyz`. Lexicographic order of
//! geohash strings therefore follows the Z-order curve, which is what makes
//! prefix ranges usable as spatial queries.

use crate::compute::validation::validate_coordinate;
use crate::error::Result;
use georange_types::coordinate::Coordinate;

/// Geohash alphabet indexed by 5-bit value. `a`, `i`, `l` and `o` are absent.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

pub const BITS_PER_CHAR: u32 = 5;

/// Longest geohash, in characters, the planner ever asks for.
pub const MAX_PRECISION: usize = 22;

/// Ceiling on useful precision, in bits.
pub const MAX_BITS: u32 = MAX_PRECISION as u32 * BITS_PER_CHAR;

const BASE32_REVERSE: [i8; 128] = build_reverse_table();

const fn build_reverse_table() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < BASE32.len() {
        table[BASE32[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Symbol for a 5-bit value. Only the low five bits of `value` are used.
#[inline]
pub fn symbol(value: u8) -> char {
    BASE32[(value & 0x1f) as usize] as char
}

/// 5-bit value of a geohash symbol, or `None` outside the alphabet.
#[inline]
pub fn char_index(c: char) -> Option<u8> {
    let code = c as u32;
    if code >= 128 {
        return None;
    }
    match BASE32_REVERSE[code as usize] {
        -1 => None,
        value => Some(value as u8),
    }
}

/// Encode a coordinate as a geohash of `precision` characters.
///
/// Each bisection step emits `1` only when the value is strictly greater than
/// the midpoint; a value exactly on the midpoint goes to the lower half.
///
/// # Examples
///
/// ```
/// use georange::{Coordinate, encode};
///
/// let hash = encode(&Coordinate::new(57.64911, 10.40744), 11).unwrap();
/// assert_eq!(hash, "u4pruydqqvj");
///
/// assert!(encode(&Coordinate::new(91.0, 0.0), 5).is_err());
/// ```
pub fn encode(coordinate: &Coordinate, precision: usize) -> Result<String> {
    validate_coordinate(coordinate)?;

    let mut hash = String::with_capacity(precision);
    let (mut lng_min, mut lng_max) = (-180.0_f64, 180.0_f64);
    let (mut lat_min, mut lat_max) = (-90.0_f64, 90.0_f64);
    let mut value = 0u8;
    let mut bit = 0u32;
    let mut even = true;

    while hash.len() < precision {
        let (point, min, max) = if even {
            (coordinate.lng, &mut lng_min, &mut lng_max)
        } else {
            (coordinate.lat, &mut lat_min, &mut lat_max)
        };

        let mid = (*min + *max) / 2.0;
        if point > mid {
            value = (value << 1) | 1;
            *min = mid;
        } else {
            value <<= 1;
            *max = mid;
        }

        even = !even;
        bit += 1;
        if bit == BITS_PER_CHAR {
            hash.push(symbol(value));
            value = 0;
            bit = 0;
        }
    }

    Ok(hash)
}

/// Number of characters needed to hold `bits` bits.
#[inline]
pub fn chars_for_bits(bits: u32) -> usize {
    bits.div_ceil(BITS_PER_CHAR) as usize
}
