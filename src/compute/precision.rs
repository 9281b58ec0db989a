//! How many geohash bits a query can afford at a given physical scale.
//!
//! A cell described by `n` leading bits must be at least as large as the
//! search box, otherwise a handful of ranges can no longer cover it. Latitude
//! degrees have a near-constant length, while longitude degrees shrink toward
//! the poles, so the longitude contribution is evaluated at the circle's
//! northern and southern extremes and the smallest bit count wins.
//!
//! Bit counts follow the WGS84 ellipsoid, but the bounding box samples the
//! circle on the haversine sphere used for distance filtering. Cells are
//! therefore also kept at least as wide as the spherical longitude delta.

use crate::compute::distance::EARTH_RADIUS_KM;
use crate::compute::geohash::MAX_BITS;
use crate::compute::validation::{validate_coordinate, validate_radius};
use crate::error::Result;
use georange_types::coordinate::Coordinate;

/// Pole-to-pole-and-back length of a meridian, in meters.
pub const EARTH_MERIDIONAL_CIRCUMFERENCE_M: f64 = 40_007_860.0;

/// Length of one degree of latitude, in meters. The value at the equator,
/// which is the shortest, so degree deltas derived from it err on the large side.
pub const METERS_PER_DEGREE_LATITUDE: f64 = 110_574.0;

/// Length of one degree of a great circle on the haversine sphere, in meters.
pub const METERS_PER_DEGREE_SPHERE: f64 = EARTH_RADIUS_KM * 1000.0 * std::f64::consts::PI / 180.0;

/// WGS84 equatorial radius, in meters.
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared.
pub const EARTH_ECCENTRICITY_SQUARED: f64 = 0.00669447819799;

/// e^-12: below this a degree of longitude is treated as zero length.
const DEGREE_LENGTH_EPSILON: f64 = 6.14421235332821e-6;

/// Below this a longitude delta is too small to derive bits from.
const NEGLIGIBLE_DEGREES: f64 = 1e-6;

/// Bits of latitude precision whose cell height is at least `meters`,
/// capped at [`MAX_BITS`].
pub fn latitude_bits_for_resolution(meters: f64) -> f64 {
    (EARTH_MERIDIONAL_CIRCUMFERENCE_M / 2.0 / meters)
        .log2()
        .min(MAX_BITS as f64)
}

/// Converts a distance in meters to degrees of longitude at `latitude`,
/// on the WGS84 ellipsoid. Never more than 360; near the poles any positive
/// distance spans every longitude.
pub fn meters_to_longitude_degrees(meters: f64, latitude: f64) -> f64 {
    let radians = latitude.to_radians();
    let sin = radians.sin();
    let degree_length = radians.cos() * EARTH_EQUATORIAL_RADIUS_M * std::f64::consts::PI
        / 180.0
        / (1.0 - EARTH_ECCENTRICITY_SQUARED * sin * sin).sqrt();

    if degree_length >= DEGREE_LENGTH_EPSILON {
        (meters / degree_length).min(360.0)
    } else if meters > 0.0 {
        360.0
    } else {
        0.0
    }
}

/// Converts a distance in meters to degrees of longitude at `latitude` on
/// the haversine sphere. Never more than 360.
pub fn spherical_longitude_degrees(meters: f64, latitude: f64) -> f64 {
    let degree_length = METERS_PER_DEGREE_SPHERE * latitude.to_radians().cos();
    if degree_length > 0.0 {
        (meters / degree_length).min(360.0)
    } else if meters > 0.0 {
        360.0
    } else {
        0.0
    }
}

/// Bits of longitude precision whose cell width is at least `meters` at
/// `latitude`. At least 1.
pub fn longitude_bits_for_resolution(meters: f64, latitude: f64) -> f64 {
    longitude_bits_for_degrees(meters_to_longitude_degrees(meters, latitude))
}

fn longitude_bits_for_degrees(degrees: f64) -> f64 {
    if degrees.abs() > NEGLIGIBLE_DEGREES {
        (360.0 / degrees).log2().max(1.0)
    } else {
        1.0
    }
}

/// Longitude bits at `latitude` under both earth models; the smaller count
/// gives cells wide enough for either.
fn longitude_bits_at(meters: f64, latitude: f64) -> f64 {
    longitude_bits_for_resolution(meters, latitude)
        .min(longitude_bits_for_degrees(spherical_longitude_degrees(meters, latitude)))
}

/// Northern and southern latitude extremes of a circle, clamped to the poles.
pub(crate) fn latitude_extremes(center: &Coordinate, radius_m: f64) -> (f64, f64) {
    let delta = radius_m / METERS_PER_DEGREE_LATITUDE;
    ((center.lat + delta).min(90.0), (center.lat - delta).max(-90.0))
}

/// Maximum number of leading geohash bits such that the cell containing
/// `center` is at least `radius_m` in every direction, evaluated at the
/// circle's northern and southern extremes.
///
/// The result is in `1..=MAX_BITS`.
///
/// # Examples
///
/// ```
/// use georange::{Coordinate, bounding_box_bits};
///
/// let bits = bounding_box_bits(&Coordinate::new(40.7128, -74.0060), 5_000.0).unwrap();
/// assert!((1..=110).contains(&bits));
/// ```
pub fn bounding_box_bits(center: &Coordinate, radius_m: f64) -> Result<u32> {
    validate_coordinate(center)?;
    validate_radius(radius_m)?;

    let (north, south) = latitude_extremes(center, radius_m);
    let bits_lat = latitude_bits_for_resolution(radius_m).floor() * 2.0;
    let bits_lng_north = longitude_bits_at(radius_m, north).floor() * 2.0 - 1.0;
    let bits_lng_south = longitude_bits_at(radius_m, south).floor() * 2.0 - 1.0;

    let bits = bits_lat
        .min(bits_lng_north)
        .min(bits_lng_south)
        .min(MAX_BITS as f64)
        .max(1.0);

    Ok(bits as u32)
}
