//! Validation for coordinates, geohashes and search radii.

use crate::compute::geohash::char_index;
use crate::error::{GeoRangeError, Result};
use georange_types::coordinate::Coordinate;

/// Validates that a coordinate has a finite latitude in `[-90, 90]` and a
/// finite longitude in `[-180, 180]`. Out-of-range values are rejected, never
/// clamped.
///
/// # Examples
///
/// ```
/// use georange::compute::validation::validate_coordinate;
/// use georange::Coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(90.0, 180.0)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(-90.0, -180.0)).is_ok());
///
/// assert!(validate_coordinate(&Coordinate::new(91.0, 0.0)).is_err());
/// assert!(validate_coordinate(&Coordinate::new(0.0, 181.0)).is_err());
/// ```
pub fn validate_coordinate(coordinate: &Coordinate) -> Result<()> {
    let Coordinate { lat, lng } = *coordinate;

    if !lat.is_finite() {
        return Err(GeoRangeError::coordinate(
            lat,
            lng,
            "latitude must be finite",
        ));
    }

    if !lng.is_finite() {
        return Err(GeoRangeError::coordinate(
            lat,
            lng,
            "longitude must be finite",
        ));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeoRangeError::coordinate(
            lat,
            lng,
            "latitude must be within the range [-90, 90]",
        ));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(GeoRangeError::coordinate(
            lat,
            lng,
            "longitude must be within the range [-180, 180]",
        ));
    }

    Ok(())
}

/// Validates that a geohash is non-empty and uses only the base-32 alphabet.
///
/// # Examples
///
/// ```
/// use georange::compute::validation::validate_geohash;
///
/// assert!(validate_geohash("dr5regw").is_ok());
/// assert!(validate_geohash("").is_err());
/// assert!(validate_geohash("dr5a").is_err()); // 'a' is not in the alphabet
/// ```
pub fn validate_geohash(geohash: &str) -> Result<()> {
    if geohash.is_empty() {
        return Err(GeoRangeError::InvalidGeohash(
            "geohash cannot be the empty string".to_string(),
        ));
    }

    if let Some(letter) = geohash.chars().find(|&c| char_index(c).is_none()) {
        return Err(GeoRangeError::InvalidGeohash(format!(
            "geohash {:?} cannot contain {:?}",
            geohash, letter
        )));
    }

    Ok(())
}

/// Validates a search radius in meters. Zero is allowed.
pub fn validate_radius(radius_m: f64) -> Result<()> {
    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(GeoRangeError::InvalidRadius(radius_m));
    }
    Ok(())
}
