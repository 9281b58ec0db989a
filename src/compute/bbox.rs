//! Representative points of a search circle's bounding box.

use crate::compute::precision::{
    METERS_PER_DEGREE_SPHERE, latitude_extremes, spherical_longitude_degrees,
};
use crate::compute::validation::{validate_coordinate, validate_radius};
use crate::error::Result;
use georange_types::coordinate::{BoundingBoxCoordinates, Coordinate};

const MAX_LONGITUDE_DELTA: f64 = 180.0;

/// Wraps a longitude into `[-180, 180]`. Values already in range are returned
/// unchanged, so both `-180` and `180` survive as-is.
///
/// # Examples
///
/// ```
/// use georange::compute::bbox::wrap_longitude;
///
/// assert_eq!(wrap_longitude(190.0), -170.0);
/// assert_eq!(wrap_longitude(-190.0), 170.0);
/// assert_eq!(wrap_longitude(180.0), 180.0);
/// ```
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        return longitude;
    }
    let adjusted = longitude + 180.0;
    if adjusted > 0.0 {
        adjusted % 360.0 - 180.0
    } else {
        180.0 - (-adjusted % 360.0)
    }
}

/// Nine points that jointly bound the circle of `radius_m` meters around
/// `center`: the center row, the northern row and the southern row, each at
/// the center longitude and shifted west and east.
///
/// Shifts are measured on the haversine sphere that distance filtering uses,
/// so the rows and columns reach the circle's true extent. The longitude
/// shift is taken at whichever latitude extreme lies closer to a pole, where
/// a meter spans the most degrees, and is capped at 180 degrees so a circle
/// reaching a pole samples the antipodal meridian instead of wrapping back
/// onto its own. Neither shift exceeds the cell size
/// [`bounding_box_bits`](crate::compute::precision::bounding_box_bits) plans
/// for, so no cell is skipped between two sample points. The box
/// over-approximates the circle; callers drop the extra candidates by exact
/// distance.
///
/// Order: center, west, east, north, north-west, north-east, south,
/// south-west, south-east.
pub fn bounding_box_coordinates(
    center: &Coordinate,
    radius_m: f64,
) -> Result<BoundingBoxCoordinates> {
    validate_coordinate(center)?;
    validate_radius(radius_m)?;

    let (north_extreme, south_extreme) = latitude_extremes(center, radius_m);
    let lng_delta = spherical_longitude_degrees(radius_m, north_extreme)
        .max(spherical_longitude_degrees(radius_m, south_extreme))
        .min(MAX_LONGITUDE_DELTA);

    let lat_delta = radius_m / METERS_PER_DEGREE_SPHERE;
    let north = (center.lat + lat_delta).min(90.0);
    let south = (center.lat - lat_delta).max(-90.0);

    let west = wrap_longitude(center.lng - lng_delta);
    let east = wrap_longitude(center.lng + lng_delta);

    Ok([
        *center,
        center.with_lng(west),
        center.with_lng(east),
        center.with_lat(north),
        Coordinate::new(north, west),
        Coordinate::new(north, east),
        center.with_lat(south),
        Coordinate::new(south, west),
        Coordinate::new(south, east),
    ])
}
