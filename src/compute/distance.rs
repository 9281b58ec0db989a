//! Great-circle distance for post-filtering range-query candidates.

use crate::compute::validation::validate_coordinate;
use crate::error::Result;
use geo::{Distance, Geodesic, Point};
use georange_types::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const MILES_PER_KM: f64 = 0.621371;

/// Unit for presenting distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Converts a distance in kilometers into this unit.
    pub fn from_km(self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::Miles => km_to_miles(km),
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Haversine distance between two coordinates, in kilometers, on a sphere of
/// radius [`EARTH_RADIUS_KM`]. The Earth's true radius varies between about
/// 6356.8 km and 6378.1 km, so the result is approximate.
///
/// # Examples
///
/// ```rust
/// use georange::{Coordinate, haversine_km};
///
/// let d = haversine_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0)).unwrap();
/// assert!((d - 111.19).abs() < 0.5);
/// ```
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> Result<f64> {
    validate_coordinate(a)?;
    validate_coordinate(b)?;

    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);

    Ok(2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt()))
}

/// Haversine distance expressed in `unit`.
pub fn haversine(a: &Coordinate, b: &Coordinate, unit: DistanceUnit) -> Result<f64> {
    haversine_km(a, b).map(|km| unit.from_km(km))
}

/// Ellipsoidal (WGS84, Karney 2013) distance in kilometers. Slower than
/// [`haversine_km`]; useful to check how far the spherical model drifts for a
/// given pair.
pub fn geodesic_km(a: &Coordinate, b: &Coordinate) -> Result<f64> {
    validate_coordinate(a)?;
    validate_coordinate(b)?;
    Ok(Geodesic.distance(Point::from(*a), Point::from(*b)) / 1000.0)
}

#[inline]
pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}
