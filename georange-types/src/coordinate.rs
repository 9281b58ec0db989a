use geo::{Coord, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic position in degrees.
///
/// Unlike `geo::Point`, which stores `(x, y)` as `(longitude, latitude)`, the
/// fields are named and ordered latitude first. Bounds are not enforced here;
/// the engine validates every coordinate before using it.
///
/// # Examples
///
/// ```
/// use georange_types::coordinate::Coordinate;
/// use geo::Point;
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// let point: Point = nyc.into();
/// assert_eq!(point.x(), -74.0060);
/// assert_eq!(point.y(), 40.7128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, expected in `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, expected in `[-180, 180]`.
    pub lng: f64,
}

/// The nine representative points that jointly bound a search circle.
pub type BoundingBoxCoordinates = [Coordinate; 9];

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Same position with a different latitude.
    pub const fn with_lat(self, lat: f64) -> Self {
        Self { lat, lng: self.lng }
    }

    /// Same position with a different longitude.
    pub const fn with_lng(self, lng: f64) -> Self {
        Self { lat: self.lat, lng }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.lng, coordinate.lat)
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Coord {
            x: coordinate.lng,
            y: coordinate.lat,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Interprets the tuple as `(lat, lng)`.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
