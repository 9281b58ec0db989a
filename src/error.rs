//! Error types for the proximity query engine.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoRangeError>;

/// Validation failures. All of them are local and recoverable: nothing in the
/// engine retries, and no partial results are produced on error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoRangeError {
    /// Latitude outside `[-90, 90]`, longitude outside `[-180, 180]`, or a
    /// non-finite component.
    #[error("invalid coordinate ({lat}, {lng}): {reason}")]
    InvalidCoordinate { lat: f64, lng: f64, reason: String },

    /// Empty geohash or a character outside the base-32 alphabet.
    #[error("invalid geohash: {0}")]
    InvalidGeohash(String),

    /// Search radius that is negative or not finite.
    #[error("invalid radius {0}: must be a finite, non-negative number of meters")]
    InvalidRadius(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GeoRangeError {
    pub(crate) fn coordinate(lat: f64, lng: f64, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            lat,
            lng,
            reason: reason.into(),
        }
    }
}
