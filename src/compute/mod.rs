//! Pure computation behind proximity queries.
//!
//! Leaves first:
//! - [`validation`]: coordinate, geohash and radius checks
//! - [`geohash`]: base-32 encoding and alphabet tables
//! - [`precision`]: bit precision for a physical size
//! - [`bbox`]: representative points of a search circle
//! - [`range`]: `[start, end)` ranges and their deduplication
//! - [`distance`]: haversine distance and units
//!
//! Every function here is a pure function of its arguments, so all of them can
//! be called from any number of threads at once.

pub mod bbox;
pub mod distance;
pub mod geohash;
pub mod precision;
pub mod range;
pub mod validation;

pub use bbox::{bounding_box_coordinates, wrap_longitude};
pub use distance::{DistanceUnit, geodesic_km, haversine, haversine_km, km_to_miles};
pub use geohash::encode;
pub use precision::bounding_box_bits;
pub use range::{QueryRanges, dedup_ranges, geohash_queries, query_for_geohash};
pub use validation::{validate_coordinate, validate_geohash, validate_radius};
