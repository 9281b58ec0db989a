//! Geohash proximity queries for stores without a geospatial index.
//!
//! A "records within R meters of P" search becomes at most nine half-open
//! string ranges over a geohash field, which any store with single-field
//! range scans can execute. The ranges over-approximate the circle; the
//! haversine post-filter removes the false positives and sorts by distance.
//!
//! ```rust
//! use georange::{Coordinate, GeoQueryEngine, QueryPlan};
//!
//! let engine = GeoQueryEngine::default();
//!
//! // Index each record under its geohash.
//! let cafe = Coordinate::new(40.7410, -73.9896);
//! let key = engine.index_key(&cafe)?;
//!
//! // Plan a search and run each range against the store.
//! let center = Coordinate::new(40.7128, -74.0060);
//! let plan: QueryPlan = engine.plan(center, 5_000.0)?;
//! assert!(plan.iter().any(|range| range.contains(&key)));
//!
//! // Drop false positives, nearest first.
//! let results = engine.filter(&center, 5_000.0, vec![("cafe", cafe)])?;
//! assert_eq!(results.len(), 1);
//! # Ok::<(), georange::GeoRangeError>(())
//! ```

pub mod compute;
pub mod config;
pub mod engine;
pub mod error;
pub mod plan;
pub mod search;

pub use config::Config;
pub use engine::GeoQueryEngine;
pub use error::{GeoRangeError, Result};
pub use plan::QueryPlan;

pub use compute::{
    DistanceUnit, bounding_box_bits, bounding_box_coordinates, dedup_ranges, encode, geodesic_km,
    geohash_queries, haversine, haversine_km, km_to_miles, query_for_geohash,
    validate_coordinate, validate_geohash, validate_radius,
};

pub use search::{Located, Neighbor, SearchResults, SearchStats, filter_candidates};

pub use georange_types::coordinate::{BoundingBoxCoordinates, Coordinate};
pub use georange_types::range::QueryRange;

pub use geo::Point;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, GeoQueryEngine, GeoRangeError, QueryPlan, Result};

    pub use crate::{Coordinate, QueryRange};

    pub use crate::compute::{encode, geohash_queries, haversine_km};

    pub use crate::search::{Located, filter_candidates};
}
