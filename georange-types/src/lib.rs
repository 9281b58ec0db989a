//! # georange-types
//!
//! Plain value types shared by the georange proximity query engine.
//!
//! - **Coordinates**: [`Coordinate`](coordinate::Coordinate), a latitude/longitude
//!   pair in degrees, plus the nine-point
//!   [`BoundingBoxCoordinates`](coordinate::BoundingBoxCoordinates) array.
//! - **Ranges**: [`QueryRange`](range::QueryRange), a half-open `[start, end)`
//!   interval over geohash strings.
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's primitives.
//!
//! ## Examples
//!
//! ```rust
//! use georange_types::coordinate::Coordinate;
//! use georange_types::range::QueryRange;
//!
//! let nyc = Coordinate::new(40.7128, -74.0060);
//! let range = QueryRange::new("dr5r", "dr5s");
//! assert!(range.contains("dr5ru6j"));
//! assert_eq!(nyc.lat, 40.7128);
//! ```

pub mod coordinate;
pub mod range;
