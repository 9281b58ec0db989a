//! Configured entry point tying key encoding, planning and filtering together.

use crate::compute::geohash::{BITS_PER_CHAR, encode};
use crate::compute::precision::bounding_box_bits;
use crate::config::Config;
use crate::error::{GeoRangeError, Result};
use crate::plan::QueryPlan;
use crate::search::{Located, SearchResults, filter_candidates};
use georange_types::coordinate::Coordinate;

/// A proximity engine with a validated [`Config`].
///
/// The engine holds no mutable state; share it freely between threads.
///
/// # Examples
///
/// ```rust
/// use georange::{Config, Coordinate, GeoQueryEngine};
///
/// let engine = GeoQueryEngine::new(Config::default())?;
///
/// // Index side: store this key alongside the record.
/// let key = engine.index_key(&Coordinate::new(40.7484, -73.9857))?;
/// assert_eq!(key.len(), 10);
///
/// // Query side: run every range against the store.
/// let plan = engine.plan(Coordinate::new(40.7128, -74.0060), 5_000.0)?;
/// assert!(plan.covers(&key));
/// # Ok::<(), georange::GeoRangeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeoQueryEngine {
    config: Config,
}

impl GeoQueryEngine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate().map_err(GeoRangeError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Geohash key for a stored record, at the configured storage precision.
    pub fn index_key(&self, location: &Coordinate) -> Result<String> {
        encode(location, self.config.storage_precision)
    }

    /// Plans the range queries for a search circle. Ranges never share more
    /// leading bits than the stored keys carry, so a key written by
    /// [`GeoQueryEngine::index_key`] always sorts inside its range.
    pub fn plan(&self, center: Coordinate, radius_m: f64) -> Result<QueryPlan> {
        let max_bits = self.config.storage_precision as u32 * BITS_PER_CHAR;
        if bounding_box_bits(&center, radius_m)? > max_bits {
            log::debug!(
                "Query for {}m around {} capped at the {}-character storage precision",
                radius_m,
                center,
                self.config.storage_precision
            );
        }
        QueryPlan::with_max_bits(center, radius_m, max_bits)
    }

    /// Filters candidates returned by the plan's ranges. See
    /// [`filter_candidates`].
    pub fn filter<T, I>(
        &self,
        center: &Coordinate,
        radius_m: f64,
        candidates: I,
    ) -> Result<SearchResults<T>>
    where
        T: Located,
        I: IntoIterator<Item = T>,
    {
        filter_candidates(center, radius_m, candidates)
    }

    /// Presentation distance for a neighbor, in the configured unit and
    /// rounding.
    pub fn display_distance(&self, distance_km: f64) -> f64 {
        crate::search::round_to(
            self.config.distance_unit.from_km(distance_km),
            self.config.distance_decimals,
        )
    }
}
