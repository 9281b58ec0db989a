//! Post-filtering of range-query candidates.
//!
//! Range queries over-approximate the search circle, and the bounding ranges
//! may overlap, so the records a store returns contain false positives and
//! repeats. [`filter_candidates`] keeps each record once, drops those outside
//! the radius by exact haversine distance and sorts the rest nearest first.

use crate::compute::distance::{DistanceUnit, haversine_km};
use crate::compute::validation::{validate_coordinate, validate_radius};
use crate::config::Config;
use crate::error::Result;
use georange_types::coordinate::Coordinate;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// A record returned by a range query: a stable identity and the location it
/// was indexed at.
pub trait Located {
    /// Identity used to collapse repeats returned by overlapping ranges.
    fn key(&self) -> &str;
    fn location(&self) -> Coordinate;
}

impl<K: AsRef<str>> Located for (K, Coordinate) {
    fn key(&self) -> &str {
        self.0.as_ref()
    }

    fn location(&self) -> Coordinate {
        self.1
    }
}

/// A candidate confirmed to lie within the search radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor<T> {
    pub item: T,
    /// Exact haversine distance from the search center.
    pub distance_km: f64,
}

impl<T> Neighbor<T> {
    pub fn distance_in(&self, unit: DistanceUnit) -> f64 {
        unit.from_km(self.distance_km)
    }

    /// Distance in `unit` rounded to `decimals` places, for presentation.
    pub fn rounded(&self, unit: DistanceUnit, decimals: u32) -> f64 {
        round_to(self.distance_in(unit), decimals)
    }
}

/// Counters for one filtering pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// Records received from the store, repeats included.
    pub candidates: usize,
    /// Records inside the radius.
    pub matches: usize,
    /// Records skipped because their key was already seen.
    pub duplicates: usize,
    /// Records skipped because their stored location is invalid.
    pub rejected: usize,
    pub max_distance_km: f64,
    pub total_distance_km: f64,
}

impl SearchStats {
    /// Unique, valid candidates that turned out to lie outside the radius.
    pub fn false_positives(&self) -> usize {
        self.candidates - self.duplicates - self.rejected - self.matches
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<T> {
    /// Matches sorted by ascending distance.
    pub neighbors: Vec<Neighbor<T>>,
    pub stats: SearchStats,
}

impl<T> SearchResults<T> {
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.neighbors.into_iter().map(|n| n.item).collect()
    }
}

/// Keeps the candidates within `radius_m` meters of `center`, once per key,
/// sorted by ascending distance.
///
/// A candidate whose stored location fails validation is skipped with a
/// warning rather than failing the whole search. Equal distances keep their
/// input order.
///
/// # Examples
///
/// ```rust
/// use georange::{Coordinate, filter_candidates};
///
/// let center = Coordinate::new(40.7128, -74.0060);
/// let candidates = vec![
///     ("empire-state", Coordinate::new(40.7484, -73.9857)),
///     ("brooklyn-bridge", Coordinate::new(40.7061, -73.9969)),
///     ("boston", Coordinate::new(42.3601, -71.0589)),
///     ("brooklyn-bridge", Coordinate::new(40.7061, -73.9969)),
/// ];
///
/// let results = filter_candidates(&center, 5_000.0, candidates)?;
/// let keys: Vec<_> = results.neighbors.iter().map(|n| n.item.0).collect();
/// assert_eq!(keys, ["brooklyn-bridge", "empire-state"]);
/// assert_eq!(results.stats.duplicates, 1);
/// # Ok::<(), georange::GeoRangeError>(())
/// ```
pub fn filter_candidates<T, I>(
    center: &Coordinate,
    radius_m: f64,
    candidates: I,
) -> Result<SearchResults<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    validate_coordinate(center)?;
    validate_radius(radius_m)?;

    let radius_km = radius_m / 1000.0;
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut stats = SearchStats::default();
    let mut neighbors = Vec::new();

    for candidate in candidates {
        stats.candidates += 1;

        if seen.contains(candidate.key()) {
            stats.duplicates += 1;
            continue;
        }

        let distance_km = match haversine_km(center, &candidate.location()) {
            Ok(distance) => distance,
            Err(e) => {
                log::warn!("Skipping candidate {:?}: {}", candidate.key(), e);
                stats.rejected += 1;
                continue;
            }
        };
        seen.insert(candidate.key().to_owned());

        stats.total_distance_km += distance_km;
        stats.max_distance_km = stats.max_distance_km.max(distance_km);

        if distance_km <= radius_km {
            stats.matches += 1;
            neighbors.push(Neighbor {
                item: candidate,
                distance_km,
            });
        }
    }

    neighbors.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    log::debug!(
        "Filtered {} candidates around {}: {} matches, {} duplicates, {} rejected, max distance {:.2}km",
        stats.candidates,
        center,
        stats.matches,
        stats.duplicates,
        stats.rejected,
        stats.max_distance_km
    );

    Ok(SearchResults { neighbors, stats })
}

/// Rounds half away from zero to `decimals` places, at most
/// [`Config::MAX_DISTANCE_DECIMALS`].
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let decimals = decimals.min(Config::MAX_DISTANCE_DECIMALS) as i32;
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
