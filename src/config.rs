//! Engine configuration.
//!
//! Configuration is plain serde data so it can be loaded from JSON or, with
//! the `toml` feature, from TOML. Planning itself has no tunables: the
//! precision of range queries always follows from the radius.

use crate::compute::distance::DistanceUnit;
use crate::compute::geohash::MAX_PRECISION;
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Settings for index keys and result presentation.
///
/// # Example
///
/// ```rust
/// use georange::{Config, DistanceUnit};
///
/// let config = Config::default();
/// assert_eq!(config.storage_precision, 10);
///
/// let json = r#"{ "storage_precision": 9, "distance_unit": "miles" }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.distance_unit, DistanceUnit::Miles);
/// assert_eq!(config.distance_decimals, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Geohash length, in characters, of the keys written for stored records.
    /// Must cover the finest precision any query will plan for the radii in use.
    #[serde(default = "Config::default_storage_precision")]
    pub storage_precision: usize,

    /// Unit used when presenting neighbor distances.
    #[serde(default)]
    pub distance_unit: DistanceUnit,

    /// Decimal places kept when presenting distances.
    #[serde(default = "Config::default_distance_decimals")]
    pub distance_decimals: u32,
}

impl Config {
    const fn default_storage_precision() -> usize {
        10
    }

    const fn default_distance_decimals() -> u32 {
        2
    }

    /// Most decimal places distances are presented with.
    pub const MAX_DISTANCE_DECIMALS: u32 = 10;

    pub fn with_storage_precision(mut self, precision: usize) -> Self {
        assert!(
            (1..=MAX_PRECISION).contains(&precision),
            "Storage precision must be between 1 and {MAX_PRECISION}"
        );
        self.storage_precision = precision;
        self
    }

    pub fn with_distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }

    pub fn with_distance_decimals(mut self, decimals: u32) -> Self {
        self.distance_decimals = decimals;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_PRECISION).contains(&self.storage_precision) {
            return Err(format!(
                "Storage precision must be between 1 and {}, got {}",
                MAX_PRECISION, self.storage_precision
            ));
        }

        if self.distance_decimals > Self::MAX_DISTANCE_DECIMALS {
            return Err(format!(
                "Distance decimals must be at most {}, got {}",
                Self::MAX_DISTANCE_DECIMALS,
                self.distance_decimals
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_precision: Self::default_storage_precision(),
            distance_unit: DistanceUnit::default(),
            distance_decimals: Self::default_distance_decimals(),
        }
    }
}
