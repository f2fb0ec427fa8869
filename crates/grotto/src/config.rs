//! Conversion settings.
//!
//! Every field is optional; an empty config reproduces the standard FRCS
//! conversion. Example config.toml:
//! ```toml
//! backsight_tolerance = 2.0
//! review_distance_unit = "feet"
//! fixed_stations_title = "Fixed Stations"
//! ```

use crate::error::ConfigError;
use grotto_units::{Angle, LengthUnit};
use serde::Deserialize;

/// Conversion configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Frontsight/backsight tolerance in degrees for `TYPEAB`/`TYPEVB`. Default: 2
    pub backsight_tolerance: Option<f64>,
    /// Review unit set on every book and trip survey. Default: feet
    pub review_distance_unit: Option<LengthUnit>,
    /// Title of each cave's fixed-station survey. Default: "Fixed Stations"
    pub fixed_stations_title: Option<String>,
}

impl ConvertConfig {
    /// Parse and validate a TOML config.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.backsight_tolerance {
            Some(tolerance) if !tolerance.is_finite() || tolerance < 0.0 => {
                Err(ConfigError::InvalidTolerance(tolerance))
            }
            _ => Ok(()),
        }
    }

    pub fn backsight_tolerance(&self) -> Angle {
        Angle::degrees(self.backsight_tolerance.unwrap_or(2.0))
    }

    pub fn review_distance_unit(&self) -> LengthUnit {
        self.review_distance_unit.unwrap_or(LengthUnit::Feet)
    }

    pub fn fixed_stations_title(&self) -> &str {
        self.fixed_stations_title
            .as_deref()
            .unwrap_or("Fixed Stations")
    }
}
