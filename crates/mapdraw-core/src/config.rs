//! Engine configuration.
//!
//! ```toml
//! [limits]
//! circle = 10
//! rectangle = 10
//! polygon = 5
//! linestring = 20
//!
//! [validation]
//! area_tolerance = 1e-12
//! ```
//!
//! Every key is optional; omitted keys keep their defaults.

use std::path::Path;

use mapdraw_model::Limits;
use mapdraw_validate::{ValidationOptions, Validator};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub limits: Limits,
    pub validation: ValidationOptions,
}

impl EngineConfig {
    /// Read and check a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.check()?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Parse and check TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: "<inline>".into(),
            source,
        })?;
        config.check()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.limits, self.validation)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let tolerance = self.validation.area_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Invalid {
                message: format!("area_tolerance must be a finite non-negative number, got {tolerance}"),
            });
        }
        Ok(())
    }
}
