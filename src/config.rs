//! TOML configuration: integrator settings and the default launch.
//!
//! ```toml
//! [simulation]
//! dt = 0.05
//! max_time = 1000.0
//! drag_coefficient = 0.08
//!
//! [launch]
//! velocity = 25.0
//! angle = 45.0
//! gravity = 9.81
//! mass = 1.5
//! initial_height = 0.0
//! air_resistance = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::dynamics::state::SimConfig;
use crate::error::ParameterError;
use crate::scenario::ParameterSet;

/// Errors that can occur while loading or saving configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to encode TOML: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ParameterError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimConfig,
    pub launch: ParameterSet,
}

impl AppConfig {
    /// Parse and validate configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file; any failure is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from a file, falling back to defaults if it is
    /// missing or unusable.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to load config file {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Save configuration to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        self.simulation.validate()?;
        self.launch.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.simulation.dt, 0.05);
        assert_eq!(config.launch.velocity, 25.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            "[simulation]\nmax_time = 60.0\n\n[launch]\nvelocity = 12.0\nangle = 10.0\ngravity = 1.62\n",
        )
        .unwrap();
        assert_eq!(config.simulation.max_time, 60.0);
        assert_eq!(config.simulation.dt, 0.05);
        assert_eq!(config.launch.gravity, 1.62);
        assert_eq!(config.launch.mass, 1.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppConfig::from_toml_str("[simulation]\ndt = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref e) if e.field == "dt"));
        let err = AppConfig::from_toml_str("[launch]\nvelocity = 5.0\nangle = 0.0\ngravity = -1.0\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(matches!(AppConfig::from_toml_str("[simulation"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projectile.toml");
        let mut config = AppConfig::default();
        config.launch = config.launch.with_initial_height(12.5).with_air_resistance(true);
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(AppConfig::load(dir.path().join("absent.toml")).is_err());
    }
}
