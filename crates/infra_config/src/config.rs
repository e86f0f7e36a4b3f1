//! Run configuration management.
//!
//! Handles loading and management of gridfill configuration from TOML files
//! with environment variable override support.

use crate::error::ConfigError;
use crate::policy::{EmptyMode, OverwritePolicy};
use interp_core::grid::{DiagonalMode, DEFAULT_SENTINEL};
use interp_core::interpolator::{EmptyNeighborPolicy, InterpolationOptions};
use serde::Deserialize;
use std::path::Path;

/// Configuration file looked up when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "gridfill.toml";

/// Largest `decimal_places` accepted (beyond this f64 has no more digits).
const MAX_DECIMAL_PLACES: usize = 17;

/// gridfill configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridfillConfig {
    /// Token marking a missing cell
    pub sentinel: String,

    /// Diagonal exclusion range
    pub diagonal: DiagonalMode,

    /// Handling of sentinels with no eligible neighbours
    pub on_empty: EmptyMode,

    /// Value written when `on_empty = "fallback"`
    pub fallback_value: Option<f64>,

    /// Behaviour when the output file is non-empty
    pub overwrite: OverwritePolicy,

    /// Interpolate on the rayon thread pool
    pub parallel: bool,

    /// Fixed number of fractional digits for written values
    pub decimal_places: Option<usize>,

    /// Log level
    pub log_level: String,

    /// Environment overrides that could not be parsed
    #[serde(skip)]
    pub invalid_env: Vec<String>,
}

impl Default for GridfillConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            diagonal: DiagonalMode::default(),
            on_empty: EmptyMode::default(),
            fallback_value: None,
            overwrite: OverwritePolicy::default(),
            parallel: false,
            decimal_places: None,
            log_level: "info".to_string(),
            invalid_env: Vec::new(),
        }
    }
}

impl GridfillConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// A value that does not parse leaves the field unchanged and is reported
    /// by [`validate`](Self::validate).
    pub fn with_env_override(mut self) -> Self {
        if let Ok(sentinel) = std::env::var("GRIDFILL_SENTINEL") {
            self.sentinel = sentinel;
        }

        if let Ok(diagonal) = std::env::var("GRIDFILL_DIAGONAL") {
            match DiagonalMode::parse(&diagonal) {
                Some(mode) => self.diagonal = mode,
                None => self.reject_env("GRIDFILL_DIAGONAL", &diagonal),
            }
        }

        if let Ok(on_empty) = std::env::var("GRIDFILL_ON_EMPTY") {
            match EmptyMode::parse(&on_empty) {
                Some(mode) => self.on_empty = mode,
                None => self.reject_env("GRIDFILL_ON_EMPTY", &on_empty),
            }
        }

        if let Ok(fallback) = std::env::var("GRIDFILL_FALLBACK_VALUE") {
            match fallback.trim().parse() {
                Ok(value) => self.fallback_value = Some(value),
                Err(_) => self.reject_env("GRIDFILL_FALLBACK_VALUE", &fallback),
            }
        }

        if let Ok(overwrite) = std::env::var("GRIDFILL_OVERWRITE") {
            match OverwritePolicy::parse(&overwrite) {
                Some(policy) => self.overwrite = policy,
                None => self.reject_env("GRIDFILL_OVERWRITE", &overwrite),
            }
        }

        if let Ok(parallel) = std::env::var("GRIDFILL_PARALLEL") {
            self.parallel = matches!(parallel.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Ok(places) = std::env::var("GRIDFILL_DECIMAL_PLACES") {
            match places.trim().parse() {
                Ok(value) => self.decimal_places = Some(value),
                Err(_) => self.reject_env("GRIDFILL_DECIMAL_PLACES", &places),
            }
        }

        if let Ok(log_level) = std::env::var("GRIDFILL_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    fn reject_env(&mut self, name: &str, value: &str) {
        self.invalid_env
            .push(format!("{} has an invalid value '{}'", name, value));
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.invalid_env.clone();

        if self.sentinel.is_empty() {
            errors.push("sentinel cannot be empty".to_string());
        }
        if self.sentinel.contains(',') {
            errors.push(format!(
                "sentinel '{}' cannot contain the delimiter ','",
                self.sentinel
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.on_empty == EmptyMode::Fallback {
            match self.fallback_value {
                None => errors.push("on_empty = \"fallback\" requires fallback_value".to_string()),
                Some(v) if !v.is_finite() => {
                    errors.push(format!("fallback_value {} must be finite", v))
                }
                Some(_) => {}
            }
        }

        if let Some(places) = self.decimal_places {
            if places > MAX_DECIMAL_PLACES {
                errors.push(format!(
                    "decimal_places {} exceeds maximum allowed ({})",
                    places, MAX_DECIMAL_PLACES
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (defaults if missing) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Kernel options for this configuration.
    pub fn to_options(&self) -> Result<InterpolationOptions, ConfigError> {
        let on_empty = match self.on_empty {
            EmptyMode::Fail => EmptyNeighborPolicy::Fail,
            EmptyMode::Keep => EmptyNeighborPolicy::KeepSentinel,
            EmptyMode::Fallback => match self.fallback_value {
                Some(v) => EmptyNeighborPolicy::Fallback(v),
                None => {
                    return Err(ConfigError::Validation(vec![
                        "on_empty = \"fallback\" requires fallback_value".to_string(),
                    ]))
                }
            },
        };

        Ok(InterpolationOptions {
            sentinel: self.sentinel.clone(),
            diagonal: self.diagonal,
            on_empty,
            decimal_places: self.decimal_places,
        })
    }
}
