//! # infra_config: Configuration for gridfill
//!
//! Handles loading of run configuration from TOML files with environment
//! variable override support, and converts it into kernel options.
//!
//! ```
//! use infra_config::{GridfillConfig, OverwritePolicy};
//!
//! let config: GridfillConfig = toml::from_str(r#"
//!     on_empty = "fallback"
//!     fallback_value = 0.0
//!     overwrite = "force"
//! "#).unwrap();
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.overwrite, OverwritePolicy::Force);
//! ```

pub mod config;
pub mod error;
pub mod policy;

pub use config::{GridfillConfig, DEFAULT_CONFIG_PATH};
pub use error::ConfigError;
pub use policy::{EmptyMode, OverwritePolicy};
