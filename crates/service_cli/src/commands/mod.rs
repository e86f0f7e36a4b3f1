//! CLI command implementations

pub mod interpolate;
