//! Core types shared across the kernel.
//!
//! This module provides:
//! - Error types: `GridError`, `InterpolationError`, `ProcessingError` (`error`)

pub mod error;

pub use error::{GridError, InterpolationError, ProcessingError};
