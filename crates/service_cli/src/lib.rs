//! gridfill service layer.
//!
//! Wires the CSV adapter, configuration and interpolation kernel together
//! behind the `gridfill` binary. Kept as a library so the command logic can
//! be driven from tests with in-memory prompt input.

pub mod commands;
pub mod error;
pub mod guard;
pub mod logging;

pub use error::{CliError, ConflictReason, Result};
