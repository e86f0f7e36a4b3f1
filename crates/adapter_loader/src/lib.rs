//! # adapter_loader: CSV Adapter for gridfill
//!
//! Moves grids between comma-separated files and [`interp_core::grid::Grid`].
//!
//! - [`read_grid`] / [`read_grid_from_reader`]: CSV → `Grid` (no header row)
//! - [`render_grid`] / [`write_grid`]: `Grid` → CSV text / file
//! - [`is_non_empty_file`]: existence and size check for the overwrite guard
//!
//! ## Architecture
//!
//! As part of the **A**dapter layer, this crate owns all file I/O so that
//! `interp_core` stays a pure in-memory transform.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{LoaderError, Result};
pub use reader::{read_grid, read_grid_from_reader};
pub use writer::{is_non_empty_file, render_grid, write_grid};
