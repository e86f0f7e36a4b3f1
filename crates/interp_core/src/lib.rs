//! # interp_core: Grid Interpolation Kernel for gridfill
//!
//! ## Kernel Layer Role
//!
//! interp_core is the bottom layer of the gridfill workspace, providing:
//! - The string grid model: `Grid`, `Coord` (`grid`)
//! - Diagonal-coordinate exclusion: `DiagonalMode`, `DiagonalSet` (`grid::diagonal`)
//! - Neighbour-averaging interpolation: `GridInterpolator` (`interpolator`)
//! - Error types: `GridError`, `InterpolationError`, `ProcessingError` (`types::error`)
//! - Small numeric helpers: `min_abs_difference` (`math`)
//!
//! ## Zero I/O Principle
//!
//! The kernel never touches the filesystem or the terminal. Loading and writing
//! CSV files lives in `adapter_loader`; configuration lives in `infra_config`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::grid::Grid;
//! use interp_core::interpolator::GridInterpolator;
//!
//! let grid = Grid::load(vec![
//!     vec!["1".to_string(), "2".to_string()],
//!     vec!["3".to_string(), "nan".to_string()],
//! ])
//! .unwrap();
//!
//! let output = GridInterpolator::default().run(&grid).unwrap();
//! assert_eq!(output.grid.get(1, 1), Some("2.5"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod grid;
pub mod interpolator;
pub mod math;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::grid::{Coord, DiagonalMode, DiagonalSet, Grid, DEFAULT_SENTINEL};
    pub use crate::interpolator::{
        EmptyNeighborPolicy, GridInterpolator, InterpolationOptions, RunOutput, RunSummary,
    };
    pub use crate::types::{GridError, InterpolationError, ProcessingError};
}
