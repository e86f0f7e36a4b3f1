//! Error types for structured error handling.
//!
//! This module provides:
//! - `GridError`: Errors from grid construction
//! - `InterpolationError`: Errors from interpolating a single sentinel cell
//! - `ProcessingError`: Errors from a full interpolation run

use crate::grid::Coord;
use thiserror::Error;

/// Grid construction errors.
///
/// # Examples
/// ```
/// use interp_core::types::GridError;
///
/// let err = GridError::Ragged { row: 2, expected: 3, found: 2 };
/// assert_eq!(format!("{}", err), "Row 2 has 2 cells, expected 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row length differs from the first row's length.
    #[error("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Zero-based index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },
}

/// Errors raised while interpolating one sentinel cell.
///
/// # Variants
/// - `NoEligibleNeighbors`: Every neighbour was out of bounds, diagonal, or a sentinel
/// - `NonNumeric`: A neighbour holds text that is neither the sentinel nor a number
/// - `NonFiniteMean`: The averaged value is not a finite number
///
/// # Examples
/// ```
/// use interp_core::grid::Coord;
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::NoEligibleNeighbors { coord: Coord::new(0, 1) };
/// assert!(format!("{}", err).contains("(0, 1)"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// No neighbour survived bounds, diagonal and sentinel filtering.
    #[error("No eligible neighbours for sentinel cell {coord}")]
    NoEligibleNeighbors {
        /// The sentinel cell being interpolated
        coord: Coord,
    },

    /// A neighbour value could not be parsed as a number.
    #[error("Neighbour {neighbor} of cell {coord} is not numeric: {value:?}")]
    NonNumeric {
        /// The sentinel cell being interpolated
        coord: Coord,
        /// The neighbour holding the bad value
        neighbor: Coord,
        /// The raw cell text
        value: String,
    },

    /// The mean of the neighbour values is not finite.
    #[error("Mean of the neighbours of cell {coord} is not finite")]
    NonFiniteMean {
        /// The sentinel cell being interpolated
        coord: Coord,
    },
}

impl InterpolationError {
    /// The sentinel cell this error belongs to.
    pub fn coord(&self) -> Coord {
        match self {
            Self::NoEligibleNeighbors { coord } => *coord,
            Self::NonNumeric { coord, .. } => *coord,
            Self::NonFiniteMean { coord } => *coord,
        }
    }
}

/// A failed interpolation run.
///
/// Wraps the first failing cell (row-major order) together with its cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Interpolation failed at {coord}: {source}")]
pub struct ProcessingError {
    /// The sentinel cell that failed
    pub coord: Coord,
    /// Underlying cause
    #[source]
    pub source: InterpolationError,
}

impl From<InterpolationError> for ProcessingError {
    fn from(source: InterpolationError) -> Self {
        Self {
            coord: source.coord(),
            source,
        }
    }
}
