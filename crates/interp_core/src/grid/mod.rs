//! String grid model.
//!
//! A [`Grid`] is a rectangular, row-major matrix of cell strings loaded once
//! and never mutated. Cells hold either a numeric literal or the sentinel
//! token marking a missing value.
//!
//! ## Example
//!
//! ```
//! use interp_core::grid::{Coord, Grid};
//!
//! let grid = Grid::load(vec![vec!["1", "nan"], vec!["3", "4"]]).unwrap();
//! assert_eq!(grid.shape(), (2, 2));
//! assert_eq!(grid.find_sentinel_coordinates("nan"), vec![Coord::new(0, 1)]);
//! ```

pub mod diagonal;

use crate::types::GridError;
use std::fmt;

pub use diagonal::{DiagonalMode, DiagonalSet};

/// Sentinel token used when none is configured.
pub const DEFAULT_SENTINEL: &str = "nan";

/// A `(row, col)` cell address.
///
/// Ordering is row-major, matching the sentinel scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular matrix of cell strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    /// Cell text, `cells[row][col]`
    cells: Vec<Vec<String>>,
    /// Column count shared by every row
    cols: usize,
}

impl Grid {
    /// Construct a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// * `GridError::Ragged` - A row length differs from the first row's length
    ///
    /// An empty row list yields a valid 0×0 grid.
    pub fn load<R, S>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let cols = cells.first().map_or(0, Vec::len);
        for (i, row) in cells.iter().enumerate().skip(1) {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        Ok(Self { cells, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols)
    }

    /// Returns `true` for a grid without rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell text at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    /// Cell text at a coordinate.
    #[inline]
    pub fn cell(&self, coord: Coord) -> Option<&str> {
        self.get(coord.row, coord.col)
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Consume the grid and return its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.cells
    }

    /// Overwrite one cell. Out-of-bounds coordinates are ignored.
    pub(crate) fn set(&mut self, coord: Coord, value: String) {
        if let Some(cell) = self
            .cells
            .get_mut(coord.row)
            .and_then(|r| r.get_mut(coord.col))
        {
            *cell = value;
        }
    }

    /// Whether the cell at `coord` equals `sentinel` exactly.
    #[inline]
    pub fn is_sentinel(&self, coord: Coord, sentinel: &str) -> bool {
        self.cell(coord) == Some(sentinel)
    }

    /// Every coordinate holding the sentinel, in row-major order.
    ///
    /// Matching is an exact, case-sensitive string comparison.
    pub fn find_sentinel_coordinates(&self, sentinel: &str) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(move |(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(_, cell)| cell.as_str() == sentinel)
                    .map(move |(j, _)| Coord::new(i, j))
            })
            .collect()
    }

    /// Diagonal coordinates for this grid's shape.
    pub fn find_diagonal_coordinates(&self, mode: DiagonalMode) -> DiagonalSet {
        DiagonalSet::for_shape(self.rows(), self.cols, mode)
    }

    /// In-bounds orthogonal neighbours of `(row, col)`.
    ///
    /// Order is fixed: up, down, right, left.
    pub fn valid_neighbors(&self, row: usize, col: usize) -> Vec<Coord> {
        let (rows, cols) = self.shape();
        let mut neighbors = Vec::with_capacity(4);

        if row >= 1 {
            neighbors.push(Coord::new(row - 1, col));
        }
        if row + 1 < rows {
            neighbors.push(Coord::new(row + 1, col));
        }
        if col + 1 < cols {
            neighbors.push(Coord::new(row, col + 1));
        }
        if col >= 1 {
            neighbors.push(Coord::new(row, col - 1));
        }

        neighbors
    }
}
