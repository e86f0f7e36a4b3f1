//! Diagonal-coordinate exclusion set.

use super::Coord;
use serde::Deserialize;
use std::collections::HashSet;

/// Range rule for the diagonal-coordinate set.
///
/// # Variants
///
/// - `Legacy`: `(i, i)` for `i` in `[0, rows - 1)`, independent of the column count
/// - `Main`: `(i, i)` for `i` in `[0, min(rows, cols))`
///
/// `Legacy` is the default so existing outputs stay reproducible. Note that it
/// leaves the last main-diagonal cell of a square grid eligible, and can name
/// coordinates past the last column of a wide-and-short grid (those never
/// match a neighbour, so they are harmless).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagonalMode {
    /// `rows - 1` entries
    #[default]
    Legacy,
    /// `min(rows, cols)` entries
    Main,
}

impl DiagonalMode {
    /// Parse a mode name (`legacy` or `main`, case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "legacy" => Some(Self::Legacy),
            "main" => Some(Self::Main),
            _ => None,
        }
    }

    /// Number of diagonal entries for a grid of the given shape.
    #[inline]
    pub fn len_for(self, rows: usize, cols: usize) -> usize {
        match self {
            Self::Legacy => rows.saturating_sub(1),
            Self::Main => rows.min(cols),
        }
    }
}

/// Set of `(i, i)` coordinates excluded from neighbour averaging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagonalSet {
    coords: HashSet<Coord>,
}

impl DiagonalSet {
    /// Build the set for a `rows × cols` grid.
    pub fn for_shape(rows: usize, cols: usize, mode: DiagonalMode) -> Self {
        let coords = (0..mode.len_for(rows, cols))
            .map(|i| Coord::new(i, i))
            .collect();
        Self { coords }
    }

    /// Whether `coord` is on the diagonal.
    #[inline]
    pub fn contains(&self, coord: &Coord) -> bool {
        self.coords.contains(coord)
    }

    /// Number of coordinates in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates sorted by index.
    pub fn to_sorted_vec(&self) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self.coords.iter().copied().collect();
        coords.sort_unstable();
        coords
    }
}
