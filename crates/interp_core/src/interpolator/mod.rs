//! Neighbour-averaging interpolation of sentinel cells.
//!
//! Every sentinel cell is replaced by the arithmetic mean of its eligible
//! neighbours. A neighbour is eligible when it is
//! - an in-bounds orthogonal neighbour (up, down, right, left),
//! - not in the [`DiagonalSet`], and
//! - not itself a sentinel cell.
//!
//! Reads always come from the source [`Grid`]; writes go to a separate copy,
//! so the order in which sentinels are processed never changes the result.
//!
//! ## Example
//!
//! ```
//! use interp_core::grid::Grid;
//! use interp_core::interpolator::GridInterpolator;
//!
//! let grid = Grid::load(vec![vec!["1", "2"], vec!["3", "nan"]]).unwrap();
//! let output = GridInterpolator::default().run(&grid).unwrap();
//!
//! assert_eq!(output.grid.get(1, 1), Some("2.5"));
//! assert_eq!(output.summary.interpolated, 1);
//! ```

mod render;

pub use render::render_value;

use crate::grid::{Coord, DiagonalMode, DiagonalSet, Grid, DEFAULT_SENTINEL};
use crate::types::{InterpolationError, ProcessingError};
use rayon::prelude::*;

/// What to do with a sentinel cell that has no eligible neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EmptyNeighborPolicy {
    /// Abort the run with `InterpolationError::NoEligibleNeighbors`
    #[default]
    Fail,
    /// Leave the sentinel text in place
    KeepSentinel,
    /// Write the given value instead
    Fallback(f64),
}

/// Interpolation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationOptions {
    /// Token marking a missing cell (exact match)
    pub sentinel: String,
    /// Diagonal exclusion range
    pub diagonal: DiagonalMode,
    /// Policy for sentinels without eligible neighbours
    pub on_empty: EmptyNeighborPolicy,
    /// Fixed number of fractional digits for written values
    pub decimal_places: Option<usize>,
}

impl Default for InterpolationOptions {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            diagonal: DiagonalMode::default(),
            on_empty: EmptyNeighborPolicy::default(),
            decimal_places: None,
        }
    }
}

/// Outcome for one sentinel cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    /// Mean of the eligible neighbours
    Mean(f64),
    /// Configured fallback value (no eligible neighbours)
    Fallback(f64),
    /// Sentinel left in place (no eligible neighbours)
    Keep,
}

impl Fill {
    /// The numeric value written, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Mean(v) | Self::Fallback(v) => Some(*v),
            Self::Keep => None,
        }
    }
}

/// Counters describing one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Sentinel cells found
    pub sentinels: usize,
    /// Cells filled with a neighbour mean
    pub interpolated: usize,
    /// Cells filled with the fallback value
    pub fallbacks: usize,
    /// Cells left as the sentinel
    pub kept: usize,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// Copy of the input with sentinel cells replaced
    pub grid: Grid,
    /// Counters for logging
    pub summary: RunSummary,
}

/// Fills sentinel cells of a [`Grid`] by averaging eligible neighbours.
#[derive(Debug, Clone, Default)]
pub struct GridInterpolator {
    options: InterpolationOptions,
}

impl GridInterpolator {
    /// Create an interpolator with the given options.
    pub fn new(options: InterpolationOptions) -> Self {
        Self { options }
    }

    /// Active options.
    pub fn options(&self) -> &InterpolationOptions {
        &self.options
    }

    /// Sentinel coordinates of `grid`, row-major.
    pub fn find_sentinel_coordinates(&self, grid: &Grid) -> Vec<Coord> {
        grid.find_sentinel_coordinates(&self.options.sentinel)
    }

    /// Diagonal exclusion set for `grid`.
    pub fn find_diagonal_coordinates(&self, grid: &Grid) -> DiagonalSet {
        grid.find_diagonal_coordinates(self.options.diagonal)
    }

    /// Neighbours of `coord` that take part in the mean, in up, down, right,
    /// left order.
    pub fn eligible_neighbors(
        &self,
        grid: &Grid,
        diagonal: &DiagonalSet,
        coord: Coord,
    ) -> Vec<Coord> {
        grid.valid_neighbors(coord.row, coord.col)
            .into_iter()
            .filter(|n| !diagonal.contains(n))
            .filter(|n| !grid.is_sentinel(*n, &self.options.sentinel))
            .collect()
    }

    /// Interpolate a single sentinel cell.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::NonNumeric` - An eligible neighbour does not parse
    ///   to a finite number
    /// * `InterpolationError::NoEligibleNeighbors` - Nothing to average and the
    ///   policy is `Fail`
    /// * `InterpolationError::NonFiniteMean` - The mean is not a finite number
    pub fn interpolate(
        &self,
        grid: &Grid,
        diagonal: &DiagonalSet,
        coord: Coord,
    ) -> Result<Fill, InterpolationError> {
        let neighbors = self.eligible_neighbors(grid, diagonal, coord);

        if neighbors.is_empty() {
            return match self.options.on_empty {
                EmptyNeighborPolicy::Fail => {
                    Err(InterpolationError::NoEligibleNeighbors { coord })
                }
                EmptyNeighborPolicy::KeepSentinel => Ok(Fill::Keep),
                EmptyNeighborPolicy::Fallback(v) => Ok(Fill::Fallback(v)),
            };
        }

        let values = neighbors
            .iter()
            .map(|&neighbor| parse_cell(grid, coord, neighbor))
            .collect::<Result<Vec<f64>, _>>()?;

        let n = values.len() as f64;
        let mut mean = values.iter().sum::<f64>() / n;
        if !mean.is_finite() {
            // The sum overflowed; dividing first keeps a mean of finite values finite.
            mean = values.iter().map(|v| v / n).sum();
        }

        if !mean.is_finite() {
            return Err(InterpolationError::NonFiniteMean { coord });
        }

        Ok(Fill::Mean(mean))
    }

    /// Fill every sentinel cell, stopping at the first failure.
    ///
    /// Cells are processed in row-major order.
    ///
    /// # Errors
    ///
    /// * `ProcessingError` - Names the first failing cell and its cause
    pub fn run(&self, grid: &Grid) -> Result<RunOutput, ProcessingError> {
        let diagonal = self.find_diagonal_coordinates(grid);
        let fills = self
            .find_sentinel_coordinates(grid)
            .into_iter()
            .map(|coord| self.interpolate(grid, &diagonal, coord).map(|fill| (coord, fill)));

        self.apply(grid, fills)
    }

    /// Fill every sentinel cell on the rayon thread pool.
    ///
    /// Produces the same output as [`run`](Self::run). On failure the reported
    /// cell is the first failing one in row-major order.
    pub fn run_parallel(&self, grid: &Grid) -> Result<RunOutput, ProcessingError> {
        let diagonal = self.find_diagonal_coordinates(grid);
        let fills: Vec<Result<(Coord, Fill), InterpolationError>> = self
            .find_sentinel_coordinates(grid)
            .par_iter()
            .map(|&coord| self.interpolate(grid, &diagonal, coord).map(|fill| (coord, fill)))
            .collect();

        self.apply(grid, fills)
    }

    fn apply<I>(&self, grid: &Grid, fills: I) -> Result<RunOutput, ProcessingError>
    where
        I: IntoIterator<Item = Result<(Coord, Fill), InterpolationError>>,
    {
        let mut result = grid.clone();
        let mut summary = RunSummary::default();

        for item in fills {
            let (coord, fill) = item?;
            summary.sentinels += 1;
            match fill {
                Fill::Mean(v) => {
                    summary.interpolated += 1;
                    result.set(coord, render_value(v, self.options.decimal_places));
                }
                Fill::Fallback(v) => {
                    summary.fallbacks += 1;
                    result.set(coord, render_value(v, self.options.decimal_places));
                }
                Fill::Keep => summary.kept += 1,
            }
        }

        Ok(RunOutput {
            grid: result,
            summary,
        })
    }
}

fn parse_cell(grid: &Grid, coord: Coord, neighbor: Coord) -> Result<f64, InterpolationError> {
    let raw = grid.cell(neighbor).unwrap_or_default();
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InterpolationError::NonNumeric {
            coord,
            neighbor,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(rows: Vec<Vec<&str>>) -> Grid {
        Grid::load(rows).unwrap()
    }

    fn with_policy(on_empty: EmptyNeighborPolicy) -> GridInterpolator {
        GridInterpolator::new(InterpolationOptions {
            on_empty,
            ..Default::default()
        })
    }

    #[test]
    fn test_two_by_two_example() {
        let input = grid(vec![vec!["1", "2"], vec!["3", "nan"]]);
        let output = GridInterpolator::default().run(&input).unwrap();

        assert_eq!(output.grid, grid(vec![vec!["1", "2"], vec!["3", "2.5"]]));
        assert_eq!(
            output.summary,
            RunSummary {
                sentinels: 1,
                interpolated: 1,
                fallbacks: 0,
                kept: 0,
            }
        );
    }

    #[test]
    fn test_four_neighbor_mean() {
        // Neither (1, 3) nor any of its neighbours is of the form (i, i).
        let input = grid(vec![
            vec!["0", "0", "0", "1.5", "0"],
            vec!["0", "0", "2", "nan", "4"],
            vec!["0", "0", "0", "8", "0"],
            vec!["0", "0", "0", "0", "0"],
            vec!["0", "0", "0", "0", "0"],
        ]);
        let interp = GridInterpolator::default();
        let diagonal = interp.find_diagonal_coordinates(&input);

        assert_eq!(
            interp.eligible_neighbors(&input, &diagonal, Coord::new(1, 3)).len(),
            4
        );
        let fill = interp
            .interpolate(&input, &diagonal, Coord::new(1, 3))
            .unwrap();
        assert_relative_eq!(fill.value().unwrap(), (1.5 + 8.0 + 4.0 + 2.0) / 4.0);
    }

    #[test]
    fn test_corner_uses_down_and_right() {
        let input = grid(vec![vec!["nan", "4"], vec!["6", "9"], vec!["1", "1"]]);
        // Legacy diagonal for 3 rows is {(0,0),(1,1)}; neither (1,0) nor (0,1) is excluded.
        let output = GridInterpolator::default().run(&input).unwrap();
        assert_eq!(output.grid.get(0, 0), Some("5.0"));
    }

    #[test]
    fn test_diagonal_neighbor_excluded() {
        let input = grid(vec![
            vec!["1", "2", "3"],
            vec!["4", "100", "nan"],
            vec!["7", "8", "9"],
        ]);
        let interp = GridInterpolator::default();
        let diagonal = interp.find_diagonal_coordinates(&input);

        assert_eq!(
            interp.eligible_neighbors(&input, &diagonal, Coord::new(1, 2)),
            vec![Coord::new(0, 2), Coord::new(2, 2)]
        );
        let output = interp.run(&input).unwrap();
        assert_eq!(output.grid.get(1, 2), Some("6.0"));
    }

    #[test]
    fn test_bottom_right_uses_both_neighbors_under_legacy() {
        let input = grid(vec![
            vec!["1", "2", "3"],
            vec!["4", "5", "6"],
            vec!["7", "8", "nan"],
        ]);
        let output = GridInterpolator::default().run(&input).unwrap();
        assert_eq!(output.grid.get(2, 2), Some("7.0"));
    }

    #[test]
    fn test_main_diagonal_mode_excludes_last_entry() {
        let input = grid(vec![
            vec!["1", "2", "3"],
            vec!["4", "5", "nan"],
            vec!["7", "8", "9"],
        ]);
        let legacy = GridInterpolator::default().run(&input).unwrap();
        assert_eq!(legacy.grid.get(1, 2), Some("6.0"));

        let main = GridInterpolator::new(InterpolationOptions {
            diagonal: DiagonalMode::Main,
            ..Default::default()
        })
        .run(&input)
        .unwrap();
        assert_eq!(main.grid.get(1, 2), Some("3.0"));
    }

    #[test]
    fn test_only_diagonal_neighbors_fails_by_default() {
        // Legacy set for 3 rows is {(0,0), (1,1)}: both neighbours of (0, 1).
        let input = grid(vec![vec!["1", "nan"], vec!["3", "4"], vec!["5", "6"]]);
        let interp = GridInterpolator::default();
        let diagonal = interp.find_diagonal_coordinates(&input);

        assert!(interp
            .eligible_neighbors(&input, &diagonal, Coord::new(0, 1))
            .is_empty());
        assert_eq!(
            interp.interpolate(&input, &diagonal, Coord::new(0, 1)),
            Err(InterpolationError::NoEligibleNeighbors {
                coord: Coord::new(0, 1)
            })
        );

        let err = interp.run(&input).unwrap_err();
        assert_eq!(err.coord, Coord::new(0, 1));
    }

    #[test]
    fn test_empty_policy_keep_and_fallback() {
        let input = grid(vec![vec!["nan"]]);

        let kept = with_policy(EmptyNeighborPolicy::KeepSentinel)
            .run(&input)
            .unwrap();
        assert_eq!(kept.grid, input);
        assert_eq!(kept.summary.kept, 1);

        let filled = with_policy(EmptyNeighborPolicy::Fallback(0.0))
            .run(&input)
            .unwrap();
        assert_eq!(filled.grid.get(0, 0), Some("0.0"));
        assert_eq!(filled.summary.fallbacks, 1);
    }

    #[test]
    fn test_sentinel_neighbors_are_skipped() {
        let input = grid(vec![
            vec!["0", "10", "0"],
            vec!["0", "0", "nan"],
            vec!["0", "nan", "20"],
        ]);
        // (1,2): up (0,2)=0, down (2,2)=20, left (1,1) diagonal -> mean 10
        // (2,1): up (1,1) diagonal, right (2,2)=20, left (2,0)=0 -> mean 10
        let output = GridInterpolator::default().run(&input).unwrap();
        assert_eq!(output.grid.get(1, 2), Some("10.0"));
        assert_eq!(output.grid.get(2, 1), Some("10.0"));
    }

    #[test]
    fn test_non_numeric_neighbor_fails() {
        let input = grid(vec![vec!["abc", "nan", "3"]]);
        let err = GridInterpolator::default().run(&input).unwrap_err();

        assert_eq!(err.coord, Coord::new(0, 1));
        assert_eq!(
            err.source,
            InterpolationError::NonNumeric {
                coord: Coord::new(0, 1),
                neighbor: Coord::new(0, 0),
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn test_non_finite_neighbor_rejected() {
        let input = grid(vec![vec!["1", "NA", "inf"]]);
        let interp = GridInterpolator::new(InterpolationOptions {
            sentinel: "NA".to_string(),
            ..Default::default()
        });
        let err = interp.run(&input).unwrap_err();
        assert!(matches!(
            err.source,
            InterpolationError::NonNumeric { neighbor, .. } if neighbor == Coord::new(0, 2)
        ));
    }

    #[test]
    fn test_huge_neighbors_keep_mean_finite() {
        // A single row has an empty legacy diagonal set.
        let input = grid(vec![vec!["1e308", "nan", "1e308", "nan", "-1.5e308"]]);
        let interp = GridInterpolator::default();
        let diagonal = interp.find_diagonal_coordinates(&input);

        assert_eq!(
            interp.interpolate(&input, &diagonal, Coord::new(0, 1)),
            Ok(Fill::Mean(1e308))
        );

        let output = interp.run(&input).unwrap();
        let first: f64 = output.grid.get(0, 1).unwrap().parse().unwrap();
        let second: f64 = output.grid.get(0, 3).unwrap().parse().unwrap();
        assert_eq!(first, 1e308);
        assert_relative_eq!(second, -0.25e308);
    }

    #[test]
    fn test_whitespace_around_numbers_is_accepted() {
        let input = grid(vec![vec![" 1 ", "nan", "3"]]);
        let output = GridInterpolator::default().run(&input).unwrap();
        assert_eq!(output.grid.get(0, 1), Some("2.0"));
        assert_eq!(output.grid.get(0, 0), Some(" 1 "));
    }

    #[test]
    fn test_decimal_places_applied() {
        let input = grid(vec![vec!["1", "nan", "2"]]);
        let interp = GridInterpolator::new(InterpolationOptions {
            decimal_places: Some(2),
            ..Default::default()
        });
        let output = interp.run(&input).unwrap();
        assert_eq!(output.grid.get(0, 1), Some("1.50"));
    }

    #[test]
    fn test_no_sentinels_is_identity() {
        let input = grid(vec![vec!["1", "2"], vec!["3", "4"]]);
        let output = GridInterpolator::default().run(&input).unwrap();
        assert_eq!(output.grid, input);
        assert_eq!(output.summary, RunSummary::default());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let input = grid(vec![
            vec!["1", "nan", "3", "4"],
            vec!["nan", "6", "7", "nan"],
            vec!["9", "10", "nan", "12"],
            vec!["13", "nan", "15", "16"],
        ]);
        let interp = GridInterpolator::default();
        assert_eq!(interp.run(&input), interp.run_parallel(&input));
    }

    #[test]
    fn test_parallel_reports_first_failure() {
        let input = grid(vec![vec!["x", "nan", "0", "nan", "y"]]);
        let interp = GridInterpolator::default();
        let serial = interp.run(&input).unwrap_err();
        let parallel = interp.run_parallel(&input).unwrap_err();
        assert_eq!(serial, parallel);
        assert_eq!(parallel.coord, Coord::new(0, 1));
    }
}
