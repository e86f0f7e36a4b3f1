//! Small numeric helpers.
//!
//! - [`min_abs_difference`]: smallest gap between any two integers of a slice
//! - [`min_abs_difference_f64`]: the same over floats

mod min_difference;

pub use min_difference::{min_abs_difference, min_abs_difference_f64};
