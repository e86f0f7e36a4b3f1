//! CSV → Grid.

use crate::{LoaderError, Result};
use interp_core::grid::Grid;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load a grid from a comma-separated file.
///
/// The file has no header row; every line is one grid row. Blank lines are
/// skipped.
///
/// # Errors
///
/// * `LoaderError::NotFound` - `path` does not exist
/// * `LoaderError::Io` - The file could not be opened
/// * `LoaderError::Csv` - The content is not valid CSV
/// * `LoaderError::Grid` - Rows have differing lengths
pub fn read_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoaderError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| LoaderError::io(path, e))?;
    let grid = read_grid_from_reader(file)?;

    debug!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "Grid loaded"
    );

    Ok(grid)
}

/// Load a grid from any reader of CSV text.
pub fn read_grid_from_reader<R: Read>(reader: R) -> Result<Grid> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(String::from).collect::<Vec<_>>());
    }

    Ok(Grid::load(rows)?)
}
