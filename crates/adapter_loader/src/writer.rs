//! Grid → CSV.

use crate::{LoaderError, Result};
use interp_core::grid::Grid;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Render a grid as comma-separated text, one `\n`-terminated line per row.
pub fn render_grid(grid: &Grid) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in grid.iter_rows() {
        wtr.write_record(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| LoaderError::Csv(e.into_error().into()))?;

    String::from_utf8(bytes).map_err(|e| LoaderError::Encoding(e.to_string()))
}

/// Write a grid to `path`, replacing any existing content.
///
/// The file is rendered in memory, written to a temporary file next to `path`
/// and then renamed over it. On failure `path` keeps its previous content.
pub fn write_grid(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let content = render_grid(grid)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| LoaderError::io(path, e))?;
    debug!(tmp = %tmp.path().display(), "Staging output");

    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| LoaderError::io(path, e))?;
    tmp.persist(path).map_err(|e| LoaderError::io(path, e.error))?;

    info!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        size = content.len(),
        "Grid written to file"
    );

    Ok(())
}

/// Whether `path` exists and has a non-zero size.
pub fn is_non_empty_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}
