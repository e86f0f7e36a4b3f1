//! Interpolate command implementation
//!
//! Fills the sentinel cells of a CSV matrix and writes the result.

use crate::guard::confirm_overwrite;
use crate::{CliError, Result};
use infra_config::{GridfillConfig, OverwritePolicy};
use interp_core::interpolator::{GridInterpolator, RunSummary};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

/// Arguments for one interpolation run.
#[derive(Debug, Clone)]
pub struct InterpolateArgs {
    /// CSV file containing the data
    pub input: PathBuf,
    /// CSV file to write
    pub output: PathBuf,
    /// Behaviour when `output` already has content
    pub overwrite: OverwritePolicy,
}

/// Run the interpolate command.
///
/// Nothing is written unless the whole grid interpolates successfully.
pub fn run<R, W>(
    args: &InterpolateArgs,
    config: &GridfillConfig,
    prompt_in: &mut R,
    prompt_out: &mut W,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    info!("Starting interpolation...");
    info!("  Input: {}", args.input.display());
    info!("  Output: {}", args.output.display());

    if !args.input.exists() {
        error!("Can not find file: {}", args.input.display());
        return Err(CliError::InputNotFound(args.input.clone()));
    }

    confirm_overwrite(&args.output, args.overwrite, prompt_in, prompt_out)?;

    let grid = adapter_loader::read_grid(&args.input)?;
    let interpolator = GridInterpolator::new(config.to_options()?);

    let result = if config.parallel {
        interpolator.run_parallel(&grid)
    } else {
        interpolator.run(&grid)
    };
    let output = result.map_err(|e| {
        error!(cell = %e.coord, cause = %e.source, "Interpolation failed");
        e
    })?;

    adapter_loader::write_grid(&args.output, &output.grid)?;

    info!(
        sentinels = output.summary.sentinels,
        interpolated = output.summary.interpolated,
        fallbacks = output.summary.fallbacks,
        kept = output.summary.kept,
        "Finished processing data."
    );

    Ok(output.summary)
}
