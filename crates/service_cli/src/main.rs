//! gridfill CLI - Fill missing CSV matrix entries
//!
//! Replaces every `nan` cell of a CSV matrix with the average of its
//! non-diagonal orthogonal neighbours.
//!
//! ```text
//! gridfill -i data.csv -o filled.csv
//! gridfill -i data.csv -o filled.csv --overwrite force -c gridfill.toml
//! ```
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this binary orchestrates the adapter
//! (`adapter_loader`), infra (`infra_config`) and kernel (`interp_core`)
//! crates.

use anyhow::{Context, Result};
use clap::Parser;
use infra_config::{GridfillConfig, OverwritePolicy, DEFAULT_CONFIG_PATH};
use service_cli::commands::interpolate::{self, InterpolateArgs};
use service_cli::logging::init_tracing;
use service_cli::CliError;
use std::path::PathBuf;
use tracing::info;

/// Fill missing values of a CSV matrix by neighbour averaging
#[derive(Parser)]
#[command(name = "gridfill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The CSV file containing your data
    #[arg(short = 'i', long = "csv-file-input", alias = "csv_file_input")]
    input: PathBuf,

    /// A name for the CSV file output generated
    #[arg(short = 'o', long = "csv-file-output", alias = "csv_file_output")]
    output: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Overwrite policy for a non-empty output file (prompt, force, abort)
    #[arg(long)]
    overwrite: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GridfillConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    init_tracing(&config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let overwrite = match cli.overwrite.as_deref() {
        None => config.overwrite,
        Some(name) => OverwritePolicy::parse(name).ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "Unknown overwrite policy: {}. Supported: prompt, force, abort",
                name
            ))
        })?,
    };

    let args = InterpolateArgs {
        input: cli.input,
        output: cli.output,
        overwrite,
    };

    let stdin = std::io::stdin();
    interpolate::run(&args, &config, &mut stdin.lock(), &mut std::io::stdout())?;

    Ok(())
}
