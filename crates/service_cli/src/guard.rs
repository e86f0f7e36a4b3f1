//! Overwrite guard for the output file.

use crate::{CliError, ConflictReason, Result};
use adapter_loader::is_non_empty_file;
use infra_config::OverwritePolicy;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// Prompt shown when the output file already has content.
pub const OVERWRITE_PROMPT: &str = "Do you want to continue and override it?(y/n) => ";

/// Decide whether `output` may be written.
///
/// Missing or empty files always pass. For a non-empty file the `policy`
/// decides; `Prompt` writes [`OVERWRITE_PROMPT`] to `prompt_out` and reads one
/// line from `prompt_in`: `y` proceeds, `n` or anything else stops the run.
pub fn confirm_overwrite<R, W>(
    output: &Path,
    policy: OverwritePolicy,
    prompt_in: &mut R,
    prompt_out: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if !is_non_empty_file(output) {
        return Ok(());
    }

    info!("The output file is not empty: {}", output.display());

    let reason = match policy {
        OverwritePolicy::Force => {
            warn!("Overwriting {} (overwrite = force)", output.display());
            return Ok(());
        }
        OverwritePolicy::Abort => ConflictReason::PolicyAbort,
        OverwritePolicy::Prompt => {
            write!(prompt_out, "{}", OVERWRITE_PROMPT)?;
            prompt_out.flush()?;

            let mut answer = String::new();
            prompt_in.read_line(&mut answer)?;

            match answer.trim() {
                "y" => return Ok(()),
                "n" => ConflictReason::Declined,
                other => ConflictReason::Unrecognised(other.to_string()),
            }
        }
    };

    Err(CliError::OutputConflict {
        path: output.to_path_buf(),
        reason,
    })
}
