//! Clean command — whitespace normalization.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textstat_core::clean;

use super::read_input;

/// Arguments for the `clean` subcommand.
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// File to clean (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Rewrite the file in place instead of printing to stdout.
    #[arg(long)]
    pub write: bool,
}

/// Normalize the whitespace of a file.
#[instrument(name = "cmd_clean", skip_all, fields(file = %args.file))]
pub fn cmd_clean(args: CleanArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    debug!(file = %args.file, write = args.write, "executing clean command");

    if args.write && args.file.as_str() == "-" {
        anyhow::bail!("--write requires a file path, not stdin");
    }

    let content = read_input(&args.file, max_input_bytes)?;
    let cleaned = clean::normalize_whitespace(&content);

    if args.write {
        std::fs::write(args.file.as_std_path(), &cleaned)
            .with_context(|| format!("failed to write {}", args.file))?;
        return Ok(());
    }

    println!("{cleaned}");
    Ok(())
}
