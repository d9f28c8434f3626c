//! Case command — case conversion.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textstat_core::case::{self, CaseStyle};

use super::read_input;

/// Arguments for the `case` subcommand.
#[derive(Args, Debug)]
pub struct CaseArgs {
    /// File to convert (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Target case style.
    #[arg(long, value_enum)]
    pub to: CaseStyle,
}

/// Convert the case of a file's text and print it.
#[instrument(name = "cmd_case", skip_all, fields(file = %args.file))]
pub fn cmd_case(args: CaseArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    debug!(file = %args.file, to = ?args.to, "executing case command");

    let content = read_input(&args.file, max_input_bytes)?;
    println!("{}", case::convert_case(&content, args.to));
    Ok(())
}
