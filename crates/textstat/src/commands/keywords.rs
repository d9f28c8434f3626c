//! Keywords command — keyword-density table.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::Config;
use textstat_core::keywords::{self, DEFAULT_TOP_KEYWORDS, KeywordEntry};

use super::{prose_for_analysis, read_input};

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Number of entries to show.
    #[arg(long)]
    pub top: Option<usize>,
}

/// Print the keyword-density table for a file.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, top = ?args.top, "executing keywords command");

    let content = read_input(&args.file, max_input_bytes)?;
    let prose = prose_for_analysis(&args.file, content);

    let top = args
        .top
        .or(config.top_keywords)
        .unwrap_or(DEFAULT_TOP_KEYWORDS);
    let extra = config.extra_stopwords.clone().unwrap_or_default();

    let entries = keywords::keyword_density(&prose, top, &extra);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).context("failed to serialize keywords")?
        );
        return Ok(());
    }

    if entries.is_empty() {
        println!("no qualifying keywords");
        return Ok(());
    }

    print_keywords(&entries);
    Ok(())
}

/// Print keyword entries as `word  count  density%` rows.
pub fn print_keywords(entries: &[KeywordEntry]) {
    for entry in entries {
        println!(
            "  {:<20} {:>5}  {:>6.2}%",
            entry.word.bold(),
            entry.count,
            entry.density,
        );
    }
}
