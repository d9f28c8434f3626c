//! Analyze command — the full statistics report.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::Config;
use textstat_core::keywords::DEFAULT_TOP_KEYWORDS;
use textstat_core::report::{self, AnalyzeOptions};

use super::{count, keywords, prose_for_analysis, read_input};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Number of keyword entries to include.
    #[arg(long)]
    pub top: Option<usize>,
}

/// Build analysis options from CLI arguments and config defaults.
pub fn options_from(config: &Config, top: Option<usize>) -> AnalyzeOptions {
    AnalyzeOptions {
        top_keywords: top.or(config.top_keywords).unwrap_or(DEFAULT_TOP_KEYWORDS),
        reading_speed: config.reading_speed.unwrap_or_default(),
        speaking_pace: config.speaking_pace.unwrap_or_default(),
        extra_stopwords: config.extra_stopwords.clone().unwrap_or_default(),
    }
}

/// Run the full analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, top = ?args.top, "executing analyze command");

    let content = read_input(&args.file, max_input_bytes)?;
    let prose = prose_for_analysis(&args.file, content);

    let opts = options_from(config, args.top);
    let report = report::analyze(&prose, &opts);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
        return Ok(());
    }

    // Text output — section by section
    println!("{}", args.file.bold());

    println!();
    count::print_stats(&report.stats);

    println!(
        "\n  {} {} ({} wpm)",
        "Reading:".cyan(),
        report.reading_time.display,
        report.reading_time.wpm,
    );
    println!(
        "  {} {} ({} wpm)",
        "Speaking:".cyan(),
        report.speaking_time.display,
        report.speaking_time.wpm,
    );

    if !report.keywords.is_empty() {
        println!("\n  {}", "Keywords:".cyan());
        keywords::print_keywords(&report.keywords);
    }

    Ok(())
}
