//! Time command — reading and speaking time estimates.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use textstat_core::Config;
use textstat_core::stats;
use textstat_core::timing::{self, ReadingSpeed, SpeakingPace, TimeEstimate};

use super::{prose_for_analysis, read_input};

/// Arguments for the `time` subcommand.
#[derive(Args, Debug)]
pub struct TimeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Reading speed tier.
    #[arg(long, value_enum)]
    pub reading_speed: Option<ReadingSpeed>,

    /// Speaking pace tier.
    #[arg(long, value_enum)]
    pub speaking_pace: Option<SpeakingPace>,
}

#[derive(Serialize)]
struct TimeReport {
    words: usize,
    reading_time: TimeEstimate,
    speaking_time: TimeEstimate,
}

/// Estimate reading and speaking time for a file.
#[instrument(name = "cmd_time", skip_all, fields(file = %args.file))]
pub fn cmd_time(
    args: TimeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        file = %args.file,
        reading_speed = ?args.reading_speed,
        speaking_pace = ?args.speaking_pace,
        "executing time command"
    );

    let content = read_input(&args.file, max_input_bytes)?;
    let prose = prose_for_analysis(&args.file, content);

    let speed = args
        .reading_speed
        .or(config.reading_speed)
        .unwrap_or_default();
    let pace = args
        .speaking_pace
        .or(config.speaking_pace)
        .unwrap_or_default();

    let words = stats::compute_stats(&prose).words;
    let report = TimeReport {
        words,
        reading_time: timing::reading_time(words, speed),
        speaking_time: timing::speaking_time(words, pace),
    };

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize time report")?
        );
        return Ok(());
    }

    println!(
        "  {} {} ({} wpm)",
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

    Ok(())
}
