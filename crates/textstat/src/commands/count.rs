//! Count command — basic text statistics.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::stats::{self, TextStats};

use super::{prose_for_analysis, read_input};

/// Arguments for the `count` subcommand.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Count words, characters, sentences, paragraphs, and lines in a file.
#[instrument(name = "cmd_count", skip_all, fields(file = %args.file))]
pub fn cmd_count(
    args: CountArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing count command");

    let content = read_input(&args.file, max_input_bytes)?;
    let prose = prose_for_analysis(&args.file, content);

    let stats = stats::compute_stats(&prose);

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("failed to serialize stats")?
        );
        return Ok(());
    }

    print_stats(&stats);
    Ok(())
}

/// Print the stats block in the shared label/value layout.
pub fn print_stats(stats: &TextStats) {
    println!("  {} {}", "Words:".cyan(), stats.words);
    println!("  {} {}", "Characters:".cyan(), stats.characters);
    println!(
        "  {} {}",
        "Characters (no spaces):".cyan(),
        stats.characters_no_spaces
    );
    println!("  {} {}", "Sentences:".cyan(), stats.sentences);
    println!("  {} {}", "Paragraphs:".cyan(), stats.paragraphs);
    println!("  {} {}", "Lines:".cyan(), stats.lines);
    println!(
        "  {} {:.1}",
        "Avg words/sentence:".cyan(),
        stats.avg_words_per_sentence
    );
}
