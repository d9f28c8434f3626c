//! Watch command — debounced re-analysis on file edits.
//!
//! Polls the file's modification time and hands changed content to a
//! [`Debouncer`], so a burst of saves coalesces into one reprint and
//! only the latest content is ever analyzed.

use std::time::Duration;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument, warn};

use textstat_core::Config;
use textstat_core::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use textstat_core::report;

use super::{analyze::options_from, count, keywords, prose_for_analysis, read_input};

/// Poll interval for modification-time checks.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Arguments for the `watch` subcommand.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// File to watch.
    pub file: Utf8PathBuf,

    /// Quiet window before recomputing, in milliseconds.
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

/// Watch a file and reprint its statistics when edits settle.
///
/// Runs until interrupted.
#[instrument(name = "cmd_watch", skip_all, fields(file = %args.file))]
pub fn cmd_watch(
    args: WatchArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    if args.file.as_str() == "-" {
        anyhow::bail!("watch requires a file path, not stdin");
    }

    let delay = args
        .debounce_ms
        .or(config.debounce_ms)
        .map_or(DEFAULT_DEBOUNCE, Duration::from_millis);
    debug!(file = %args.file, delay_ms = delay.as_millis() as u64, "executing watch command");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").context("invalid spinner template")?,
    );
    spinner.set_message(format!("watching {}", args.file));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let opts = options_from(config, None);
    let file = args.file.clone();
    let printer = spinner.clone();
    let debouncer = Debouncer::new(delay, move |prose: String| {
        let report = report::analyze(&prose, &opts);
        printer.suspend(|| {
            if global_json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => warn!(error = %err, "failed to serialize report"),
                }
                return;
            }
            println!("{}", file.bold());
            println!();
            count::print_stats(&report.stats);
            if !report.keywords.is_empty() {
                println!("\n  {}", "Keywords:".cyan());
                keywords::print_keywords(&report.keywords);
            }
            println!();
        });
    });

    // Initial pass before any edit
    let content = read_input(&args.file, max_input_bytes)?;
    debouncer.trigger(prose_for_analysis(&args.file, content));

    let mut last_modified = std::fs::metadata(args.file.as_std_path())
        .with_context(|| format!("failed to read {}", args.file))?
        .modified()
        .context("filesystem does not report modification times")?;

    loop {
        std::thread::sleep(POLL_INTERVAL);

        let modified = match std::fs::metadata(args.file.as_std_path()).and_then(|m| m.modified())
        {
            Ok(modified) => modified,
            Err(err) => {
                // Editors often replace files; keep polling until it reappears
                warn!(file = %args.file, error = %err, "file unavailable, still watching");
                continue;
            }
        };

        if modified != last_modified {
            last_modified = modified;
            match read_input(&args.file, max_input_bytes) {
                Ok(content) => debouncer.trigger(prose_for_analysis(&args.file, content)),
                Err(err) => warn!(file = %args.file, error = %err, "failed to reread file"),
            }
        }
    }
}
