//! Logging and tracing setup for the CLI.
//!
//! Diagnostics go to stderr by default so stdout stays clean for
//! report output and piping. Setting `TEXTSTAT_LOG_PATH`,
//! `TEXTSTAT_LOG_DIR`, or `log_dir` in the config file redirects them
//! to a file via a non-blocking appender.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file name used when only a directory is configured.
const LOG_FILE_NAME: &str = "textstat.log";

/// Where diagnostics should be written.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`TEXTSTAT_LOG_PATH`). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Log directory (`TEXTSTAT_LOG_DIR` or config `log_dir`).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, falling back to the config
    /// file's `log_dir` when the environment does not set one.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("TEXTSTAT_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("TEXTSTAT_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the level filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`,
/// `-v`/`-vv` raise to `debug`/`trace`, and the config level applies
/// when no flag is given.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let fallback = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => config_level.to_string(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global tracing subscriber.
///
/// Returns the appender's worker guard when logging to a file; the
/// caller must keep it alive for the life of the process or buffered
/// lines are lost.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let target = config.log_path.clone().or_else(|| {
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.join(LOG_FILE_NAME))
    });

    let Some(path) = target else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map_or_else(|| LOG_FILE_NAME.into(), ToOwned::to_owned);

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
