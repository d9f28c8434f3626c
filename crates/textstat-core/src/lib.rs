//! Core library for textstat.
//!
//! This crate provides the text-statistics routines used by the
//! `textstat` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`stats`] - Word/character/sentence/paragraph/line counting
//! - [`keywords`] - Keyword-density computation
//! - [`timing`] - Reading and speaking time estimation
//! - [`report`] - Full-analysis orchestration
//! - [`clean`] - Whitespace normalization
//! - [`case`] - Case conversion
//! - [`debounce`] - Delayed, superseding recomputation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textstat_core::stats::compute_stats;
//!
//! let stats = compute_stats("The quick brown fox. The fox jumps!");
//! assert_eq!(stats.words, 7);
//! assert_eq!(stats.sentences, 2);
//! ```
#![deny(unsafe_code)]

pub mod case;
pub mod clean;
pub mod config;
pub mod debounce;
pub mod error;
pub mod keywords;
pub mod markdown;
pub mod report;
pub mod stats;
pub mod stopwords;
pub mod text;
pub mod timing;

pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use report::{AnalyzeOptions, TextReport};
pub use stats::TextStats;

/// Default cap on input size (5 MiB), matching the original service's
/// upload limit. Callers can raise or disable it via configuration.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
