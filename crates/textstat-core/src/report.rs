//! Full-analysis orchestration.
//!
//! Combines basic statistics, the keyword-density table, and the
//! reading/speaking time estimates into one report. Every invocation
//! re-derives everything from the input text; there is no cached
//! state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keywords::{self, DEFAULT_TOP_KEYWORDS, KeywordEntry};
use crate::stats::{self, TextStats};
use crate::timing::{self, ReadingSpeed, SpeakingPace, TimeEstimate};

/// Options controlling a full analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Number of keyword entries to return.
    pub top_keywords: usize,
    /// Reading speed tier for the reading-time estimate.
    pub reading_speed: ReadingSpeed,
    /// Speaking pace tier for the speaking-time estimate.
    pub speaking_pace: SpeakingPace,
    /// Additional stopwords excluded from the keyword table.
    pub extra_stopwords: Vec<String>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            top_keywords: DEFAULT_TOP_KEYWORDS,
            reading_speed: ReadingSpeed::default(),
            speaking_pace: SpeakingPace::default(),
            extra_stopwords: Vec::new(),
        }
    }
}

/// Complete statistics report for a block of text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextReport {
    /// Word, character, sentence, paragraph, and line counts.
    pub stats: TextStats,
    /// Ranked keyword-density table.
    pub keywords: Vec<KeywordEntry>,
    /// Estimated reading time.
    pub reading_time: TimeEstimate,
    /// Estimated speaking time.
    pub speaking_time: TimeEstimate,
}

/// Run the full analysis over `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze(text: &str, opts: &AnalyzeOptions) -> TextReport {
    let stats = stats::compute_stats(text);
    let keywords = keywords::keyword_density(text, opts.top_keywords, &opts.extra_stopwords);

    TextReport {
        reading_time: timing::reading_time(stats.words, opts.reading_speed),
        speaking_time: timing::speaking_time(stats.words, opts.speaking_pace),
        stats,
        keywords,
    }
}
