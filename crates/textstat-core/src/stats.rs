//! Basic text statistics.
//!
//! Counts words, characters (with and without whitespace), sentences,
//! paragraphs, and lines, plus the average sentence length. Every
//! count is a pure function of the input; nothing is cached between
//! calls.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Basic counts for a block of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Raw character count, whitespace included.
    pub characters: usize,
    /// Character count with all whitespace removed.
    pub characters_no_spaces: usize,
    /// Number of sentences (split on `.`, `!`, `?` runs).
    pub sentences: usize,
    /// Number of paragraphs (separated by blank lines).
    pub paragraphs: usize,
    /// Number of non-blank lines.
    pub lines: usize,
    /// `words / sentences`, or 0 when there are no sentences.
    pub avg_words_per_sentence: f64,
}

/// Compute basic statistics for `text`.
///
/// Empty or whitespace-only input yields all-zero stats.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn compute_stats(text: &str) -> TextStats {
    if text.trim().is_empty() {
        return TextStats::default();
    }

    let words = text::split_words(text).len();
    let sentences = text::split_sentences(text).len();
    let paragraphs = text::split_paragraphs(text).len();
    let lines = text::split_lines(text).len();

    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

    let avg_words_per_sentence = if sentences > 0 {
        words as f64 / sentences as f64
    } else {
        0.0
    };

    TextStats {
        words,
        characters,
        characters_no_spaces,
        sentences,
        paragraphs,
        lines,
        avg_words_per_sentence,
    }
}
