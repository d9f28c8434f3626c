//! Keyword-density computation.
//!
//! Ranks the qualifying tokens of a text by frequency. A token
//! qualifies when it is at least three characters long, is not a
//! stopword, and is not purely numeric. Density is the token's share
//! of all qualifying tokens, not of the raw word count.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stopwords::STOPWORDS;

/// Default number of entries in the keyword table.
pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Punctuation and symbols scrubbed to spaces before tokenizing.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// A ranked keyword with its frequency and density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordEntry {
    /// Lowercased token.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
    /// Percentage of all qualifying tokens, rounded to 2 decimals.
    pub density: f64,
}

/// Compute the keyword-density table for `text`.
///
/// Entries are sorted by count descending (ties by word ascending, so
/// output is deterministic) and truncated to `top` entries. Callers
/// can extend the built-in stopword set with `extra_stopwords`
/// (matched case-insensitively).
#[tracing::instrument(skip_all, fields(text_len = text.len(), top))]
pub fn keyword_density(text: &str, top: usize, extra_stopwords: &[String]) -> Vec<KeywordEntry> {
    let tokens = qualifying_tokens(text, extra_stopwords);
    if tokens.is_empty() {
        return Vec::new();
    }

    let total = tokens.len() as f64;
    let mut freq: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *freq.entry(token).or_insert(0) += 1;
    }

    let mut entries: Vec<KeywordEntry> = freq
        .into_iter()
        .map(|(word, count)| KeywordEntry {
            density: round2(count as f64 / total * 100.0),
            word,
            count,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries.truncate(top);
    entries
}

/// Lowercase, scrub punctuation to spaces, and keep qualifying tokens.
fn qualifying_tokens(text: &str, extra_stopwords: &[String]) -> Vec<String> {
    let lowered = text.to_lowercase();
    let scrubbed = NON_WORD.replace_all(&lowered, " ");

    scrubbed
        .split_whitespace()
        .filter(|t| t.chars().count() >= 3)
        .filter(|t| !STOPWORDS.contains(t))
        .filter(|t| !extra_stopwords.iter().any(|s| s.eq_ignore_ascii_case(t)))
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty() {
        assert!(keyword_density("", DEFAULT_TOP_KEYWORDS, &[]).is_empty());
        assert!(keyword_density("the and of", DEFAULT_TOP_KEYWORDS, &[]).is_empty());
    }

    #[test]
    fn fox_is_top_keyword() {
        let entries = keyword_density(
            "The quick brown fox. The fox jumps!",
            DEFAULT_TOP_KEYWORDS,
            &[],
        );
        assert_eq!(entries[0].word, "fox");
        assert_eq!(entries[0].count, 2);
    }

    #[test]
    fn short_and_numeric_tokens_excluded() {
        let entries = keyword_density("ab ab ab 1234 1234 analysis", DEFAULT_TOP_KEYWORDS, &[]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "analysis");
    }

    #[test]
    fn stopwords_excluded() {
        let entries = keyword_density("the the the would would fox", DEFAULT_TOP_KEYWORDS, &[]);
        assert!(entries.iter().all(|e| e.word == "fox"));
    }

    #[test]
    fn punctuation_scrubbed_before_tokenizing() {
        let entries = keyword_density("rust-lang, rust! (rust)", DEFAULT_TOP_KEYWORDS, &[]);
        let rust = entries.iter().find(|e| e.word == "rust").unwrap();
        assert_eq!(rust.count, 3);
        assert!(entries.iter().any(|e| e.word == "lang"));
    }

    #[test]
    fn densities_cover_qualifying_universe() {
        let entries = keyword_density("alpha alpha beta gamma", DEFAULT_TOP_KEYWORDS, &[]);
        let total_count: usize = entries.iter().map(|e| e.count).sum();
        assert_eq!(total_count, 4);
        let total_density: f64 = entries.iter().map(|e| e.density).sum();
        assert!((total_density - 100.0).abs() < 0.1);
    }

    #[test]
    fn sorted_by_count_then_word() {
        let entries = keyword_density("beta alpha beta alpha gamma", DEFAULT_TOP_KEYWORDS, &[]);
        assert_eq!(entries[0].word, "alpha");
        assert_eq!(entries[1].word, "beta");
        assert_eq!(entries[2].word, "gamma");
    }

    #[test]
    fn truncated_to_top() {
        let text = "aaa bbb ccc ddd eee fff ggg hhh iii jjj kkk lll";
        let entries = keyword_density(text, DEFAULT_TOP_KEYWORDS, &[]);
        assert_eq!(entries.len(), 10);
    }

    #[test]
    fn extra_stopwords_respected() {
        let extra = vec!["fox".to_string()];
        let entries = keyword_density("fox fox quick", DEFAULT_TOP_KEYWORDS, &extra);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "quick");
    }

    #[test]
    fn mixed_alphanumeric_tokens_kept() {
        // "v2" is too short, "sha256" qualifies (not purely numeric)
        let entries = keyword_density("sha256 sha256 v2", DEFAULT_TOP_KEYWORDS, &[]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "sha256");
    }
}
