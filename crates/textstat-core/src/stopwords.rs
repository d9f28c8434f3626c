//! Stopword list for keyword-density analysis.
//!
//! Common English function words are excluded from the keyword table
//! so it surfaces topical vocabulary instead of "the" and "and".

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English words excluded from keyword density.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "this", "but",
        "they", "have", "had", "what", "said", "each", "which", "she", "do", "how", "their", "if",
        "up", "out", "many", "then", "them", "these", "so", "some", "her", "would", "make", "like",
        "into", "him", "time", "two", "more", "go", "no", "way", "could", "my", "than", "first",
        "been", "call", "who", "now", "find", "long", "down", "day", "did", "get", "come", "made",
        "may", "part",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if `word` (already lowercased) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}
