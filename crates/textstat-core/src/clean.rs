//! Whitespace normalization.
//!
//! Collapses runaway spacing from copy-pasted text: runs of spaces and
//! tabs become one space, stacks of blank lines become a single blank
//! line, and every line is trimmed.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of spaces and tabs within a line.
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

/// Three or more consecutive newlines (allowing whitespace-only lines between).
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("valid regex"));

/// Normalize the whitespace of `text`.
///
/// Collapses space/tab runs to single spaces, collapses three or more
/// line breaks to one blank line, trims each line, and trims the
/// whole result.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = SPACE_RUNS.replace_all(text, " ");
    let collapsed = BLANK_RUNS.replace_all(&collapsed, "\n\n");

    collapsed
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
