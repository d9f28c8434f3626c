//! Markdown stripping.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than
//! regex-based stripping. Counting statistics over raw markdown would
//! treat fences, link URLs, and table pipes as words, so `.md` inputs
//! are reduced to prose first.
//!
//! Unlike a readability pass, the counters care about document shape:
//! paragraph and line-break boundaries are preserved as newlines so
//! paragraph and line counts survive the stripping.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes code blocks, inline code, headings, HTML, YAML
/// frontmatter, and table structure. Keeps link text, blockquote
/// text, list items, and emphasized text (without markers).
/// Paragraph boundaries become blank lines; hard breaks become
/// newlines.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(&text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            // Skip content inside code blocks and headings
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_)) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak if skip_depth == 0 => {
                result.push(' ');
            }
            Event::HardBreak if skip_depth == 0 => {
                result.push('\n');
            }

            // Paragraph and list-item boundaries keep document shape
            Event::End(TagEnd::Paragraph) if skip_depth == 0 => {
                result.push_str("\n\n");
            }
            Event::End(TagEnd::Item) if skip_depth == 0 => {
                result.push('\n');
            }

            // Skip inline code text
            Event::Code(_) => {}

            _ => {}
        }
    }

    result.trim_end().to_string()
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    // Find the closing `---`
    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    // Skip past the closing `---` and its newline
    let remainder = &after_opening[close_pos + 4..];
    remainder
        .strip_prefix('\n')
        .unwrap_or(remainder)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;

    #[test]
    fn strip_removes_code_blocks() {
        let input = "Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("let x"));
        assert!(result.contains("Some text."));
        assert!(result.contains("More text."));
    }

    #[test]
    fn strip_removes_frontmatter() {
        let input = "---\nstatus: draft\ndate: 2026-02-07\n---\n\nSome text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("status"));
        assert!(result.contains("Some text."));
    }

    #[test]
    fn strip_removes_headings() {
        let input = "# Header\n\nSome text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("Header"));
        assert!(result.contains("Some text."));
    }

    #[test]
    fn strip_preserves_link_text_not_url() {
        let input = "Check [this link](https://example.com) for details.";
        let result = strip_to_prose(input);
        assert!(result.contains("this link"));
        assert!(!result.contains("https://example.com"));
    }

    #[test]
    fn strip_removes_inline_code() {
        let input = "Use `foo()` to do things.";
        let result = strip_to_prose(input);
        assert!(!result.contains("foo()"));
    }

    #[test]
    fn paragraph_count_survives_stripping() {
        let input = "First **paragraph** here.\n\nSecond paragraph here.\n\nThird one.";
        let stats = compute_stats(&strip_to_prose(input));
        assert_eq!(stats.paragraphs, 3);
    }

    #[test]
    fn word_count_ignores_syntax() {
        let input = "Plain *styled* text.";
        let stats = compute_stats(&strip_to_prose(input));
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn hard_break_becomes_line() {
        let input = "line one  \nline two";
        let stats = compute_stats(&strip_to_prose(input));
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.paragraphs, 1);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
    }
}
