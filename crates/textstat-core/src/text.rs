//! Text splitting utilities.
//!
//! Provides the word, sentence, paragraph, and line splitting used by
//! the statistics and keyword modules. Splitting here is deliberately
//! simple: the counters match what a person eyeballing the text would
//! come up with, not a linguistically exact segmentation.

/// Split text into words on runs of whitespace, dropping empty tokens.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on runs of `.`, `!`, or `?`.
///
/// Fragments that are empty or whitespace-only after trimming are
/// dropped, so trailing punctuation does not produce a phantom
/// sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs separated by blank lines.
///
/// A line containing only whitespace counts as blank, so `"a\n \nb"`
/// is two paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                paragraphs.push(current.trim().to_string());
            }
            current.clear();
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.trim().is_empty() {
        paragraphs.push(current.trim().to_string());
    }

    paragraphs
}

/// Split text into lines, dropping whitespace-only lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.trim().is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_whitespace_runs() {
        let words = split_words("The  quick\tbrown\nfox");
        assert_eq!(words, vec!["The", "quick", "brown", "fox"]);
    }

    #[test]
    fn words_empty_input() {
        assert!(split_words("").is_empty());
        assert!(split_words("   \n\t ").is_empty());
    }

    #[test]
    fn sentences_split_on_terminators() {
        let sentences = split_sentences("One. Two! Three?");
        assert_eq!(sentences, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn sentences_collapse_terminator_runs() {
        let sentences = split_sentences("Wait... what?! Really.");
        assert_eq!(sentences, vec!["Wait", "what", "Really"]);
    }

    #[test]
    fn sentences_drop_whitespace_fragments() {
        let sentences = split_sentences("Done.   ");
        assert_eq!(sentences, vec!["Done"]);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let paras = split_paragraphs("First paragraph.\n\nSecond paragraph.\n\nThird.");
        assert_eq!(paras.len(), 3);
        assert_eq!(paras[0], "First paragraph.");
    }

    #[test]
    fn paragraphs_treat_whitespace_line_as_blank() {
        let paras = split_paragraphs("First.\n   \nSecond.");
        assert_eq!(paras.len(), 2);
    }

    #[test]
    fn paragraphs_join_adjacent_lines() {
        let paras = split_paragraphs("line one\nline two\n\nline three");
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0], "line one\nline two");
    }

    #[test]
    fn lines_drop_blank() {
        let lines = split_lines("a\n\n  \nb\nc");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }
}
