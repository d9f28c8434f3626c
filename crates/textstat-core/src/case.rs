//! Case conversion.
//!
//! Upper, lower, title, and sentence case transforms. Title case
//! capitalizes the first letter of each word; sentence case
//! capitalizes the first letter after each sentence terminator.
//! Both preserve the input's spacing and punctuation.

use serde::{Deserialize, Serialize};

/// Target case style for [`convert_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CaseStyle {
    /// EVERY LETTER UPPERCASE.
    Upper,
    /// every letter lowercase.
    Lower,
    /// First Letter Of Each Word Uppercase.
    Title,
    /// First letter of each sentence uppercase. the rest lowered.
    Sentence,
}

/// Convert `text` to the given case style.
pub fn convert_case(text: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => text.to_uppercase(),
        CaseStyle::Lower => text.to_lowercase(),
        CaseStyle::Title => to_title(text),
        CaseStyle::Sentence => to_sentence(text),
    }
}

/// Uppercase the first letter of each word, lowercase the rest.
fn to_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }

    out
}

/// Uppercase the first letter of each sentence, lowercase the rest.
///
/// A sentence starts at the beginning of the text and after each run
/// of `.`, `!`, or `?`. Spacing is untouched.
fn to_sentence(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_sentence_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_sentence_start {
                out.extend(ch.to_uppercase());
                at_sentence_start = false;
            } else {
                out.extend(ch.to_lowercase());
            }
        } else {
            if matches!(ch, '.' | '!' | '?') {
                at_sentence_start = true;
            }
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_and_lower() {
        assert_eq!(convert_case("Hello World", CaseStyle::Upper), "HELLO WORLD");
        assert_eq!(convert_case("Hello World", CaseStyle::Lower), "hello world");
    }

    #[test]
    fn title_capitalizes_each_word() {
        assert_eq!(
            convert_case("the quick BROWN fox", CaseStyle::Title),
            "The Quick Brown Fox"
        );
    }

    #[test]
    fn title_treats_punctuation_as_boundary() {
        assert_eq!(convert_case("well-known", CaseStyle::Title), "Well-Known");
    }

    #[test]
    fn sentence_capitalizes_after_terminators() {
        assert_eq!(
            convert_case("hello there. HOW are you? fine!", CaseStyle::Sentence),
            "Hello there. How are you? Fine!"
        );
    }

    #[test]
    fn sentence_preserves_spacing() {
        assert_eq!(
            convert_case("one.  two.", CaseStyle::Sentence),
            "One.  Two."
        );
    }

    #[test]
    fn sentence_handles_leading_punctuation() {
        assert_eq!(
            convert_case("\"quoted start\" here.", CaseStyle::Sentence),
            "\"Quoted start\" here."
        );
    }

    #[test]
    fn empty_input() {
        for style in [
            CaseStyle::Upper,
            CaseStyle::Lower,
            CaseStyle::Title,
            CaseStyle::Sentence,
        ] {
            assert_eq!(convert_case("", style), "");
        }
    }
}
