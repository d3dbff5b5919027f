//! # Counting
//!
//! Lengths are measured in UTF-16 code units, the naive string length of
//! the editing surface. A symbol outside the Basic Multilingual Plane
//! (most emoji) therefore counts as 2 characters and 2 special characters.
//! No grapheme clustering is done.

use scribe_content::{is_text_whitespace, plain_text, RichContent};
use serde::{Deserialize, Serialize};

/// Statistics for one normalized text, computed together with it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountDetails {
    /// The normalized text the counts were computed from
    pub text: String,

    /// Length in UTF-16 code units
    pub characters: usize,

    /// Maximal non-whitespace runs
    pub words: usize,

    /// Code units that are not ASCII letters, digits or whitespace
    pub special_characters: usize,
}

impl CountDetails {
    /// Zero counts over empty text
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Compute counts in a single pass over the text
pub fn compute_stats(text: &str) -> CountDetails {
    let mut characters = 0;
    let mut special_characters = 0;

    for c in text.chars() {
        let units = c.len_utf16();
        characters += units;
        if is_special(c) {
            special_characters += units;
        }
    }

    CountDetails {
        text: text.to_string(),
        characters,
        words: text
            .split(is_text_whitespace)
            .filter(|w| !w.is_empty())
            .count(),
        special_characters,
    }
}

/// Extract, normalize and count a whole document
pub fn content_stats(content: &RichContent) -> CountDetails {
    compute_stats(&plain_text(content))
}

/// Punctuation, symbols and every non-ASCII character count as special.
/// Whitespace follows [`is_text_whitespace`].
pub fn is_special(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || is_text_whitespace(c))
}
