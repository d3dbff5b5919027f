//! # Text Extraction
//!
//! Two steps, always applied in this order:
//!
//! 1. [`extract`] concatenates every text leaf in document order, putting a
//!    single space between siblings regardless of element type.
//! 2. [`normalize`] collapses whitespace runs to one ASCII space and trims.
//!
//! Normalization runs once over the whole extracted string, so word
//! boundaries come from the final text rather than from node boundaries.

use crate::node::{RichContent, RichContentNode};
use crate::visitor::{walk, Visitor};

/// Whitespace as the editing surface's text tooling sees it.
///
/// Unicode `White_Space` except U+0085 NEL, plus U+FEFF (zero-width
/// no-break space). Normalization and word counting both use this set.
pub fn is_text_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Extract raw text from a node and all its descendants
pub fn extract(node: &RichContentNode) -> String {
    let mut collector = TextCollector::default();
    walk(&mut collector, node);
    collector.out
}

/// Joins text leaves, one space between siblings
#[derive(Default)]
struct TextCollector {
    out: String,
    // One entry per open element: whether a child has been emitted yet
    siblings: Vec<bool>,
}

impl TextCollector {
    fn separate(&mut self) {
        if let Some(seen) = self.siblings.last_mut() {
            if *seen {
                self.out.push(' ');
            }
            *seen = true;
        }
    }
}

impl Visitor for TextCollector {
    fn enter_element(&mut self, _tag: &str) {
        self.separate();
        self.siblings.push(false);
    }

    fn leave_element(&mut self, _tag: &str) {
        self.siblings.pop();
    }

    fn visit_text(&mut self, value: Option<&str>) {
        self.separate();
        if let Some(value) = value {
            self.out.push_str(value);
        }
    }
}

/// Collapse whitespace runs (newlines and tabs included) and trim
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(is_text_whitespace).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Normalized plain-text projection of a document
pub fn plain_text(content: &RichContent) -> String {
    normalize(&extract(content.root()))
}
