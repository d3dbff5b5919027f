//! # Scribe Content
//!
//! Rich-content model and plain-text projection.
//!
//! ```text
//! raw HTML payload ──► node tree ──► extract ──► normalize ──► plain text
//! ```
//!
//! The tree is format-blind on the way out: headings, lists and links all
//! flatten to their text leaves joined by single spaces. Parsing, walking,
//! extraction and dropping use explicit stacks, so nesting depth is
//! bounded only by memory.

pub mod error;
pub mod extract;
pub mod html;
pub mod node;
pub mod visitor;

pub use error::ContentError;
pub use extract::{extract, is_text_whitespace, normalize, plain_text};
pub use node::{RichContent, RichContentNode, MAX_TREE_DEPTH};
pub use visitor::{walk, TreeShape, Visitor};
