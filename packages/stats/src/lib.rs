//! # Scribe Stats
//!
//! Character, word and special-character counts over normalized text.

mod counts;

pub use counts::{compute_stats, content_stats, is_special, CountDetails};
