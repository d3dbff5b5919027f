//! # Document State
//!
//! The single owner of the authored content and the statistics last
//! published for it.
//!
//! ```text
//! replace ──► revision += 1 ──► publish(stats)
//! ```
//!
//! Content is swapped wholesale; nothing downstream mutates it.

use scribe_content::RichContent;
use scribe_stats::CountDetails;

/// Editable document and its derived statistics
#[derive(Debug, Default)]
pub struct Document {
    /// Current revision (increments on each replacement)
    pub revision: u64,

    content: RichContent,

    stats: CountDetails,
}

impl Document {
    /// Swap in new content and return the new revision
    pub fn replace(&mut self, content: RichContent) -> u64 {
        self.content = content;
        self.revision += 1;
        self.revision
    }

    pub fn publish(&mut self, stats: CountDetails) {
        self.stats = stats;
    }

    pub fn content(&self) -> &RichContent {
        &self.content
    }

    pub fn stats(&self) -> &CountDetails {
        &self.stats
    }
}
