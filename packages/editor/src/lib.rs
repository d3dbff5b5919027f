//! # Scribe Editor
//!
//! Coordinates the authoring surface with text statistics, export and
//! remote generation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ editing surface: HTML payload on every edit │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: ChangeCoordinator                   │
//! │  - Own the document (single writer)         │
//! │  - Extract → normalize → count on change    │
//! │  - Export the raw payload                   │
//! │  - Request generated text, drop stale ones  │
//! └─────────────────────────────────────────────┘
//!          ↓                ↓               ↓
//!      observers        delivery       generator
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scribe_editor::{ChangeCoordinator, EditorConfig};
//! use scribe_export::{DirectoryDelivery, ExportFormat};
//!
//! let config = EditorConfig::load(&cwd)?.with_env_overrides();
//! let mut editor = ChangeCoordinator::with_http_generator(
//!     config,
//!     Box::new(DirectoryDelivery::new("exports")),
//! )?;
//!
//! let stats = editor.on_payload_change("<p>Hello, World!</p>");
//! editor.on_export_request(ExportFormat::Pdf)?;
//!
//! if let Some(text) = editor.generate("tide pools").await? {
//!     // insert `text` through the editing surface
//! }
//! ```

mod config;
mod coordinator;
mod document;
mod errors;
mod generation;
mod observer;

pub use config::{EditorConfig, EmptyContentPolicy, API_KEY_ENV, DEFAULT_CONFIG_NAME};
pub use coordinator::ChangeCoordinator;
pub use errors::{ConfigError, EditorError};
pub use generation::{GenerationOutcome, GenerationTicket, PendingGeneration};
pub use observer::{EditorEvent, EditorObserver, EventLog, ObserverRegistry};

// Re-export common types for convenience
pub use scribe_content::{RichContent, RichContentNode};
pub use scribe_export::{ExportFormat, ExportPayload};
pub use scribe_generation::{GenerationConfig, GenerationFailed, TextGenerator};
pub use scribe_stats::CountDetails;
