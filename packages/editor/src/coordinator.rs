//! # Change Coordinator
//!
//! Owns the document and routes the three kinds of events:
//!
//! ```text
//! content change ──► replace ──► extract ──► normalize ──► count ──► publish
//! export request ──► build_export(raw payload) ──► delivery
//! generate request ──► PendingGeneration ··· await ··· complete_generation
//! ```
//!
//! Content changes and exports run to completion synchronously. Only
//! generation suspends, and it does so outside the coordinator so other
//! events can be handled meanwhile.

use crate::config::{EditorConfig, EmptyContentPolicy};
use crate::document::Document;
use crate::errors::EditorError;
use crate::generation::{GenerationOutcome, GenerationTicket, PendingGeneration};
use crate::observer::{EditorEvent, EditorObserver, ObserverRegistry};
use scribe_content::{RichContent, TreeShape};
use scribe_export::{build_export_named, Delivery, ExportFormat, ExportPayload};
use scribe_generation::{HttpGenerator, TextGenerator};
use scribe_stats::{content_stats, CountDetails};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Single writer for document content and statistics
pub struct ChangeCoordinator {
    config: EditorConfig,
    document: Document,
    generator: Arc<dyn TextGenerator>,
    delivery: Box<dyn Delivery>,
    observers: ObserverRegistry,
    latest_request: AtomicU64,
}

impl ChangeCoordinator {
    pub fn new(
        config: EditorConfig,
        generator: Arc<dyn TextGenerator>,
        delivery: Box<dyn Delivery>,
    ) -> Self {
        Self {
            config,
            document: Document::default(),
            generator,
            delivery,
            observers: ObserverRegistry::new(),
            latest_request: AtomicU64::new(0),
        }
    }

    /// Create a coordinator that generates text over HTTP using the configured credential
    pub fn with_http_generator(
        config: EditorConfig,
        delivery: Box<dyn Delivery>,
    ) -> Result<Self, EditorError> {
        let generator = HttpGenerator::new(config.generation.clone())?;
        Ok(Self::new(config, Arc::new(generator), delivery))
    }

    pub fn subscribe(&mut self, observer: impl EditorObserver + 'static) {
        self.observers.register(Box::new(observer));
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn content(&self) -> &RichContent {
        self.document.content()
    }

    /// Statistics last published
    pub fn stats(&self) -> &CountDetails {
        self.document.stats()
    }

    pub fn revision(&self) -> u64 {
        self.document.revision
    }

    /// Replace the document and recompute its statistics.
    ///
    /// Returns the published statistics, or `None` when an empty payload
    /// leaves prior statistics in place under [`EmptyContentPolicy::Retain`].
    #[instrument(skip(self, content), fields(bytes = content.raw().len()))]
    pub fn on_content_change(&mut self, content: RichContent) -> Option<CountDetails> {
        let shape = TreeShape::of(content.root());
        let bytes = content.raw().len();
        let revision = self.document.replace(content);

        self.observers.emit(EditorEvent::ContentChanged {
            revision,
            bytes,
            elements: shape.elements,
            text_leaves: shape.text_leaves,
        });

        let stats = if self.document.content().is_empty() {
            match self.config.empty_content_policy {
                EmptyContentPolicy::Retain => {
                    debug!(revision, "Empty content, keeping previous statistics");
                    return None;
                }
                EmptyContentPolicy::Reset => CountDetails::empty(),
            }
        } else {
            content_stats(self.document.content())
        };

        info!(
            revision,
            characters = stats.characters,
            words = stats.words,
            special_characters = stats.special_characters,
            "Statistics updated"
        );

        self.document.publish(stats.clone());
        self.observers.emit(EditorEvent::StatsPublished {
            revision,
            stats: stats.clone(),
        });

        Some(stats)
    }

    /// Parse an HTML payload from the editing surface and apply it
    pub fn on_payload_change(&mut self, raw: impl Into<String>) -> Option<CountDetails> {
        self.on_content_change(RichContent::from_html(raw))
    }

    /// Package the current raw payload and hand it to delivery
    #[instrument(skip(self))]
    pub fn on_export_request(&self, format: ExportFormat) -> Result<ExportPayload, EditorError> {
        let payload = build_export_named(
            self.document.content().raw(),
            &self.config.export_base_name,
            format,
        )?;

        match self.delivery.deliver(&payload) {
            Ok(()) => {
                info!(filename = %payload.filename, "Export delivered");
                self.observers.emit(EditorEvent::ExportDelivered {
                    format,
                    filename: payload.filename.clone(),
                });
                Ok(payload)
            }
            Err(e) => {
                warn!(error = %e, "Export delivery failed");
                self.observers.emit(EditorEvent::ExportFailed {
                    format,
                    reason: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    /// Export by tag or MIME string, as sent by a string-typed surface
    pub fn on_export_tag(&self, tag: &str) -> Result<ExportPayload, EditorError> {
        let format = tag.parse::<ExportFormat>()?;
        self.on_export_request(format)
    }

    /// Start a generation request for a topic.
    ///
    /// Issuing a new request supersedes any earlier one still in flight.
    pub fn on_generate_request(&self, topic: &str) -> PendingGeneration {
        let request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(request_id, topic, "Generation requested");

        PendingGeneration {
            generator: Arc::clone(&self.generator),
            ticket: GenerationTicket {
                request_id,
                revision: self.document.revision,
                topic: topic.to_string(),
            },
        }
    }

    /// Accept the result of a generation request.
    ///
    /// Returns `Ok(None)` when the result is stale: the document changed
    /// or a newer request was issued after this one started. Failures
    /// never touch document state.
    pub fn complete_generation(
        &self,
        outcome: GenerationOutcome,
    ) -> Result<Option<String>, EditorError> {
        let GenerationOutcome { ticket, result } = outcome;

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                warn!(topic = %ticket.topic, error = %e, "Generation failed");
                self.observers.emit(EditorEvent::GenerationFailed {
                    topic: ticket.topic,
                    reason: e.reason.clone(),
                });
                return Err(e.into());
            }
        };

        let stale = ticket.revision != self.document.revision
            || ticket.request_id != self.latest_request.load(Ordering::SeqCst);

        if stale {
            debug!(request_id = ticket.request_id, "Discarding stale generation result");
            self.observers
                .emit(EditorEvent::GenerationDiscarded { topic: ticket.topic });
            return Ok(None);
        }

        self.observers.emit(EditorEvent::GenerationCompleted {
            topic: ticket.topic,
            characters: text.encode_utf16().count(),
        });
        Ok(Some(text))
    }

    /// Request, await and accept in one step
    pub async fn generate(&self, topic: &str) -> Result<Option<String>, EditorError> {
        let outcome = self.on_generate_request(topic).resolve().await;
        self.complete_generation(outcome)
    }
}

impl std::fmt::Debug for ChangeCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeCoordinator")
            .field("config", &self.config)
            .field("document", &self.document)
            .field("observers", &self.observers)
            .finish()
    }
}
