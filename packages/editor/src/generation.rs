//! # Pending Generation
//!
//! A generation request detaches from the coordinator before it awaits
//! the network, so content changes and exports keep flowing while the
//! remote call is in flight. The outcome is handed back to the
//! coordinator, which decides whether it is still current.

use scribe_generation::{GenerationFailed, TextGenerator};
use std::sync::Arc;
use tracing::debug;

/// A generation request that has not been sent yet
pub struct PendingGeneration {
    pub(crate) generator: Arc<dyn TextGenerator>,
    pub(crate) ticket: GenerationTicket,
}

/// Identifies which request and which document revision a result belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    pub request_id: u64,
    pub revision: u64,
    pub topic: String,
}

/// Result of a remote call, not yet accepted by the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub ticket: GenerationTicket,
    pub result: Result<String, GenerationFailed>,
}

impl PendingGeneration {
    /// Perform the remote call. Holds no borrow of the coordinator.
    pub async fn resolve(self) -> GenerationOutcome {
        debug!(
            request_id = self.ticket.request_id,
            topic = %self.ticket.topic,
            "Sending generation request"
        );
        let result = self.generator.generate(&self.ticket.topic).await;

        GenerationOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

impl std::fmt::Debug for PendingGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingGeneration")
            .field("ticket", &self.ticket)
            .finish()
    }
}
