use thiserror::Error;

/// The only way a generation request can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Text generation failed: {reason}")]
pub struct GenerationFailed {
    pub reason: String,
}

impl GenerationFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
