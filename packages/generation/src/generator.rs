use crate::error::GenerationFailed;
use async_trait::async_trait;

/// Produces text for a prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailed>;
}
