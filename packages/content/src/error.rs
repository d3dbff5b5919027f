use thiserror::Error;

/// Errors raised when building content from a structured payload.
///
/// HTML payloads never fail; only the JSON tree form can.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid content tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content tree nests {depth} elements deep, limit is {limit}")]
    TooDeep { depth: usize, limit: usize },
}
