//! Error types for the editor

use scribe_content::ContentError;
use scribe_export::{DeliveryError, ExportError};
use scribe_generation::GenerationFailed;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    #[error(transparent)]
    Generation(#[from] GenerationFailed),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
