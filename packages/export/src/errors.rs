//! Error types for export and delivery

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid export base name {0:?}: must be a non-empty plain file name")]
    InvalidBaseName(String),
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Delivery rejected: {0}")]
    Rejected(String),
}
