use crate::errors::ExportError;
use crate::format::ExportFormat;
use tracing::debug;

pub const DEFAULT_BASE_NAME: &str = "document";

/// Bytes ready for delivery, labeled with a MIME type and filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

/// Package a raw payload as `document.<ext>`
pub fn build_export(raw_payload: &str, format: ExportFormat) -> ExportPayload {
    package(raw_payload, DEFAULT_BASE_NAME, format)
}

/// Package a raw payload under a caller-chosen base name.
///
/// The name is trimmed and must stay a single file name: blank names,
/// path separators, `..` and control characters are rejected.
pub fn build_export_named(
    raw_payload: &str,
    base_name: &str,
    format: ExportFormat,
) -> Result<ExportPayload, ExportError> {
    let trimmed = base_name.trim();
    if !is_plain_file_name(trimmed) {
        return Err(ExportError::InvalidBaseName(base_name.to_string()));
    }

    Ok(package(raw_payload, trimmed, format))
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains("..")
        && !name.chars().any(|c| matches!(c, '/' | '\\') || c.is_control())
}

fn package(raw_payload: &str, base_name: &str, format: ExportFormat) -> ExportPayload {
    let filename = format!("{}.{}", base_name, format.extension());
    debug!(%format, %filename, bytes = raw_payload.len(), "Packaging export");

    ExportPayload {
        bytes: raw_payload.as_bytes().to_vec(),
        filename,
        mime_type: format.mime_type(),
    }
}
