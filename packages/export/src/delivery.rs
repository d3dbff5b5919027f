use crate::adapter::ExportPayload;
use crate::errors::DeliveryError;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Host-side hand-off of an exported file (save prompt, download, disk)
pub trait Delivery: Send + Sync {
    fn deliver(&self, payload: &ExportPayload) -> Result<(), DeliveryError>;
}

/// Writes exports into a directory, creating it if needed
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// True when the filename is one normal path component
fn stays_in_dir(filename: &str) -> bool {
    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

impl Delivery for DirectoryDelivery {
    fn deliver(&self, payload: &ExportPayload) -> Result<(), DeliveryError> {
        if !stays_in_dir(&payload.filename) {
            return Err(DeliveryError::Rejected(format!(
                "filename {:?} escapes the export directory",
                payload.filename
            )));
        }
        let path = self.dir.join(&payload.filename);

        std::fs::create_dir_all(&self.dir).map_err(|source| DeliveryError::Write {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, &payload.bytes).map_err(|source| DeliveryError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = payload.bytes.len(), "Export written");
        Ok(())
    }
}

/// Keeps delivered payloads in memory, for embedding hosts and testing
#[derive(Default)]
pub struct MemoryDelivery {
    delivered: Mutex<Vec<ExportPayload>>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, oldest first
    pub fn delivered(&self) -> Vec<ExportPayload> {
        self.delivered
            .lock()
            .map(|delivered| delivered.clone())
            .unwrap_or_default()
    }
}

impl Delivery for MemoryDelivery {
    fn deliver(&self, payload: &ExportPayload) -> Result<(), DeliveryError> {
        self.delivered
            .lock()
            .map_err(|_| DeliveryError::Rejected("delivery log poisoned".to_string()))?
            .push(payload.clone());
        Ok(())
    }
}
