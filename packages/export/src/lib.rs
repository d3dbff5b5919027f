//! # Scribe Export
//!
//! Packages the raw document payload for download.
//!
//! Export is a labeling operation: the payload bytes are handed over
//! untouched under the target format's MIME type and file extension.
//! No PDF or Word structure is generated.

mod adapter;
mod delivery;
mod errors;
mod format;

pub use adapter::{build_export, build_export_named, ExportPayload, DEFAULT_BASE_NAME};
pub use delivery::{Delivery, DirectoryDelivery, MemoryDelivery};
pub use errors::{DeliveryError, ExportError};
pub use format::ExportFormat;
