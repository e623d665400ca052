//! Persistence for the inventory service.
//!
//! Two flat-file stores: [`records::RecordStore`] owns the single JSON file
//! holding the whole record collection, [`photos::PhotoStore`] owns the photo
//! files on disk. Every mutation is a whole-collection load and rewrite; there
//! is deliberately no locking across the read and the later write.

pub mod models;
pub mod photos;
pub mod records;

pub use photos::PhotoStore;
pub use records::RecordStore;

/// Errors surfaced by the stores.
///
/// Only writes report errors; reads of the record file degrade to an empty
/// collection instead (a corrupt or missing file resets the visible
/// inventory rather than failing requests).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
