//! Whole-file store for the inventory record collection.

use std::path::{Path, PathBuf};

use stockroom_core::types::DbId;

use crate::models::InventoryRecord;
use crate::StoreError;

/// Owns the single JSON file holding every inventory record.
///
/// Handlers hold only transient copies of the collection for the duration of
/// one request; this store's file is the authoritative state. `load_all` and
/// `save_all` are not coordinated -- two concurrent read-modify-write cycles
/// can clobber each other, which is the accepted contract of this service.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// A store backed by the given collection file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the collection file (mainly for logging and tests).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection.
    ///
    /// A missing or unparsable file reads as an empty collection rather than
    /// an error, so a corrupt file silently resets the visible inventory.
    pub async fn load_all(&self) -> Vec<InventoryRecord> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %err, "Failed to read record file, treating as empty");
                }
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Record file unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the file.
    pub async fn save_all(&self, records: &[InventoryRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Next id for a new record: `1` on an empty collection, else `max + 1`.
    /// Ids are never reused after deletion. Not race-free under concurrent
    /// registrations.
    pub fn next_id(records: &[InventoryRecord]) -> DbId {
        records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
