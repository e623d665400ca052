//! File store for uploaded photos.

use std::path::{Path, PathBuf};

use stockroom_core::photo;

use crate::StoreError;

/// Owns the photo files in the configured directory.
///
/// Records reference photos by generated filename only; nothing here knows
/// about the record collection.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    dir: PathBuf,
}

impl PhotoStore {
    /// A store writing into the given directory (created at startup).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the photo files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write uploaded bytes under a freshly generated filename and return it.
    ///
    /// The filename carries the original upload's extension so the stored
    /// file keeps a recognizable suffix.
    pub async fn save(&self, bytes: &[u8], original_name: &str) -> Result<String, StoreError> {
        let filename = photo::generate_filename(original_name);
        tokio::fs::write(self.dir.join(&filename), bytes).await?;
        tracing::debug!(filename = %filename, size = bytes.len(), "Photo stored");
        Ok(filename)
    }

    /// Read a previously stored photo. `None` when the file is absent,
    /// which happens when a record carries an orphaned filename.
    pub async fn read(&self, filename: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(self.dir.join(filename)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Best-effort delete: an already-absent file is not an error, and any
    /// other failure is logged rather than surfaced.
    pub async fn try_delete(&self, filename: &str) {
        if let Err(err) = tokio::fs::remove_file(self.dir.join(filename)).await {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(filename = %filename, error = %err, "Failed to delete photo file");
            }
        }
    }

    /// Whether a stored filename currently exists on disk (test support).
    pub async fn exists(&self, filename: &str) -> bool {
        tokio::fs::try_exists(self.dir.join(filename))
            .await
            .unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
