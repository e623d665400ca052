//! Photo upload rules: size/content-type filters and filename generation.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum accepted photo upload size (5 MiB).
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Rejection message for oversized uploads.
pub const FILE_TOO_LARGE: &str = "File too large";

// ---------------------------------------------------------------------------
// Upload validation
// ---------------------------------------------------------------------------

/// Validate an uploaded photo's declared content type and byte length.
///
/// Accepts any `image/*` content type. A missing content type is rejected the
/// same way as a non-image one. Actual bytes are never sniffed -- the declared
/// type is trusted, matching the upload filter this service has always had.
pub fn validate_upload(content_type: Option<&str>, len: usize) -> Result<(), CoreError> {
    match content_type {
        Some(ct) if ct.starts_with("image/") => {}
        other => {
            return Err(CoreError::Validation(format!(
                "Only image uploads are accepted (got content type '{}')",
                other.unwrap_or("none")
            )));
        }
    }

    if len > MAX_PHOTO_BYTES {
        return Err(CoreError::Validation(FILE_TOO_LARGE.to_string()));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Filename generation
// ---------------------------------------------------------------------------

/// Generate a photo filename: `<millisecond-timestamp>-<random-u32><ext>`.
///
/// The extension (including the dot) is carried over from the original upload
/// filename; an upload without an extension produces a bare stem. Collisions
/// are astronomically unlikely and are not checked.
pub fn generate_filename(original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let nonce: u32 = rand::random();
    let ext = extension_of(original_name);
    format!("{millis}-{nonce}{ext}")
}

/// Extract the extension of `name` including the leading dot, lowercased.
/// Returns an empty string when there is none.
fn extension_of(name: &str) -> String {
    std::path::Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
