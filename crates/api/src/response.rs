//! Shared response shapes for API handlers.
//!
//! Mutation endpoints reply with `{ "message": ..., "inventory": ... }`;
//! reads reply with the record shape directly. Both carry the derived
//! `photo_url`, which is computed per response and never persisted.

use serde::Serialize;
use stockroom_store::models::InventoryRecord;

/// A record as it appears in responses: all persisted fields plus the
/// derived `photo_url` (`null` iff the record has no photo).
#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    #[serde(flatten)]
    pub record: InventoryRecord,
    pub photo_url: Option<String>,
}

impl From<InventoryRecord> for InventoryResponse {
    fn from(record: InventoryRecord) -> Self {
        let photo_url = photo_url_for(&record);
        Self { record, photo_url }
    }
}

/// Derived photo URL for a record, when it has a photo.
pub fn photo_url_for(record: &InventoryRecord) -> Option<String> {
    record
        .photo_filename
        .as_ref()
        .map(|_| format!("/inventory/{}/photo", record.id))
}

/// Standard `{ "message": ..., "inventory": ... }` envelope for mutations.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub message: &'static str,
    pub inventory: InventoryResponse,
}
