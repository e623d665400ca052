//! Inventory record model and DTOs.

use serde::{Deserialize, Serialize};
use stockroom_core::types::{DbId, Timestamp};

/// One inventory record as persisted in the collection file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: DbId,
    pub inventory_name: String,
    /// Defaults to the empty string when registration omits it.
    #[serde(default)]
    pub description: String,
    /// Set on the first photo upload, only ever replaced afterwards.
    #[serde(default)]
    pub photo_filename: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for updating a record's text fields.
///
/// Absent fields leave the record untouched. An explicit empty string is not
/// the same as absent -- it overwrites.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventory {
    pub inventory_name: Option<String>,
    pub description: Option<String>,
}
