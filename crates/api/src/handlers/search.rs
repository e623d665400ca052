//! Handler for the `/search` route.

use axum::extract::State;
use axum::{Form, Json};
use serde::Deserialize;
use stockroom_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::response::InventoryResponse;
use crate::state::AppState;

/// Form-encoded body of `POST /search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub id: Option<String>,
    /// The literal string `"true"` requests the photo-reference marker;
    /// any other value (or absence) leaves the description untouched.
    pub has_photo: Option<String>,
}

/// POST /search
///
/// Same response shape as `GET /inventory/{id}`. When `has_photo` is
/// `"true"` and the record has a photo, a photo-reference marker is appended
/// to the description in the response only -- the persisted record is never
/// modified by a search.
pub async fn search(
    State(state): State<AppState>,
    Form(input): Form<SearchRequest>,
) -> AppResult<Json<InventoryResponse>> {
    let raw_id = input
        .id
        .ok_or_else(|| AppError::BadRequest("id is required".into()))?;
    let id = parse_id(&raw_id);

    let records = state.records.load_all().await;

    let record = records
        .into_iter()
        .find(|r| r.id == id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))?;

    let mut response = InventoryResponse::from(record);
    if input.has_photo.as_deref() == Some("true") {
        if let Some(filename) = &response.record.photo_filename {
            response.record.description = format!(
                "{} [photo attached: {filename}]",
                response.record.description
            );
        }
    }

    Ok(Json(response))
}
