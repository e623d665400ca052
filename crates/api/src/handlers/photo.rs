//! Handlers for the `/inventory/{id}/photo` routes.

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_core::photo::validate_upload;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::response::MutationResponse;
use crate::state::AppState;

/// GET /inventory/{id}/photo
///
/// Raw photo bytes. The content type is fixed to `image/jpeg` regardless of
/// the stored format, which is the contract this service has always had.
/// 404 when the record is missing, has no photo, or the file is absent
/// (an orphaned reference degrades to 404, it is never surfaced elsewhere).
pub async fn get_photo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id);
    let records = state.records.load_all().await;

    let record = records
        .iter()
        .find(|r| r.id == id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))?;

    let filename = record
        .photo_filename
        .as_ref()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }))?;

    let bytes = state
        .photos
        .read(filename)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }))?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes))
}

/// PUT /inventory/{id}/photo
///
/// Multipart form with a required `photo` file. The old photo file is
/// deleted best-effort before the new filename is stored.
pub async fn replace_photo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<MutationResponse>> {
    let id = parse_id(&raw_id);
    let mut photo: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("photo") {
            let filename = field.file_name().unwrap_or("").to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            if !filename.is_empty() || !data.is_empty() {
                photo = Some((filename, content_type, data.to_vec()));
            }
        }
    }

    let (filename, content_type, data) =
        photo.ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;

    validate_upload(content_type.as_deref(), data.len())?;

    let mut records = state.records.load_all().await;

    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))?;

    if let Some(old) = record.photo_filename.take() {
        state.photos.try_delete(&old).await;
    }

    let stored = state.photos.save(&data, &filename).await?;
    record.photo_filename = Some(stored);
    let updated = record.clone();

    state.records.save_all(&records).await?;

    tracing::info!(id, "Photo replaced");

    Ok(Json(MutationResponse {
        message: "Photo updated",
        inventory: updated.into(),
    }))
}
