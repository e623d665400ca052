//! Handlers for the `/register` and `/inventory` routes.
//!
//! Every handler is a fresh read-modify-write cycle against the record
//! store: load the whole collection, apply one lookup or mutation, write the
//! whole collection back if it changed. Nothing is cached across requests.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_core::photo::validate_upload;
use stockroom_store::models::{InventoryRecord, UpdateInventory};
use stockroom_store::RecordStore;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::response::{InventoryResponse, MutationResponse};
use crate::state::AppState;

/// POST /register
///
/// Multipart form: `inventory_name` (required), `description` (optional),
/// `photo` (optional file, image/*, at most 5 MiB).
pub async fn register(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<MutationResponse>)> {
    let mut inventory_name: Option<String> = None;
    let mut description = String::new();
    let mut photo: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "inventory_name" => {
                inventory_name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "photo" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // A file input submitted empty arrives as an empty part.
                if !filename.is_empty() || !data.is_empty() {
                    photo = Some((filename, content_type, data.to_vec()));
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    // Validation happens before any store access.
    let inventory_name = match inventory_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(AppError::BadRequest("inventory_name is required".into())),
    };

    if let Some((_, content_type, data)) = &photo {
        validate_upload(content_type.as_deref(), data.len())?;
    }

    let mut records = state.records.load_all().await;
    let id = RecordStore::next_id(&records);

    let photo_filename = match &photo {
        Some((filename, _, data)) => Some(state.photos.save(data, filename).await?),
        None => None,
    };

    let record = InventoryRecord {
        id,
        inventory_name,
        description,
        photo_filename,
        created_at: chrono::Utc::now(),
    };

    records.push(record.clone());
    state.records.save_all(&records).await?;

    tracing::info!(id, name = %record.inventory_name, has_photo = record.photo_filename.is_some(), "Inventory registered");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            message: "Inventory registered",
            inventory: record.into(),
        }),
    ))
}

/// GET /inventory
///
/// Bare array of every record, each with its derived photo URL.
pub async fn list(State(state): State<AppState>) -> Json<Vec<InventoryResponse>> {
    let records = state.records.load_all().await;
    Json(records.into_iter().map(InventoryResponse::from).collect())
}

/// GET /inventory/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<InventoryResponse>> {
    let id = parse_id(&raw_id);
    let records = state.records.load_all().await;

    let record = records
        .into_iter()
        .find(|r| r.id == id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))?;

    Ok(Json(record.into()))
}

/// PUT /inventory/{id}
///
/// Fields present in the body overwrite the record's fields; absent fields
/// are left untouched. An explicit empty string still overwrites.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateInventory>,
) -> AppResult<Json<MutationResponse>> {
    let id = parse_id(&raw_id);
    let mut records = state.records.load_all().await;

    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inventory",
            id,
        }))?;

    if let Some(name) = input.inventory_name {
        record.inventory_name = name;
    }
    if let Some(description) = input.description {
        record.description = description;
    }
    let updated = record.clone();

    state.records.save_all(&records).await?;

    tracing::info!(id, "Inventory updated");

    Ok(Json(MutationResponse {
        message: "Inventory updated",
        inventory: updated.into(),
    }))
}

/// DELETE /inventory/{id}
///
/// Removes the record and deletes its photo file best-effort. The deleted
/// record is returned in the response envelope.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MutationResponse>> {
    let id = parse_id(&raw_id);
    let mut records = state.records.load_all().await;

    let position =
        records
            .iter()
            .position(|r| r.id == id)
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Inventory",
                id,
            }))?;

    let removed = records.remove(position);

    if let Some(filename) = &removed.photo_filename {
        state.photos.try_delete(filename).await;
    }

    state.records.save_all(&records).await?;

    tracing::info!(id, "Inventory deleted");

    Ok(Json(MutationResponse {
        message: "Inventory deleted",
        inventory: removed.into(),
    }))
}
