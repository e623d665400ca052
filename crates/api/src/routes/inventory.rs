//! Route definitions for the inventory CRUD surface.
//!
//! ```text
//! POST   /register              -> register (multipart)
//! GET    /inventory             -> list
//! GET    /inventory/{id}        -> get_by_id
//! PUT    /inventory/{id}        -> update
//! DELETE /inventory/{id}        -> delete
//! GET    /inventory/{id}/photo  -> get_photo
//! PUT    /inventory/{id}/photo  -> replace_photo (multipart)
//! POST   /search                -> search (form-encoded)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{inventory, photo, search};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(inventory::register))
        .route("/inventory", get(inventory::list))
        .route(
            "/inventory/{id}",
            get(inventory::get_by_id)
                .put(inventory::update)
                .delete(inventory::delete),
        )
        .route(
            "/inventory/{id}/photo",
            get(photo::get_photo).put(photo::replace_photo),
        )
        .route("/search", post(search::search))
}
