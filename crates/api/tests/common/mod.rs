//! Shared test harness: app construction against a tempdir-backed store,
//! plus request/response helpers.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use stockroom_api::config::ServerConfig;
use stockroom_api::router::build_app_router;
use stockroom_api::state::AppState;
use stockroom_store::{PhotoStore, RecordStore};

/// Boundary used by the multipart helpers below.
const BOUNDARY: &str = "test-boundary-7f93a2c4";

/// Build a test `ServerConfig` rooted at the given data directory.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_dir: data_dir.to_path_buf(),
        static_dir: data_dir.join("static"),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, backed by
/// flat-file stores under `data_dir`.
///
/// Mirrors the wiring in `main.rs` (via the shared `build_app_router`) so
/// tests exercise the production middleware stack. Creates the `photos/`
/// and `static/` directories, including the two static forms.
pub fn build_test_app(data_dir: &Path) -> Router {
    let config = test_config(data_dir);

    std::fs::create_dir_all(config.photos_dir()).unwrap();
    std::fs::create_dir_all(&config.static_dir).unwrap();
    std::fs::write(
        config.static_dir.join("RegisterForm.html"),
        "<!DOCTYPE html><form action=\"/register\"></form>",
    )
    .unwrap();
    std::fs::write(
        config.static_dir.join("SearchForm.html"),
        "<!DOCTYPE html><form action=\"/search\"></form>",
    )
    .unwrap();

    let state = AppState {
        records: RecordStore::new(config.records_path()),
        photos: PhotoStore::new(config.photos_dir()),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a POST request with a form-encoded body.
pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("Body was not JSON ({e}): {bytes:?}"))
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

/// One part of a multipart form body.
pub struct Part {
    name: &'static str,
    filename: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// A plain text field.
pub fn text_part(name: &'static str, value: &str) -> Part {
    Part {
        name,
        filename: None,
        content_type: None,
        data: value.as_bytes().to_vec(),
    }
}

/// A file field with filename, content type, and raw bytes.
pub fn file_part(name: &'static str, filename: &str, content_type: &str, data: &[u8]) -> Part {
    Part {
        name,
        filename: Some(filename.to_string()),
        content_type: Some(content_type.to_string()),
        data: data.to_vec(),
    }
}

fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(filename) = &part.filename {
            disposition.push_str(&format!("; filename=\"{filename}\""));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = &part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Send a multipart form request (POST or PUT).
pub async fn send_multipart(app: &Router, method: Method, uri: &str, parts: &[Part]) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Register a record with just a name; returns the response JSON.
pub async fn register_named(app: &Router, name: &str) -> Value {
    let response = send_multipart(
        app,
        Method::POST,
        "/register",
        &[text_part("inventory_name", name)],
    )
    .await;
    body_json(response).await
}

/// Register a record with a name and a photo; returns the response JSON.
pub async fn register_with_photo(app: &Router, name: &str, photo_bytes: &[u8]) -> Value {
    let response = send_multipart(
        app,
        Method::POST,
        "/register",
        &[
            text_part("inventory_name", name),
            file_part("photo", "upload.jpg", "image/jpeg", photo_bytes),
        ],
    )
    .await;
    body_json(response).await
}
