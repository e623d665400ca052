pub mod health;
pub mod inventory;
pub mod photo;
pub mod search;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use stockroom_core::types::DbId;

/// Parse a path or body identifier leniently.
///
/// A non-numeric identifier parses to `0`, which matches no stored record,
/// so the caller's lookup yields a 404 rather than a format error.
pub(crate) fn parse_id(raw: &str) -> DbId {
    raw.trim().parse().unwrap_or(0)
}

/// Fallback for any unmatched path or method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn numeric_id_parses() {
        assert_eq!(parse_id("42"), 42);
        assert_eq!(parse_id(" 7 "), 7);
    }

    #[test]
    fn non_numeric_id_matches_nothing() {
        assert_eq!(parse_id("abc"), 0);
        assert_eq!(parse_id(""), 0);
        assert_eq!(parse_id("1.5"), 0);
    }
}
