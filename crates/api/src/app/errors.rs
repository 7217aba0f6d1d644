use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockscout_core::DomainError;

/// Map a domain error to (status, caller-facing message).
///
/// Internal faults get a generic message; the detail goes to the log, not
/// the wire.
pub fn domain_error_parts(err: &DomainError) -> (StatusCode, String) {
    match err {
        DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        DomainError::Internal(msg) => {
            tracing::error!(error = %msg, "internal error while handling request");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
        }
    }
}

/// Failure envelope for `/search`: empty results, never partial ones.
pub fn search_failure(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "error": message.into(),
            "results": [],
        })),
    )
        .into_response()
}

/// Failure envelope for `/categories`.
pub fn categories_failure(
    status: StatusCode,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "error": message.into(),
            "categories": [],
        })),
    )
        .into_response()
}
