use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Maps any store failure to the opaque 500 after logging the detail locally.
///
/// Clients never see the underlying error text.
pub fn internal_error(err: anyhow::Error) -> Response {
    eprintln!("store error: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
