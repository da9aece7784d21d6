//! Error types shared across handlers, store and relay
//!
//! Every fallible operation returns [`Error`]; the `IntoResponse` impl maps
//! each variant to an HTTP status and a JSON error body so handlers can
//! propagate with `?` and still produce well-formed responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Upstream video API call failed (connect error, non-2xx status or
    /// an undecodable body)
    #[error("upstream video API request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Requested playlist does not exist in the document
    #[error("playlist not found")]
    PlaylistNotFound,

    /// Reading or writing the playlist document failed
    #[error("playlist document I/O failed: {0}")]
    Persistence(#[from] std::io::Error),

    /// Playlist document contained (or would produce) invalid JSON
    #[error("playlist document is not valid JSON: {0}")]
    Document(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Error::PlaylistNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Playlist not found" }),
            ),
            Error::Upstream(e) => {
                tracing::error!("upstream video API error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "Upstream video API unavailable" }),
                )
            }
            Error::Persistence(e) => {
                tracing::error!("playlist document I/O error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            Error::Document(e) => {
                tracing::error!("playlist document JSON error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
