//! Thin HTTP boundary: routes, JSON envelopes, error-to-status mapping.
//!
//! All scraping logic lives in the library; handlers only invoke
//! [`crate::ScrapeClient`] and serialize what comes back.

pub mod handlers;
pub mod routes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::ScrapeError;
use crate::ScrapeClient;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub client: ScrapeClient,
    /// Page the `/api/images` route scrapes.
    pub images_url: String,
}

/// JSON error envelope: `{"error": "..."}` with the mapped status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<ScrapeError> for ApiError {
    fn from(err: ScrapeError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
