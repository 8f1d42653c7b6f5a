use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ruta_directions::error::DirectionsError;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

impl ApiError {
    /// Maps a directions failure, prefixing server side failures with the
    /// message shown to riders.
    pub fn from_directions(err: DirectionsError, context: &str) -> Self {
        if err.is_invalid_input() {
            return ApiError::BadRequest(err.to_string());
        }

        error!("{}: {}", context, err);
        ApiError::InternalServerError(format!("{}: {}", context, err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
