//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a JSON body and status
//! code. Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use song_library_core::ValidationError;
use song_library_enrichment::EnrichmentError;
use song_library_service::ServiceError;
use song_library_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: requested song doesn't exist.
    NotFound(String),
    /// 409 Conflict: the `(group, song)` pair is already stored.
    Conflict(String),
    /// 502 Bad Gateway: the song info API failed or sent garbage.
    BadGateway(String),
    /// 504 Gateway Timeout: the song info API did not answer in time.
    GatewayTimeout(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(StorageError::Duplicate(msg)) => Self::Conflict(msg),
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} {id} not found"))
            },
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::Enrichment(ref e) if e.is_timeout() => {
                tracing::warn!(error = %e, "song info API timed out");
                Self::GatewayTimeout("song info API timed out".to_owned())
            },
            ServiceError::Enrichment(ref e) => {
                tracing::warn!(error = %e, "song info API failure");
                Self::BadGateway(enrichment_message(e))
            },
            _ => Self::Internal(err.into()),
        }
    }
}

fn enrichment_message(err: &EnrichmentError) -> String {
    match err {
        EnrichmentError::HttpStatus { code, .. } => format!("song info API returned status {code}"),
        EnrichmentError::InvalidPayload(e) => format!("song info API returned invalid data: {e}"),
        EnrichmentError::JsonParse { .. } => "song info API returned malformed JSON".to_owned(),
        _ => "song info API request failed".to_owned(),
    }
}
