use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;

/// JSON error body `{"error": "<message>"}` with a status code.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Map a service failure onto the HTTP surface. Storage causes are logged
    /// by the service and replaced with `failure` here.
    pub fn from_service(e: ServiceError, failure: &'static str) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Entry not found"),
            ServiceError::Storage(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error("storage unavailable: {0}")]
    Storage(#[from] ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let e = JsonApiError::from_service(ServiceError::Validation("Title and content are required".into()), "x");
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Title and content are required");

        let e = JsonApiError::from_service(ServiceError::not_found("entry"), "x");
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message, "Entry not found");

        let e = JsonApiError::from_service(ServiceError::storage("disk on fire"), "Failed to fetch entries");
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Failed to fetch entries");
    }
}
