use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catchall_domain::DomainError;
use serde_json::json;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = if self.0.is_transient() {
            error!(error = %self.0, "Request failed on store error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            )
        } else {
            match &self.0 {
                DomainError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
                _ => (StatusCode::BAD_REQUEST, self.0.to_string()),
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
