use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dyndns_domain::DomainError;
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
        let (status, message) = match &self.0 {
            DomainError::NotFound(_)
            | DomainError::RecordNotFound(_)
            | DomainError::HostNotFound(_)
            | DomainError::AliasNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::InvalidHost(_)
            | DomainError::InvalidAlias(_)
            | DomainError::InvalidAddress(_)
            | DomainError::InvalidDomainName(_)
            | DomainError::DomainUnsupported(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::HostAlreadyExists(_) | DomainError::UsernameTaken(_) => {
                (StatusCode::CONFLICT, self.0.to_string())
            }

            DomainError::Unauthorized => (StatusCode::UNAUTHORIZED, self.0.to_string()),

            _ => {
                error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
