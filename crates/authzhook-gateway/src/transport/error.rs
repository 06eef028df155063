//! HTTP mapping for `AuthzError` (non-review responses).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use authzhook_core::error::AuthzError;

/// Wrapper so handlers can return `Result<_, ApiError>` with `?`.
#[derive(Debug)]
pub struct ApiError(pub AuthzError);

impl From<AuthzError> for ApiError {
    fn from(e: AuthzError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AuthzError::BadRequest(_) | AuthzError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AuthzError::UnsupportedVersion => StatusCode::BAD_REQUEST,
            AuthzError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
