use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::external::ProviderError;
use crate::models::ErrorBody;

/// Failures of `GET /api/get-data`. The display text is the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Username is required")]
    Validation,
    /// Any non-success status from the provider, whatever the cause
    #[error("User not found or API error")]
    NotFound,
    #[error("Failed to fetch GitHub data")]
    Upstream,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Status(_) => ApiError::NotFound,
            ProviderError::Transport(_) | ProviderError::Decode(_) => ApiError::Upstream,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
