use crate::prompt::ValidationError;
use crate::types::ErrorBody;
use crate::upstream::UpstreamError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("not found: {0}")]
    NotFound(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.0)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(UpstreamError::BadResponse { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller. Upstream details stay in the server log.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::Configuration(msg) | ApiError::NotFound(msg) => {
                msg.clone()
            }
            ApiError::Upstream(UpstreamError::BadResponse { .. }) => {
                "Failed to get a response from the language model.".to_string()
            }
            ApiError::Upstream(_) => "An internal server error occurred.".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Validation(_) | ApiError::NotFound(_) => warn!("Rejected request: {}", self),
            _ => error!("Request failed ({}): {}", status, self),
        }

        (status, Json(ErrorBody::new(self.client_message()))).into_response()
    }
}
