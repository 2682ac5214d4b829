//! Mapping of domain errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::common::{ApiResponse, EmptyData};
use crate::shared::types::DomainError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error, please try again later";

/// Handler error. Storage failures are logged in full and answered with a
/// generic message.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            DomainError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ApiResponse::<EmptyData>::fail(msg))
            }
            ref e @ (DomainError::NotFound { .. } | DomainError::MissingReference { .. }) => {
                (StatusCode::NOT_FOUND, ApiResponse::fail(e.to_string()))
            }
            DomainError::Storage(ref detail) => {
                error!(error = %detail, "Request failed with storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error(INTERNAL_ERROR_MESSAGE),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
