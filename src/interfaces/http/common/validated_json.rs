//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but first checks the raw
//! JSON document against the payload schema `T` declares, using the
//! `CatalogValidator` held in router state. Only a document that passes is
//! deserialized into `T`. Any failure is a 400 with a `fail` body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, FromRequest};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ApiResponse, EmptyData};
use crate::shared::types::{DomainError, DomainResult};
use crate::shared::validations::{normalize_whole_numbers, CatalogValidator};

/// A request body type with a validation profile.
pub trait PayloadSchema: DeserializeOwned {
    fn validate(validator: &CatalogValidator, payload: &Value) -> DomainResult<()>;
}

/// An extractor that validates a JSON document and then deserializes it.
///
/// ```ignore
/// async fn handler(ValidatedJson(body): ValidatedJson<AlbumRequest>) {
///     // `body` passed the album profile
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// Body missing, not JSON, or not parseable.
    JsonError(JsonRejection),
    /// Document parsed but broke a payload rule.
    ValidationError(DomainError),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let message = match self {
            Self::JsonError(rejection) => format!("Invalid JSON: {}", rejection.body_text()),
            Self::ValidationError(DomainError::Validation(msg)) => msg,
            Self::ValidationError(other) => other.to_string(),
        };
        let body = ApiResponse::<EmptyData>::fail(message);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: PayloadSchema,
    S: Send + Sync,
    CatalogValidator: FromRef<S>,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(mut value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        let validator = CatalogValidator::from_ref(state);
        T::validate(&validator, &value).map_err(ValidatedJsonRejection::ValidationError)?;
        normalize_whole_numbers(&mut value);

        let body = serde_json::from_value(value)
            .map_err(|e| ValidatedJsonRejection::ValidationError(DomainError::Validation(e.to_string())))?;

        Ok(ValidatedJson(body))
    }
}

// ── Tests ──────────────────────────────────────────────────────
