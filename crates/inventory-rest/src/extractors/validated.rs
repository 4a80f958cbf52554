//! JSON body extractors.
//!
//! `JsonBody<T>` deserializes the body and reports malformed JSON as
//! 400 Bad Request. `ValidatedJson<T>` additionally runs `validator` rules and
//! returns 400 with field-level error details.

use crate::responses::error_response;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use inventory_core::{field_errors, ErrorResponse};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};

/// JSON extractor whose rejections render the API error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T: DeserializeOwned> JsonBody<T> {
    /// Parses a body that has already been buffered.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, JsonBodyRejection> {
        Json::<T>::from_bytes(bytes)
            .map(|Json(value)| Self(value))
            .map_err(JsonBodyRejection::JsonError)
    }
}

/// JSON extractor that automatically validates the deserialized value.
///
/// # Example
///
/// ```ignore
/// use inventory_rest::extractors::ValidatedJson;
/// use inventory_service::ItemRequest;
///
/// async fn create_item(ValidatedJson(request): ValidatedJson<ItemRequest>) {
///     // request is guaranteed to be valid here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for JSON body extraction.
#[derive(Debug)]
pub enum JsonBodyRejection {
    /// JSON parsing/deserialization error.
    JsonError(JsonRejection),
    /// Validation error with field-level details.
    ValidationError(ValidationErrors),
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let body = match self {
            Self::JsonError(rejection) => {
                debug!("Rejected request body: {}", rejection.body_text());
                ErrorResponse {
                    error: format!("Invalid JSON: {}", rejection.body_text()),
                    code: "INVALID_JSON".to_string(),
                    details: None,
                }
            }
            Self::ValidationError(errors) => ErrorResponse {
                error: "Request validation failed".to_string(),
                code: "VALIDATION_ERROR".to_string(),
                details: None,
            }
            .with_details(field_errors(&errors)),
        };

        error_response(StatusCode::BAD_REQUEST, body)
    }
}

impl From<JsonBodyRejection> for Response {
    fn from(rejection: JsonBodyRejection) -> Self {
        rejection.into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection::JsonError)?;

        Ok(JsonBody(value))
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;

        value.validate().map_err(JsonBodyRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}
