//! JSON body extractor that runs `validator` rules before the handler sees the value

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Deserialized and validated request body.
///
/// Malformed JSON, unknown enum names and a missing `Content-Type` answer
/// `INVALID_BODY`; failed field rules answer `VALIDATION_ERROR` with details.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejected_body)?;
        value.validate()?;
        Ok(Self(value))
    }
}

fn rejected_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection, "Rejected request body");
    ApiError::invalid_body(rejection.body_text())
}
