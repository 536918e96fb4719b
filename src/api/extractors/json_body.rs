//! JSON body extractor with application-level rejections.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an [`AppError::MalformedJson`].
///
/// Field rules are not checked here; the service validates before any
/// store access.
///
/// # Example
///
/// ```rust,ignore
/// use user_records_api::api::extractors::JsonBody;
/// use user_records_api::domain::UserInput;
///
/// async fn create_user(JsonBody(input): JsonBody<UserInput>) {
///     // input parsed, not yet validated
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::MalformedJson(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
