//! Request extractors.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::domain::{AppError, ValidationError};

/// `axum::Json` with rejections folded into the application error type,
/// so malformed bodies and unparseable dates produce the same JSON
/// error shape as every other failure.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::Validation(ValidationError::Malformed(rejection.body_text()))
            })?;
        Ok(AppJson(value))
    }
}
