//! Custom Axum extractors
//!
//! Rejections from the stock extractors are turned into [`ApiError`] so every
//! failure shares the `{"error": ...}` body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body whose decode failures count as invalid input (400)
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}

/// Extract a contact id from the path.
///
/// A non-integer id can never match a row, so it is reported as not found.
pub struct ContactId(pub i64);

impl<S> FromRequestParts<S> for ContactId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "contact",
                id: String::new(),
            })?;

        let id = raw.trim().parse::<i64>().map_err(|_| ApiError::NotFound {
            resource: "contact",
            id: raw.clone(),
        })?;

        Ok(Self(id))
    }
}
