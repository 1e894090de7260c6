use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Request body decoded from JSON, or from an urlencoded form when the
/// content type says so. A body-less request without a content type decodes
/// as an empty JSON object. Any decoding failure is a `BadRequest`.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        match content_type {
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(value) = Form::<T>::from_request(req, state).await?;
                Ok(Self(value))
            }
            Some(_) => {
                let Json(value) = Json::<T>::from_request(req, state).await?;
                Ok(Self(value))
            }
            None => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                if bytes.is_empty() {
                    let value = serde_json::from_str("{}")
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    return Ok(Self(value));
                }
                // Still rejected for the missing JSON content type.
                let Json(value) =
                    Json::<T>::from_request(Request::new(Body::from(bytes)), state).await?;
                Ok(Self(value))
            }
        }
    }
}
