//! Request body extractor accepting JSON or urlencoded forms.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Deserializes the body as JSON or as `application/x-www-form-urlencoded`,
/// chosen by the `Content-Type` header.
///
/// The landing page posts forms, API clients post JSON; both reach the same
/// handler. A missing or unreadable body is reported as [`AppError::InvalidUrl`]
/// since the only field any caller sends is the URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            "application/json" => {
                let Json(payload) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::InvalidUrl(e.body_text()))?;
                Ok(Self(payload))
            }
            "application/x-www-form-urlencoded" => {
                let Form(payload) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::InvalidUrl(e.body_text()))?;
                Ok(Self(payload))
            }
            other => Err(AppError::InvalidUrl(format!(
                "unsupported content type '{other}'"
            ))),
        }
    }
}
