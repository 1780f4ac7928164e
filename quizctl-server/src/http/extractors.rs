//! Custom Axum extractors
//!
//! Wrap the stock extractors so their rejections become [`ApiError`]s with
//! the status codes the API documents.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use quizctl_core::models::{Page, PageParams};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract a question id from the path; anything but a non-negative integer is a 400.
pub struct QuestionId(pub i64);

impl<S> FromRequestParts<S> for QuestionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: format!("invalid question id: {}", e.body_text()),
            })?;

        if id < 0 {
            return Err(ApiError::BadRequest {
                message: format!("invalid question id: {} is negative", id),
            });
        }

        Ok(Self(id))
    }
}

/// Extract `last_id` / `size` query parameters; malformed values are a 400.
pub struct PageQuery(pub Page);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PageParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: format!("invalid query parameters: {}", e.body_text()),
            })?;

        Ok(Self(Page::from(params)))
    }
}

/// JSON request body; any parse failure is a 422.
///
/// The `Content-Type` header is not checked, so `curl -d` style form posts work.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody {
                message: format!("unable to read request body: {}", e.body_text()),
            })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidBody {
            message: format!("unable to parse question object: {}", e),
        })?;

        Ok(Self(value))
    }
}
