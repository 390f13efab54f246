use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
};
use serde::de::DeserializeOwned;

use crate::constants::JSON_CONTENT_TYPE;
use crate::error::ApiError;

/// How strictly a route enforces the JSON media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTypePolicy {
    /// Header must be present and JSON.
    Required,
    /// Header may be omitted, but if sent it must be JSON.
    IfPresent,
}

pub fn check_content_type(headers: &HeaderMap, policy: ContentTypePolicy) -> Result<(), ApiError> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return match policy {
            ContentTypePolicy::Required => Err(ApiError::UnsupportedMediaType),
            ContentTypePolicy::IfPresent => Ok(()),
        };
    };

    let media_type = value
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if media_type.eq_ignore_ascii_case(JSON_CONTENT_TYPE) {
        Ok(())
    } else {
        Err(ApiError::UnsupportedMediaType)
    }
}

pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "malformed request body");
        ApiError::Validation(format!("malformed request body: {e}"))
    })
}

fn body_read_error(rejection: BytesRejection) -> ApiError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
        _ => ApiError::Validation(format!("failed to read request body: {}", rejection.body_text())),
    }
}

async fn decode_request<T, S>(
    req: Request,
    state: &S,
    policy: ContentTypePolicy,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    check_content_type(req.headers(), policy)?;

    let body = Bytes::from_request(req, state)
        .await
        .map_err(body_read_error)?;

    decode_json(&body)
}

/// JSON body that must be declared as `application/json`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        decode_request(req, state, ContentTypePolicy::Required)
            .await
            .map(JsonBody)
    }
}

/// JSON body for relation routes, whose callers may omit the content type.
pub struct RelationBody<T>(pub T);

impl<S, T> FromRequest<S> for RelationBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        decode_request(req, state, ContentTypePolicy::IfPresent)
            .await
            .map(RelationBody)
    }
}
