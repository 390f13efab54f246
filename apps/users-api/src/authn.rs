use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use users_lib::{Authenticator, ErrorKind, Session};

use crate::error::ApiError;

/// Raw bearer token from the `Authorization` header. Empty when the header
/// is absent or not a bearer credential; rejection is left to
/// [`authenticate`] so that parsing errors surface first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(BearerToken(extract_bearer_token(&parts.headers)))
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer)
        .unwrap_or_default()
}

fn parse_bearer(value: &str) -> Option<String> {
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

/// Exchanges a token for a session. An empty token never reaches the
/// authenticator.
pub async fn authenticate(authn: &dyn Authenticator, token: &str) -> Result<Session, ApiError> {
    if token.is_empty() {
        return Err(ApiError::BearerToken);
    }

    authn.authenticate(token).await.map_err(|err| match err.kind() {
        ErrorKind::Internal => {
            tracing::error!(error = ?err, "authenticator unavailable");
            ApiError::Internal("authentication service unavailable".to_string())
        }
        _ => {
            tracing::debug!(error = %err, "token rejected");
            ApiError::Authentication(err.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc")), "abc");
        assert_eq!(extract_bearer_token(&headers("bearer  abc ")), "abc");
    }

    #[test]
    fn non_bearer_credentials_yield_empty_token() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), "");
        assert_eq!(extract_bearer_token(&headers("Basic dXNlcjpwYXNz")), "");
        assert_eq!(extract_bearer_token(&headers("Bearer")), "");
        assert_eq!(extract_bearer_token(&headers("Bearer    ")), "");
    }
}
