use std::time::Duration;

use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use super::errors::UpstreamError;
use crate::error::ErrorResponse;

/// JSON-over-HTTP client for one upstream service.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: Url,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let base_url = base_url.into();
        let base_url = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or(UpstreamError::InvalidBaseUrl(base_url))?;
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    /// Appends `segments` to the base URL. Each segment is percent-encoded,
    /// so ids taken from the request path cannot leave their segment.
    pub fn url(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// POSTs `body` and decodes the JSON answer.
    pub async fn call<B, R>(&self, segments: &[&str], token: Option<&str>, body: &B) -> Result<R, UpstreamError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(segments, token, body)
            .await?
            .json::<R>()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }

    /// POSTs `body` and ignores the answer body.
    pub async fn call_empty<B>(&self, segments: &[&str], token: Option<&str>, body: &B) -> Result<(), UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        self.send(segments, token, body).await.map(|_| ())
    }

    async fn send<B>(&self, segments: &[&str], token: Option<&str>, body: &B) -> Result<Response, UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let mut request = self.http.post(url.clone()).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) => (Some(body.error), body.message.unwrap_or_default()),
            Err(_) => (None, text),
        };
        tracing::debug!(%url, %status, ?code, "upstream call rejected");

        Err(UpstreamError::Status {
            status,
            code,
            message,
        })
    }
}
