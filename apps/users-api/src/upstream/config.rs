use std::time::Duration;

use crate::constants::{AUTH_SERVICE_URL, GROUPS_SERVICE_URL, UPSTREAM_TIMEOUT_SECS, USERS_SERVICE_URL};

const DEFAULT_USERS_SERVICE_URL: &str = "http://localhost:9003";
const DEFAULT_GROUPS_SERVICE_URL: &str = "http://localhost:9004";
const DEFAULT_AUTH_SERVICE_URL: &str = "http://localhost:9001";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub users_url: String,
    pub groups_url: String,
    pub auth_url: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        let users_url = std::env::var(USERS_SERVICE_URL)
            .unwrap_or_else(|_| DEFAULT_USERS_SERVICE_URL.to_string());
        let groups_url = std::env::var(GROUPS_SERVICE_URL)
            .unwrap_or_else(|_| DEFAULT_GROUPS_SERVICE_URL.to_string());
        let auth_url = std::env::var(AUTH_SERVICE_URL)
            .unwrap_or_else(|_| DEFAULT_AUTH_SERVICE_URL.to_string());
        let timeout_secs: u64 = std::env::var(UPSTREAM_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            users_url: users_url.trim_end_matches('/').to_string(),
            groups_url: groups_url.trim_end_matches('/').to_string(),
            auth_url: auth_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
