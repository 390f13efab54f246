use std::time::Duration;

use crate::constants::{
    CORS_ALLOWED_ORIGINS, DEFAULT_PASSWORD_MIN_LENGTH, MAX_BODY_SIZE_BYTES, PASSWORD_MIN_LENGTH,
    RATE_LIMIT_BURST, RATE_LIMIT_PER_MINUTE, REQUEST_TIMEOUT_SECS, SELF_REGISTER,
    SHUTDOWN_TIMEOUT_SECS,
};

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    pub rate_limit_per_minute: u32,
    pub rate_limit_burst: u32,
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub shutdown_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            rate_limit_per_minute: 100,
            rate_limit_burst: 150,
            request_timeout: Duration::from_secs(30),
            max_body_size: 1_048_576, // 1MB
            shutdown_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_env() -> Self {
        let default = Self::default();

        let rate_limit_per_minute = env_parse::<u32>(RATE_LIMIT_PER_MINUTE)
            .filter(|v| *v > 0)
            .unwrap_or(default.rate_limit_per_minute);

        let rate_limit_burst =
            env_parse(RATE_LIMIT_BURST).unwrap_or(default.rate_limit_burst);

        let request_timeout = env_parse(REQUEST_TIMEOUT_SECS)
            .map(Duration::from_secs)
            .unwrap_or(default.request_timeout);

        let max_body_size = env_parse(MAX_BODY_SIZE_BYTES).unwrap_or(default.max_body_size);

        let shutdown_timeout = env_parse(SHUTDOWN_TIMEOUT_SECS)
            .map(Duration::from_secs)
            .unwrap_or(default.shutdown_timeout);

        let cors_allowed_origins = std::env::var(CORS_ALLOWED_ORIGINS)
            .ok()
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or(default.cors_allowed_origins);

        Self {
            rate_limit_per_minute,
            rate_limit_burst,
            request_timeout,
            max_body_size,
            shutdown_timeout,
            cors_allowed_origins,
        }
    }
}

/// Minimum-length rule applied to every new secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_PASSWORD_MIN_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn accepts(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
    }
}

/// Request-handling knobs shared by the handlers.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub self_register: bool,
    pub password_policy: PasswordPolicy,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let self_register = std::env::var(SELF_REGISTER)
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let min_length =
            env_parse(PASSWORD_MIN_LENGTH).unwrap_or(DEFAULT_PASSWORD_MIN_LENGTH);

        Self {
            self_register,
            password_policy: PasswordPolicy { min_length },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_policy_counts_characters() {
        let policy = PasswordPolicy { min_length: 8 };
        assert!(policy.accepts("12345678"));
        assert!(!policy.accepts("1234567"));
        assert!(policy.accepts("ñññññññń"));
    }
}
