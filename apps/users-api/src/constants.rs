pub const SERVICE: &str = "users-api";
pub const ENV: &str = "ENV";

pub const LOCAL_ENV: &str = "local";

pub const USERS_API_PORT: &str = "USERS_API_PORT";
pub const DEFAULT_PORT: u16 = 9002;

// Request handling
pub const SELF_REGISTER: &str = "SELF_REGISTER";
pub const PASSWORD_MIN_LENGTH: &str = "PASSWORD_MIN_LENGTH";
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
pub const MIN_SEARCH_NAME_LENGTH: usize = 3;
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const PARENT_GROUP_RELATION: &str = "parent_group";

// Upstream services
pub const USERS_SERVICE_URL: &str = "USERS_SERVICE_URL";
pub const GROUPS_SERVICE_URL: &str = "GROUPS_SERVICE_URL";
pub const AUTH_SERVICE_URL: &str = "AUTH_SERVICE_URL";
pub const UPSTREAM_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";

// Middleware configuration
pub const RATE_LIMIT_PER_MINUTE: &str = "RATE_LIMIT_PER_MINUTE";
pub const RATE_LIMIT_BURST: &str = "RATE_LIMIT_BURST";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const MAX_BODY_SIZE_BYTES: &str = "MAX_BODY_SIZE_BYTES";
pub const SHUTDOWN_TIMEOUT_SECS: &str = "SHUTDOWN_TIMEOUT_SECS";
