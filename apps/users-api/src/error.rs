use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use users_lib::{ErrorKind, ServiceError};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Every failure a request can end with. Each variant maps to exactly one
/// status and short code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidQueryParams(String),

    #[error("missing entity id")]
    MissingId,

    #[error("password does not meet the minimum length of {0} characters")]
    PasswordFormat(usize),

    #[error("missing password")]
    MissingPass,

    #[error("empty search query")]
    EmptySearchQuery,

    #[error("search name must be at least {0} characters")]
    LenSearchQuery(usize),

    #[error("missing or invalid bearer token")]
    BearerToken,

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Authorization(String),

    #[error("unsupported content type, expected application/json")]
    UnsupportedMediaType,

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("invalid client status")]
    InvalidStatus,

    #[error("invalid client role")]
    InvalidRole,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::InvalidQueryParams(_)
            | ApiError::MissingId
            | ApiError::PasswordFormat(_)
            | ApiError::MissingPass
            | ApiError::EmptySearchQuery
            | ApiError::LenSearchQuery(_)
            | ApiError::InvalidStatus
            | ApiError::InvalidRole => StatusCode::BAD_REQUEST,
            ApiError::BearerToken | ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Authorization(_) => StatusCode::FORBIDDEN,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::InvalidQueryParams(_) => "invalid_query_params",
            ApiError::MissingId => "missing_id",
            ApiError::PasswordFormat(_) => "password_format",
            ApiError::MissingPass => "missing_password",
            ApiError::EmptySearchQuery => "empty_search_query",
            ApiError::LenSearchQuery(_) => "search_query_length",
            ApiError::BearerToken => "missing_bearer_token",
            ApiError::Authentication(_) => "authentication_failed",
            ApiError::Authorization(_) => "authorization_failed",
            ApiError::UnsupportedMediaType => "unsupported_media_type",
            ApiError::PayloadTooLarge => "payload_too_large",
            ApiError::Conflict(_) => "conflict",
            ApiError::NotFound(_) => "not_found",
            ApiError::InvalidStatus => "invalid_status",
            ApiError::InvalidRole => "invalid_role",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: Some(self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Validation => ApiError::Validation(message),
            ErrorKind::Authentication => ApiError::Authentication(message),
            ErrorKind::Authorization => ApiError::Authorization(message),
            ErrorKind::Conflict => ApiError::Conflict(message),
            ErrorKind::NotFound => ApiError::NotFound(message),
            ErrorKind::InvalidStatus => ApiError::InvalidStatus,
            ErrorKind::InvalidRole => ApiError::InvalidRole,
            ErrorKind::Internal => ApiError::Internal(message),
        }
    }
}

/// Check if environment is production-like (prod, prod01, prod02, etc.)
pub fn is_prod_like(env: &str) -> bool {
    env.to_lowercase().starts_with("prod")
}

/// Converts a collaborator error to an ApiError, logging internal errors.
/// In production, internal error details are hidden.
pub fn handle_service_error(err: ServiceError, env: &str, operation: &str) -> ApiError {
    match err.kind() {
        ErrorKind::Internal => {
            tracing::error!(env = %env, error = ?err, operation = %operation, "service error");
            if is_prod_like(env) {
                ApiError::Internal("internal server error".to_string())
            } else {
                ApiError::from(err)
            }
        }
        kind => {
            tracing::debug!(env = %env, ?kind, operation = %operation, "request rejected by service");
            ApiError::from(err)
        }
    }
}
