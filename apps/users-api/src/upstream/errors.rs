use reqwest::StatusCode;
use users_lib::{ErrorKind, ServiceError};

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Transport failure or timeout
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned {status}: {message}")]
    Status {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    #[error("invalid response from upstream: {0}")]
    InvalidResponse(String),

    #[error("invalid upstream base url: {0}")]
    InvalidBaseUrl(String),
}

fn status_kind(status: StatusCode, code: Option<&str>) -> ErrorKind {
    match (status, code) {
        (StatusCode::BAD_REQUEST, Some("invalid_status")) => ErrorKind::InvalidStatus,
        (StatusCode::BAD_REQUEST, Some("invalid_role")) => ErrorKind::InvalidRole,
        (StatusCode::BAD_REQUEST, _) => ErrorKind::Validation,
        (StatusCode::UNAUTHORIZED, _) => ErrorKind::Authentication,
        (StatusCode::FORBIDDEN, _) => ErrorKind::Authorization,
        (StatusCode::NOT_FOUND, _) => ErrorKind::NotFound,
        (StatusCode::CONFLICT, _) => ErrorKind::Conflict,
        _ => ErrorKind::Internal,
    }
}

impl From<UpstreamError> for ServiceError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status {
                status,
                code,
                message,
            } => match status_kind(status, code.as_deref()) {
                ErrorKind::Internal => ServiceError::from_kind(
                    ErrorKind::Internal,
                    format!("upstream returned {status}: {message}"),
                ),
                kind => ServiceError::from_kind(kind, message),
            },
            other => ServiceError::Internal(anyhow::Error::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: StatusCode, code: Option<&str>) -> ServiceError {
        ServiceError::from(UpstreamError::Status {
            status,
            code: code.map(str::to_string),
            message: "rejected".to_string(),
        })
    }

    #[test]
    fn maps_statuses_to_kinds() {
        assert_eq!(status(StatusCode::BAD_REQUEST, None).kind(), ErrorKind::Validation);
        assert_eq!(status(StatusCode::UNAUTHORIZED, None).kind(), ErrorKind::Authentication);
        assert_eq!(status(StatusCode::FORBIDDEN, None).kind(), ErrorKind::Authorization);
        assert_eq!(status(StatusCode::NOT_FOUND, None).kind(), ErrorKind::NotFound);
        assert_eq!(status(StatusCode::CONFLICT, None).kind(), ErrorKind::Conflict);
        assert_eq!(status(StatusCode::BAD_GATEWAY, None).kind(), ErrorKind::Internal);
    }

    #[test]
    fn error_code_refines_bad_request() {
        assert_eq!(
            status(StatusCode::BAD_REQUEST, Some("invalid_role")).kind(),
            ErrorKind::InvalidRole
        );
        assert_eq!(
            status(StatusCode::BAD_REQUEST, Some("invalid_status")).kind(),
            ErrorKind::InvalidStatus
        );
    }

    #[test]
    fn bad_request_keeps_upstream_message() {
        match status(StatusCode::BAD_REQUEST, None) {
            ServiceError::Validation(message) => assert_eq!(message, "rejected"),
            other => panic!("expected validation error, got {other:?}"),
        }
        let err = status(StatusCode::SERVICE_UNAVAILABLE, None);
        assert!(err.to_string().contains("503"), "{err}");
    }

    #[test]
    fn invalid_response_is_internal() {
        let err = ServiceError::from(UpstreamError::InvalidResponse("eof".to_string()));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
