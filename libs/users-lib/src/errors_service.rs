/// Coarse category of a collaborator failure. The HTTP layer picks the
/// transport status from this alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Authentication,
    Authorization,
    Conflict,
    NotFound,
    InvalidStatus,
    InvalidRole,
    Internal,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("malformed entity specification: {0}")]
    Validation(String),

    #[error("failed to perform authentication over the entity")]
    Authentication,

    #[error("failed to perform authorization over the entity")]
    Authorization,

    #[error("entity already exists")]
    Conflict,

    #[error("entity not found")]
    NotFound,

    #[error("invalid client status")]
    InvalidStatus,

    #[error("invalid client role")]
    InvalidRole,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::Validation,
            ServiceError::Authentication => ErrorKind::Authentication,
            ServiceError::Authorization => ErrorKind::Authorization,
            ServiceError::Conflict => ErrorKind::Conflict,
            ServiceError::NotFound => ErrorKind::NotFound,
            ServiceError::InvalidStatus => ErrorKind::InvalidStatus,
            ServiceError::InvalidRole => ErrorKind::InvalidRole,
            ServiceError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Rebuilds an error from its kind, as reported by a remote collaborator.
    pub fn from_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::Validation => ServiceError::Validation(message),
            ErrorKind::Authentication => ServiceError::Authentication,
            ErrorKind::Authorization => ServiceError::Authorization,
            ErrorKind::Conflict => ServiceError::Conflict,
            ErrorKind::NotFound => ServiceError::NotFound,
            ErrorKind::InvalidStatus => ServiceError::InvalidStatus,
            ErrorKind::InvalidRole => ServiceError::InvalidRole,
            ErrorKind::Internal => ServiceError::Internal(anyhow::anyhow!(message)),
        }
    }
}
