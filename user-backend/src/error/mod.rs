use user_transport::errors::TransportError;

use crate::response::ApiErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Backend error: {0}")]
    Backend(BackendError),
    #[error("Transport error: `{0}`")]
    Transport(TransportError),
    #[error("Utils error: `{0}`")]
    Utils(#[from] user_utils::error::Error),
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_network_error(),
            Error::Utils(e) => e.is_network_error(),
            _ => false,
        }
    }

    /// The service answered, but with a non-2xx status.
    pub fn is_backend_error(&self) -> bool {
        matches!(self, Error::Backend(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Backend(e) => Some(e.status),
            _ => None,
        }
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NonSuccess { status, body } => {
                Error::Backend(BackendError::new(status, body))
            }
            other => Error::Transport(other),
        }
    }
}

/// A response that arrived with a non-2xx status.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendError {
    pub status: u16,
    pub body: String,
    pub detail: Option<ApiErrorBody>,
}

impl BackendError {
    pub fn new(status: u16, body: String) -> Self {
        let detail = ApiErrorBody::parse(&body);
        Self {
            status,
            body,
            detail,
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(ApiErrorBody {
                message: Some(message),
                details: Some(details),
                ..
            }) if !details.is_empty() => {
                write!(f, "status {}: {} ({})", self.status, message, details)
            }
            Some(ApiErrorBody {
                message: Some(message),
                ..
            }) => write!(f, "status {}: {}", self.status, message),
            _ => write!(f, "status {}: {}", self.status, self.body),
        }
    }
}
