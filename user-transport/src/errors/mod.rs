use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("response status {status}: {body}")]
    NonSuccess { status: u16, body: String },
    #[error("Utils error: {0}")]
    Utils(#[from] user_utils::error::Error),
}

impl TransportError {
    pub fn is_network_error(&self) -> bool {
        match self {
            TransportError::Utils(e) => e.is_network_error(),
            _ => false,
        }
    }

    /// Status of the response that produced this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::NonSuccess { status, .. } => Some(*status),
            _ => None,
        }
    }
}
