//! Error types for the SDK.

use thiserror::Error;

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Errors that can occur while building or delivering a payload.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The HTTP client could not be constructed.
    #[error("failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// The request never produced a response (DNS, connect, TLS, timeout)
    /// or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    ///
    /// Only produced by [`ApiResponse::error_for_status`](crate::ApiResponse::error_for_status).
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Payload serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SdkError {
    /// Returns true if the request failed before any response arrived.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Transport(_) | SdkError::ClientInit(_))
    }

    /// Returns the HTTP status for [`SdkError::Status`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        SdkError::Transport(error_chain(&err))
    }
}

/// Joins an error and its sources, since reqwest keeps the useful part
/// ("connection refused", "dns error") in the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
