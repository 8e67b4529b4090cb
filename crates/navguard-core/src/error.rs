//! Shared error type across navguard crates.

use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input / malformed command.
    BadRequest,
    /// URL refused by the whitelist.
    NotAllowed,
    /// Command needs a view but none exists.
    NotInitialized,
    /// Destroy requested with no view present.
    NoView,
    /// History navigation with nothing to go to.
    NoHistory,
    /// Unsupported config version or command.
    Unsupported,
    /// The host view hierarchy reported a failure.
    HostError,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON replies.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotAllowed => "NOT_ALLOWED",
            ErrorCode::NotInitialized => "NOT_INITIALIZED",
            ErrorCode::NoView => "NO_VIEW",
            ErrorCode::NoHistory => "NO_HISTORY",
            ErrorCode::Unsupported => "UNSUPPORTED",
            ErrorCode::HostError => "HOST_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NavGuardError>;

/// Unified error type used by core and embed.
#[derive(Debug, Error)]
pub enum NavGuardError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("URL not allowed by whitelist: {0}")]
    NotAllowed(String),
    #[error("WebView not initialized")]
    NotInitialized,
    #[error("No WebView to destroy")]
    NoView,
    #[error("Cannot go {0}")]
    NoHistory(&'static str),
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error("host error: {0}")]
    Host(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl NavGuardError {
    /// Map internal error to a stable caller-facing code.
    pub fn client_code(&self) -> ErrorCode {
        match self {
            NavGuardError::BadRequest(_) => ErrorCode::BadRequest,
            NavGuardError::NotAllowed(_) => ErrorCode::NotAllowed,
            NavGuardError::NotInitialized => ErrorCode::NotInitialized,
            NavGuardError::NoView => ErrorCode::NoView,
            NavGuardError::NoHistory(_) => ErrorCode::NoHistory,
            NavGuardError::Unsupported(_) => ErrorCode::Unsupported,
            NavGuardError::Host(_) => ErrorCode::HostError,
            NavGuardError::Internal(_) => ErrorCode::Internal,
        }
    }
}
