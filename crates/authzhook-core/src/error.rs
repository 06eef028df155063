//! Shared error type across authzhook crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / bad configuration.
    BadRequest,
    /// Access review body could not be decoded.
    MalformedRequest,
    /// Unsupported config or protocol version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::MalformedRequest => "MALFORMED_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("malformed access review: {0}")]
    MalformedRequest(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl AuthzError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            AuthzError::BadRequest(_) => ClientCode::BadRequest,
            AuthzError::MalformedRequest(_) => ClientCode::MalformedRequest,
            AuthzError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            AuthzError::Internal(_) => ClientCode::Internal,
        }
    }
}
