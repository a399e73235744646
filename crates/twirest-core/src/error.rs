//! Library error handling for twirest
//!
//! Failures of the library itself (bad XML, oversized bodies, transport read
//! errors). A remote API failure is *not* one of these: it arrives as a
//! successfully decoded [`crate::ExceptionResponse`] inside the envelope.

use thiserror::Error;

/// Main library error type
#[derive(Error, Debug)]
pub enum TwirestError {
    // ==================== Codec Errors ====================
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Response body too large: {actual} bytes exceeds limit of {limit}")]
    BodyTooLarge { limit: usize, actual: usize },

    #[error("Unsupported body: {0}")]
    UnsupportedBody(&'static str),

    // ==================== Transport Errors ====================
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    Io(String),

    // ==================== Internal Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TwirestError {
    /// Returns a stable error code for log fields
    pub fn error_code(&self) -> &'static str {
        match self {
            TwirestError::Decode(_) => "decode_error",
            TwirestError::Encode(_) => "encode_error",
            TwirestError::BodyTooLarge { .. } => "body_too_large",
            TwirestError::UnsupportedBody(_) => "unsupported_body",
            TwirestError::Transport(_) => "transport_error",
            TwirestError::Io(_) => "io_error",
            TwirestError::Config(_) => "config_error",
        }
    }

    /// True for errors caused by the response content rather than the
    /// connection or local setup
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            TwirestError::Decode(_) | TwirestError::BodyTooLarge { .. }
        )
    }
}

// ==================== From implementations ====================

impl From<std::io::Error> for TwirestError {
    fn from(err: std::io::Error) -> Self {
        TwirestError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for TwirestError {
    fn from(err: config::ConfigError) -> Self {
        TwirestError::Config(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for TwirestError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TwirestError::Decode(err.to_string())
    }
}
