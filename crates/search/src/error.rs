//! Error types for the search protocol layer.
//!
//! Parsing a search query, building a search filter and encoding a `REQ`
//! message never fail. Errors only arise when constructing the strongly
//! typed filter fields from text ([`ProtocolError`]) and inside a
//! [`FilterEncoder`](crate::message::FilterEncoder) ([`EncodeError`]), where
//! the request encoder absorbs them.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// Errors raised while parsing protocol values from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The public key is not 64 hex characters.
    #[error("invalid public key '{value}': {message}")]
    InvalidPublicKey { value: String, message: String },

    /// The event kind is not an unsigned 16-bit integer.
    #[error("invalid event kind: {value}")]
    InvalidKind { value: String },

    /// The timestamp is neither unix seconds nor an RFC 3339 date-time.
    #[error("invalid timestamp: {value}")]
    InvalidTimestamp { value: String },
}

/// Errors raised while encoding a filter to text.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Custom encoder failure.
    #[error("{0}")]
    Custom(String),
}

impl From<String> for EncodeError {
    fn from(msg: String) -> Self {
        EncodeError::Custom(msg)
    }
}

impl From<&str> for EncodeError {
    fn from(msg: &str) -> Self {
        EncodeError::Custom(msg.to_string())
    }
}

/// Result type alias for protocol value parsing.
pub type Result<T> = std::result::Result<T, ProtocolError>;
