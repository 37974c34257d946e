//! Error types for portal operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all portal crates. Uses `thiserror` for derive macros.
//!
//! Permission denial is deliberately absent from this enum: a denied
//! navigation is an ordinary `PermissionDecision` value, not an error.

use thiserror::Error;

/// Errors that can occur in portal operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The session provider could not authenticate or reach the session.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The remote API answered with a non-zero envelope code.
    #[error("API error {code}: {message}")]
    Api {
        /// Business code reported by the API.
        code: i64,
        /// Message reported by the API.
        message: String,
    },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Unexpected failure while routing (not a permission denial).
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an authentication error.
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create an API envelope error.
    pub fn api(code: i64, msg: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: msg.into(),
        }
    }

    /// Create an HTTP transport error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create a navigation error.
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Returns `true` for errors raised by the session provider.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Returns `true` for errors that must be caught at the router boundary.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Navigation(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias using the portal's Error type.
pub type Result<T> = std::result::Result<T, Error>;
