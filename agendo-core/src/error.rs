//! Error types for the agendo ecosystem.

use thiserror::Error;

/// Errors that can occur in agendo operations.
#[derive(Error, Debug)]
pub enum AgendoError {
    #[error("Not authenticated: no active session")]
    Unauthenticated,

    /// Transport-level or server-reported failure. `status` is `None`
    /// when the server was never reached; `message` carries the
    /// server-supplied `msg` when the error body had one.
    #[error("Request failed: {message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("Create did not return a {0}")]
    CreationFailed(&'static str),

    #[error("Update did not return a {0}")]
    UpdateFailed(&'static str),

    #[error("Delete did not return a {0}")]
    DeletionFailed(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for agendo operations.
pub type AgendoResult<T> = Result<T, AgendoError>;

impl AgendoError {
    /// True when the server answered an authenticated call with 401.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(
            self,
            AgendoError::RequestFailed {
                status: Some(401),
                ..
            }
        )
    }
}
