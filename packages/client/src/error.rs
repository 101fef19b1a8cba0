//! Error types for Todoist API operations

use thiserror::Error;

/// Result type for Todoist API operations
pub type TodoistResult<T> = Result<T, TodoistError>;

/// Errors raised by the Todoist client
#[derive(Debug, Error)]
pub enum TodoistError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("A non-premium account used a premium-only feature")]
    PremiumRequired,

    #[error("An internal server error occurred at the API's end")]
    ServerError,

    #[error("The API answered with a bad gateway")]
    BadGateway,

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TodoistError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Check if this is an authentication error
    pub fn is_auth_error(&self) -> bool {
        matches!(self, TodoistError::Authentication(_))
    }

    /// Check if the remote service itself failed
    pub fn is_server_error(&self) -> bool {
        matches!(self, TodoistError::ServerError | TodoistError::BadGateway)
    }

    /// Check if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(self, TodoistError::Network(_))
    }
}

impl From<reqwest::Error> for TodoistError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for TodoistError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
