//! # Common Error Types
//!
//! Consolidated error handling for the expense client.
//!
//! Every API call returns [`Result<T>`], an alias for `Result<T, ClientError>`. The
//! `Display` text of each variant is meant to be shown to the user verbatim.
//!
//! ## Error Categories
//!
//! - **MissingSession**: raised locally, before any network call, when no token is stored
//! - **Transport** / **Decode**: the request never produced a usable response
//! - **Api**: the server answered with a non-success status
//! - **Validation**: a form value could not be normalized for the wire
//! - **Session** / **Config**: local storage and configuration failures
//!
//! ## Usage Pattern
//!
//! ```rust
//! use expense_client::core::error::ClientError;
//!
//! let err = ClientError::Api { status: 401, message: "Invalid email/password".to_string() };
//! assert_eq!(err.to_string(), "Invalid email/password");
//! assert!(err.is_auth_failure());
//! ```

use thiserror::Error;

/// Error type for every operation of the expense client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No session token is stored. Never reaches the network.
    #[error("No token found: please log in first")]
    MissingSession,

    /// Network unreachable, connection refused, timeout.
    #[error("Network error: {0}")]
    Transport(String),

    /// A success response whose body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Non-success HTTP status. `message` comes from the response body when available.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Form input that cannot be converted to the wire format.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading or writing the stored session failed.
    #[error("Session storage error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// HTTP status of a server-rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure means the user has to log in (again).
    ///
    /// The client never logs out on its own; callers use this to prompt the user.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ClientError::MissingSession | ClientError::Api { status: 401 | 403, .. }
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<lib_utils::time::Error> for ClientError {
    fn from(err: lib_utils::time::Error) -> Self {
        ClientError::Validation(err.to_string())
    }
}

impl From<lib_utils::envs::Error> for ClientError {
    fn from(err: lib_utils::envs::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}
