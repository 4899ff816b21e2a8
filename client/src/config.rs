//! # Client Configuration
//!
//! Settings are read from environment variables (a `.env` file is loaded by the binary
//! before this runs) and validated once at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `EXPENSE_API_URL` | `http://localhost:8080/api` |
//! | `EXPENSE_HTTP_TIMEOUT_SECS` | `10` |
//! | `EXPENSE_SESSION_FILE` | `<config dir>/expense-tracker/session.json` |

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::{get_env_or, get_env_parse};
use reqwest::Url;

use crate::core::error::{ClientError, Result};
use crate::session::{FileSessionStore, Session};

/// Base URL of the expense tracker API
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// HTTP client timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL every API path is appended to, without trailing slash.
    pub api_url: String,

    /// Transport timeout of the underlying HTTP client.
    pub timeout: Duration,

    /// Session file override. `None` uses the platform config directory.
    pub session_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = get_env_or("EXPENSE_API_URL", DEFAULT_API_URL);

        let timeout_secs = get_env_parse::<u64>("EXPENSE_HTTP_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let session_file = std::env::var("EXPENSE_SESSION_FILE")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// Check values before any client is built.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_url).map_err(|e| {
            ClientError::Config(format!("EXPENSE_API_URL '{}' is not a valid URL: {}", self.api_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "EXPENSE_API_URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::Config(
                "EXPENSE_HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// File-backed session at the configured (or default) location.
    pub fn file_session(&self) -> Result<Session> {
        let path = match &self.session_file {
            Some(path) => path.clone(),
            None => FileSessionStore::default_path()?,
        };
        Ok(Session::new(FileSessionStore::new(path)))
    }
}
