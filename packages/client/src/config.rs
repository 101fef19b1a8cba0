//! Client configuration

use std::time::Duration;

use crate::error::{TodoistError, TodoistResult};

/// Base URL of the Todoist REST API
pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/rest/v2";

/// Environment variable holding the API token
pub const TOKEN_ENV_VAR: &str = "TODOIST_TOKEN";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// API tokens issued by the service are 40 characters long.
const API_TOKEN_LENGTH: usize = 40;

/// Configuration for a [`TodoistClient`](crate::TodoistClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_token: String,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default base URL and timeout
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a configuration from the `TODOIST_TOKEN` environment variable
    pub fn from_env() -> TodoistResult<Self> {
        let api_token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| TodoistError::config(format!("{} is not set", TOKEN_ENV_VAR)))?;
        Ok(Self::new(api_token))
    }

    /// Override the API base URL (useful for testing against a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate the API token and return its trimmed form
    pub(crate) fn validated_token(&self) -> TodoistResult<String> {
        let token = self.api_token.trim();
        if token.len() != API_TOKEN_LENGTH {
            return Err(TodoistError::config("The provided API token is invalid"));
        }
        Ok(token.to_string())
    }
}
