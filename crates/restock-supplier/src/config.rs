//! Supplier feed configuration.
//!
//! The API credential is passed in explicitly at construction time; the
//! client never reads process-wide configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FeedError, FeedResult};

/// Default header carrying the supplier API key.
pub const DEFAULT_API_KEY_HEADER: &str = "X-Api-Key";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the supplier feed client.
#[derive(Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Full URL of the supplier inventory endpoint.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Header name the API key is sent under.
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_key_header() -> String {
    DEFAULT_API_KEY_HEADER.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl FeedConfig {
    /// Create a configuration with default header and timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_key_header: default_api_key_header(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Override the API key header name.
    #[must_use]
    pub fn with_api_key_header(mut self, header: impl Into<String>) -> Self {
        self.api_key_header = header.into();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> FeedResult<()> {
        if self.base_url.is_empty() {
            return Err(FeedError::InvalidConfiguration {
                message: "base_url must not be empty".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(FeedError::InvalidConfiguration {
                message: format!("base_url has unsupported scheme: {}", self.base_url),
            });
        }
        if self.api_key.is_empty() {
            return Err(FeedError::InvalidConfiguration {
                message: "api_key must not be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(FeedError::InvalidConfiguration {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

// Manual Debug so the API key never reaches logs.
impl std::fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***REDACTED***")
            .field("api_key_header", &self.api_key_header)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
