//! Supplier feed error types.
//!
//! Every variant here is fatal to a reconciliation run: the engine never
//! reconciles against a partial or suspect snapshot.

use thiserror::Error;

/// Error that can occur while fetching the supplier snapshot.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Failed to reach the supplier endpoint.
    #[error("feed connection failed: {message}")]
    ConnectionFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request timed out.
    #[error("feed request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The supplier rejected the API key.
    #[error("feed authentication failed")]
    AuthenticationFailed,

    /// The supplier responded with a non-success status.
    #[error("feed returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be decoded as a snapshot.
    #[error("malformed feed payload: {message}")]
    MalformedPayload {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The client configuration is invalid.
    #[error("invalid feed configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl FeedError {
    /// Create a connection error without a source.
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection error with a source.
    pub fn connection_failed_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a malformed payload error with a source.
    pub fn malformed_payload_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::MalformedPayload {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether retrying the fetch later could reasonably succeed.
    ///
    /// Configuration and authentication failures need operator action;
    /// everything else is a candidate for the next scheduled run.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. } | Self::Timeout { .. } | Self::UnexpectedStatus { .. }
        )
    }
}

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
