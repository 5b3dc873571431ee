//! Supplier feed client.
//!
//! One network call per reconciliation run, returning the full current
//! snapshot. Any transport failure, non-success status, or malformed
//! payload is surfaced as a `FeedError` and aborts the run upstream.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::FeedConfig;
use crate::error::{FeedError, FeedResult};
use crate::record::{FeedResponse, SupplierRecord};

/// Source of the supplier inventory snapshot.
#[async_trait]
pub trait SupplierFeed: Send + Sync {
    /// Fetch the full current snapshot.
    async fn fetch_snapshot(&self) -> FeedResult<Vec<SupplierRecord>>;
}

/// HTTP implementation of [`SupplierFeed`].
pub struct HttpSupplierFeed {
    config: FeedConfig,
    client: Client,
}

impl std::fmt::Debug for HttpSupplierFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSupplierFeed")
            .field("config", &self.config)
            .finish()
    }
}

impl HttpSupplierFeed {
    /// Create a new client from the given configuration.
    pub fn new(config: FeedConfig) -> FeedResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FeedError::InvalidConfiguration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { config, client })
    }

    fn map_send_error(&self, err: reqwest::Error) -> FeedError {
        if err.is_timeout() {
            FeedError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            FeedError::connection_failed_with_source("request failed", err)
        }
    }
}

#[async_trait]
impl SupplierFeed for HttpSupplierFeed {
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    async fn fetch_snapshot(&self) -> FeedResult<Vec<SupplierRecord>> {
        let response = self
            .client
            .get(&self.config.base_url)
            .header(&self.config.api_key_header, &self.config.api_key)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FeedError::AuthenticationFailed);
        }
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body: FeedResponse = response
            .json()
            .await
            .map_err(|e| FeedError::malformed_payload_with_source("failed to decode body", e))?;

        let records: Vec<SupplierRecord> = body
            .data
            .into_iter()
            .map(super::record::FeedItem::into_record)
            .collect();

        debug!(record_count = records.len(), "fetched supplier snapshot");

        Ok(records)
    }
}
