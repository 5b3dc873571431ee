//! Scheduled reconciliation job.
//!
//! Runs the engine once per day. The job only logs its outcome; nothing
//! consumes the return value on the scheduled path.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, instrument};

use crate::engine::{ReconciliationEngine, TriggerSource};
use crate::outcome::ReconciliationOutcome;

/// Default run interval in seconds (24 hours = daily).
pub const DEFAULT_RUN_INTERVAL_SECS: u64 = 86400;

/// Daily reconciliation job over a shared engine.
pub struct ScheduledReconciliationJob {
    engine: Arc<ReconciliationEngine>,
    interval_secs: u64,
}

impl ScheduledReconciliationJob {
    /// Create a job with the default daily interval.
    #[must_use]
    pub fn new(engine: Arc<ReconciliationEngine>) -> Self {
        Self {
            engine,
            interval_secs: DEFAULT_RUN_INTERVAL_SECS,
        }
    }

    /// Override the run interval.
    #[must_use]
    pub fn with_interval_secs(mut self, secs: u64) -> Self {
        self.interval_secs = secs;
        self
    }

    /// The configured run interval in seconds.
    #[must_use]
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    /// Run a single scheduled cycle.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> ReconciliationOutcome {
        info!("starting scheduled reconciliation cycle");

        let outcome = self.engine.run(TriggerSource::Scheduled).await;

        if outcome.success {
            info!(
                inventory_updates_applied = outcome.inventory_updates_applied,
                products_deleted = outcome.products_deleted,
                price_syncs_prepared = outcome.price_syncs_prepared,
                "scheduled reconciliation cycle complete"
            );
        } else {
            error!(
                error = outcome.error.as_deref().unwrap_or("unknown"),
                "scheduled reconciliation cycle failed"
            );
        }

        outcome
    }

    /// Run forever on the configured interval.
    ///
    /// The first cycle fires immediately; subsequent cycles wait out the
    /// full interval.
    pub async fn run_forever(&self) {
        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            self.run_once().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval_is_daily() {
        assert_eq!(DEFAULT_RUN_INTERVAL_SECS, 86400);
    }
}
