//! Internal event trigger.
//!
//! A fire-and-forget channel that lets the rest of the system request a
//! reconciliation without waiting for the result. The spawned subscriber
//! runs the engine and logs the outcome; senders never observe it.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::engine::{ReconciliationEngine, TriggerSource};

/// A request to run reconciliation, emitted by an internal event source.
#[derive(Debug, Clone, Default)]
pub struct ReconciliationRequested {
    /// Free-form requester tag, for log context.
    pub requested_by: Option<String>,
}

/// Sending half of the trigger channel.
#[derive(Debug, Clone)]
pub struct TriggerSender {
    tx: mpsc::UnboundedSender<ReconciliationRequested>,
}

impl TriggerSender {
    /// Fire a trigger event. Returns false if the subscriber has shut
    /// down.
    pub fn fire(&self, event: ReconciliationRequested) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Spawn the trigger subscriber over a shared engine.
///
/// The returned task runs until every [`TriggerSender`] clone is dropped.
#[must_use]
pub fn spawn_trigger_listener(
    engine: Arc<ReconciliationEngine>,
) -> (TriggerSender, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<ReconciliationRequested>();

    let handle = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            info!(
                requested_by = event.requested_by.as_deref().unwrap_or("unknown"),
                "reconciliation requested by internal event"
            );

            let outcome = engine.run(TriggerSource::Event).await;

            if outcome.success {
                info!(
                    inventory_updates_applied = outcome.inventory_updates_applied,
                    products_deleted = outcome.products_deleted,
                    "event-triggered reconciliation complete"
                );
            } else {
                error!(
                    error = outcome.error.as_deref().unwrap_or("unknown"),
                    "event-triggered reconciliation failed"
                );
            }
        }
    });

    (TriggerSender { tx }, handle)
}
