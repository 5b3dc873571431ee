//! Run outcome.
//!
//! The single structured result of one reconciliation run. Created once
//! per run, returned to the caller, and never mutated afterwards; the
//! engine persists nothing across runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one reconciliation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationOutcome {
    /// Whether the run completed. A completed run may still have skipped
    /// individual items on recoverable errors. A failed run may also have
    /// applied writes before aborting (a catalog scan that dies mid-way
    /// keeps its idempotent updates); the counters, not this flag, are
    /// authoritative for what was mutated.
    pub success: bool,
    /// Records in the supplier snapshot.
    pub total_supplier_records: usize,
    /// Records eligible for sync.
    pub eligible_record_count: usize,
    /// Inventory creates/updates that changed state (no-ops excluded).
    pub inventory_updates_applied: usize,
    /// Products confirmed deleted.
    pub products_deleted: usize,
    /// Price syncs staged for the pricing engine.
    pub price_syncs_prepared: usize,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the run.
    pub duration_seconds: u64,
    /// Cause of a whole-run abort; set only when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReconciliationOutcome {
    /// A failure outcome with every counter at zero.
    ///
    /// Used for whole-run aborts, where no catalog mutation has been
    /// attempted.
    #[must_use]
    pub fn failure(error: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            success: false,
            total_supplier_records: 0,
            eligible_record_count: 0,
            inventory_updates_applied: 0,
            products_deleted: 0,
            price_syncs_prepared: 0,
            started_at,
            duration_seconds: 0,
            error: Some(error.into()),
        }
    }
}

/// Mutable counters accumulated while a run executes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunCounters {
    /// State-changing inventory writes.
    pub inventory_updates_applied: usize,
    /// Confirmed product deletions.
    pub products_deleted: usize,
    /// Staged price syncs.
    pub price_syncs_prepared: usize,
}

impl RunCounters {
    /// Finalize the counters into a successful outcome.
    #[must_use]
    pub fn into_outcome(
        self,
        total_supplier_records: usize,
        eligible_record_count: usize,
        started_at: DateTime<Utc>,
        duration_seconds: u64,
    ) -> ReconciliationOutcome {
        ReconciliationOutcome {
            success: true,
            total_supplier_records,
            eligible_record_count,
            inventory_updates_applied: self.inventory_updates_applied,
            products_deleted: self.products_deleted,
            price_syncs_prepared: self.price_syncs_prepared,
            started_at,
            duration_seconds,
            error: None,
        }
    }
}
