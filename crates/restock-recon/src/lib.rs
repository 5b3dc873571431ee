//! # restock-recon
//!
//! The inventory reconciliation engine. One run pulls a point-in-time
//! supplier snapshot, diffs it against the local product catalog, and
//! brings stock levels, price-tier staging, and product existence into
//! agreement with the supplier:
//!
//! - [`classify`] — pure keep/delete decisions per product
//! - [`writer`] — idempotent per-variant stock writes
//! - [`pricing`] — price-sync staging (log and count only)
//! - [`engine`] — the orchestrator, with a single-flight run guard
//! - [`job`] / [`trigger`] — the scheduled and event trigger surfaces
//!
//! Failure handling follows a strict taxonomy: a feed failure aborts the
//! whole run before any write, while a single variant write or product
//! deletion failure is logged and skipped. Deletions decided during the
//! scan are deferred and executed only after the full catalog has been
//! scanned.

pub mod classify;
pub mod config;
pub mod engine;
pub mod job;
pub mod outcome;
pub mod pricing;
pub mod store;
pub mod trigger;
pub mod types;
pub mod writer;

pub use classify::{classify_product, ProductDecision, VariantPlan};
pub use config::ReconciliationConfig;
pub use engine::{ReconciliationEngine, TriggerSource};
pub use job::{ScheduledReconciliationJob, DEFAULT_RUN_INTERVAL_SECS};
pub use outcome::{ReconciliationOutcome, RunCounters};
pub use pricing::{PriceSyncStage, PriceUpdate};
pub use store::{CatalogStore, InventoryStore, PageRequest, ProductPage, StoreError, StoreResult};
pub use trigger::{spawn_trigger_listener, ReconciliationRequested, TriggerSender};
pub use types::{
    DeleteReason, InventoryItem, InventoryLevel, LocalProduct, LocalVariant, PendingDeletion,
    StockLocation,
};
pub use writer::{InventoryWriter, WriteError, WriteOutcome};
