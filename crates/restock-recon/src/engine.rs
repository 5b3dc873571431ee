//! Reconciliation engine orchestrator.
//!
//! One run: fetch the supplier snapshot, index it, scan the catalog page
//! by page, reconcile kept variants, collect deletions, then execute the
//! deletions after the full scan. The run is a pure function of (current
//! snapshot, current catalog state); no state survives across runs.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};

use restock_supplier::{SnapshotIndex, SupplierFeed};

use crate::classify::{classify_product, ProductDecision};
use crate::config::ReconciliationConfig;
use crate::outcome::{ReconciliationOutcome, RunCounters};
use crate::pricing::{PriceSyncStage, PriceUpdate};
use crate::store::{CatalogStore, InventoryStore, PageRequest};
use crate::types::PendingDeletion;
use crate::writer::InventoryWriter;

/// Which surface started a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    /// The daily schedule.
    Scheduled,
    /// The HTTP trigger endpoint.
    Manual,
    /// An internal fire-and-forget event.
    Event,
}

impl std::fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => write!(f, "scheduled"),
            Self::Manual => write!(f, "manual"),
            Self::Event => write!(f, "event"),
        }
    }
}

/// The inventory reconciliation engine.
///
/// All trigger surfaces share one engine instance; a single-flight guard
/// rejects a run while another is in progress, so an overlapping manual
/// trigger cannot race the scheduled run.
pub struct ReconciliationEngine {
    feed: Arc<dyn SupplierFeed>,
    catalog: Arc<dyn CatalogStore>,
    writer: InventoryWriter,
    price_stage: PriceSyncStage,
    config: ReconciliationConfig,
    in_flight: Mutex<()>,
}

impl ReconciliationEngine {
    /// Create an engine with default configuration.
    #[must_use]
    pub fn new(
        feed: Arc<dyn SupplierFeed>,
        catalog: Arc<dyn CatalogStore>,
        inventory: Arc<dyn InventoryStore>,
    ) -> Self {
        Self::with_config(feed, catalog, inventory, ReconciliationConfig::default())
    }

    /// Create an engine with custom configuration.
    #[must_use]
    pub fn with_config(
        feed: Arc<dyn SupplierFeed>,
        catalog: Arc<dyn CatalogStore>,
        inventory: Arc<dyn InventoryStore>,
        config: ReconciliationConfig,
    ) -> Self {
        Self {
            feed,
            catalog,
            writer: InventoryWriter::new(inventory),
            price_stage: PriceSyncStage,
            config,
            in_flight: Mutex::new(()),
        }
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }

    /// Execute one reconciliation run.
    ///
    /// Never panics or returns an error: every failure mode is folded
    /// into the outcome so HTTP, scheduler, and event callers branch on
    /// `success` uniformly.
    #[instrument(skip(self))]
    pub async fn run(&self, trigger: TriggerSource) -> ReconciliationOutcome {
        let started_at = Utc::now();

        let Ok(_guard) = self.in_flight.try_lock() else {
            warn!(trigger = %trigger, "reconciliation already in progress, rejecting run");
            return ReconciliationOutcome::failure(
                "a reconciliation run is already in progress",
                started_at,
            );
        };

        let clock = Instant::now();
        info!(trigger = %trigger, "starting inventory reconciliation run");

        let records = match self.feed.fetch_snapshot().await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "supplier feed fetch failed, aborting run without writes");
                return ReconciliationOutcome::failure(e.to_string(), started_at);
            }
        };

        let total_supplier_records = records.len();
        let index = SnapshotIndex::build(records);
        let eligible_record_count = index.eligible_count();

        info!(
            total_supplier_records,
            eligible_record_count, "indexed supplier snapshot"
        );

        let mut counters = RunCounters::default();
        let mut pending_deletions: Vec<PendingDeletion> = Vec::new();

        // Phase 1: scan the catalog sequentially. Deletions are only
        // collected here; nothing is removed while the scan is running.
        let mut offset = 0u32;
        loop {
            let page = PageRequest {
                offset,
                limit: self.config.page_size,
            };
            let page = match self.catalog.list_products(page).await {
                Ok(page) => page,
                Err(e) => {
                    // Updates applied so far are idempotent and safe to
                    // keep, but the scan is incomplete, so no deferred
                    // deletion may execute.
                    error!(error = %e, offset, "catalog page fetch failed, aborting scan");
                    let mut outcome = counters.into_outcome(
                        total_supplier_records,
                        eligible_record_count,
                        started_at,
                        clock.elapsed().as_secs(),
                    );
                    outcome.success = false;
                    outcome.error = Some(format!("catalog scan failed at offset {offset}: {e}"));
                    return outcome;
                }
            };

            if page.products.is_empty() {
                break;
            }

            for product in &page.products {
                match classify_product(product, &index) {
                    ProductDecision::Keep(plans) => {
                        for plan in plans {
                            match self.writer.apply(&plan.sku, plan.record.quantity).await {
                                Ok(write) if write.changed_state() => {
                                    counters.inventory_updates_applied += 1;
                                }
                                Ok(_) => {}
                                Err(e) => {
                                    warn!(
                                        sku = %plan.sku,
                                        variant_id = %plan.variant_id,
                                        error = %e,
                                        "inventory write failed, skipping variant"
                                    );
                                }
                            }

                            self.price_stage
                                .stage(&PriceUpdate::from_record(&plan.sku, &plan.record));
                            counters.price_syncs_prepared += 1;
                        }
                    }
                    ProductDecision::Delete(reason) => {
                        pending_deletions.push(PendingDeletion {
                            product_id: product.id,
                            title: product.title.clone(),
                            reason,
                        });
                    }
                }
            }

            if !page.has_more {
                break;
            }
            offset += self.config.page_size;
        }

        // Phase 2: execute deferred deletions, each independently.
        for deletion in pending_deletions {
            match self.catalog.delete_product(deletion.product_id).await {
                Ok(()) => {
                    counters.products_deleted += 1;
                    info!(
                        product_id = %deletion.product_id,
                        title = %deletion.title,
                        reason = %deletion.reason,
                        "deleted stale product"
                    );
                }
                Err(e) => {
                    warn!(
                        product_id = %deletion.product_id,
                        title = %deletion.title,
                        error = %e,
                        "product deletion failed, continuing"
                    );
                }
            }
        }

        let outcome = counters.into_outcome(
            total_supplier_records,
            eligible_record_count,
            started_at,
            clock.elapsed().as_secs(),
        );

        info!(
            trigger = %trigger,
            total_supplier_records = outcome.total_supplier_records,
            eligible_record_count = outcome.eligible_record_count,
            inventory_updates_applied = outcome.inventory_updates_applied,
            products_deleted = outcome.products_deleted,
            price_syncs_prepared = outcome.price_syncs_prepared,
            duration_seconds = outcome.duration_seconds,
            "completed inventory reconciliation run"
        );

        outcome
    }
}
