//! Product classification.
//!
//! Pure phase-one decision logic: given a local product and the snapshot
//! index, decide whether the product is kept (and which variants get
//! reconciled) or marked for deferred deletion, and why. No I/O happens
//! here; effects are executed by the engine after the decision.

use restock_supplier::{SnapshotIndex, SupplierRecord};
use uuid::Uuid;

use crate::types::{DeleteReason, LocalProduct};

/// A kept variant together with the supplier record it reconciles against.
#[derive(Debug, Clone)]
pub struct VariantPlan {
    /// Local variant id.
    pub variant_id: Uuid,
    /// The matched SKU.
    pub sku: String,
    /// The eligible supplier record for that SKU.
    pub record: SupplierRecord,
}

/// Outcome of classifying one product against the snapshot.
#[derive(Debug, Clone)]
pub enum ProductDecision {
    /// At least one variant matched an eligible record; reconcile these.
    Keep(Vec<VariantPlan>),
    /// No variant produced a keep signal; delete the product.
    Delete(DeleteReason),
}

/// Classify a product against the snapshot index.
///
/// A variant produces a keep signal only when its SKU maps to an
/// eligible supplier record. Variants with empty or missing SKUs
/// contribute nothing either way. A product with no keep signal at all
/// (including one with zero variants) is marked for deletion, with the
/// first SKU-bearing variant's situation as the representative reason.
#[must_use]
pub fn classify_product(product: &LocalProduct, index: &SnapshotIndex) -> ProductDecision {
    let mut plans = Vec::new();

    for variant in &product.variants {
        let Some(sku) = variant.sku() else {
            continue;
        };
        if let Some(record) = index.eligible(sku) {
            plans.push(VariantPlan {
                variant_id: variant.id,
                sku: sku.to_string(),
                record: record.clone(),
            });
        }
    }

    if !plans.is_empty() {
        return ProductDecision::Keep(plans);
    }

    let reason = product
        .variants
        .iter()
        .find_map(|v| v.sku())
        .map_or(DeleteReason::NotInSupplierFeed, |sku| {
            if index.is_known(sku) {
                DeleteReason::IneligibleAvailability
            } else {
                DeleteReason::NotInSupplierFeed
            }
        });

    ProductDecision::Delete(reason)
}
