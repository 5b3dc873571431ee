//! Price-sync staging.
//!
//! Supplier prices for kept variants are staged for propagation to the
//! pricing engine, but no pricing write API exists yet: staging is a log
//! plus a counter, and the boundary stays that way deliberately until a
//! pricing contract is defined.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use restock_supplier::SupplierRecord;

/// Prices staged for one SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// SKU the prices belong to.
    pub sku: String,
    /// List price.
    pub list_price: Decimal,
    /// Wholesale price tiers.
    pub wholesale_tier_1: Decimal,
    pub wholesale_tier_2: Decimal,
    pub wholesale_tier_3: Decimal,
}

impl PriceUpdate {
    /// Build the staged update from a supplier record.
    #[must_use]
    pub fn from_record(sku: impl Into<String>, record: &SupplierRecord) -> Self {
        Self {
            sku: sku.into(),
            list_price: record.list_price,
            wholesale_tier_1: record.wholesale_tier_1,
            wholesale_tier_2: record.wholesale_tier_2,
            wholesale_tier_3: record.wholesale_tier_3,
        }
    }
}

/// Stages price updates for the pricing engine.
#[derive(Debug, Default)]
pub struct PriceSyncStage;

impl PriceSyncStage {
    /// Stage one price update.
    ///
    /// TODO: call the pricing engine's write API once it exists; until
    /// then the staged values are only logged.
    pub fn stage(&self, update: &PriceUpdate) {
        debug!(
            sku = %update.sku,
            list_price = %update.list_price,
            tier_1 = %update.wholesale_tier_1,
            tier_2 = %update.wholesale_tier_2,
            tier_3 = %update.wholesale_tier_3,
            "staged price sync"
        );
    }
}
