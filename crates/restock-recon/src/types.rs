//! Local catalog and inventory domain types.
//!
//! These mirror the shapes the external catalog and inventory stores
//! expose at the trait boundary. The engine never creates or structurally
//! mutates products; it only deletes them or touches their variants'
//! inventory records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product in the local catalog, with its variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalProduct {
    /// Catalog id.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Ordered child variants.
    pub variants: Vec<LocalVariant>,
}

/// A variant of a local product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalVariant {
    /// Variant id.
    pub id: Uuid,
    /// SKU matched against the supplier's external id; may be unset.
    pub sku: Option<String>,
}

impl LocalVariant {
    /// The variant's SKU, if non-empty.
    #[must_use]
    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref().filter(|s| !s.is_empty())
    }
}

/// The inventory item backing a variant's stock tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Item id.
    pub id: Uuid,
    /// SKU the item is keyed to.
    pub sku: String,
}

/// Stock level for one inventory item at one stock location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLevel {
    /// Owning inventory item.
    pub inventory_item_id: Uuid,
    /// Stock location.
    pub location_id: Uuid,
    /// Currently stocked quantity.
    pub stocked_quantity: u32,
}

/// A stock location known to the inventory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLocation {
    /// Location id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

/// Why a product was marked for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeleteReason {
    /// No variant SKU appears anywhere in the supplier snapshot.
    NotInSupplierFeed,
    /// The SKU is present but carries an ineligible availability class.
    IneligibleAvailability,
}

impl std::fmt::Display for DeleteReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInSupplierFeed => write!(f, "NOT_IN_SUPPLIER_FEED"),
            Self::IneligibleAvailability => write!(f, "INELIGIBLE_AVAILABILITY"),
        }
    }
}

/// A deferred deletion collected during the catalog scan.
#[derive(Debug, Clone)]
pub struct PendingDeletion {
    /// Product to delete.
    pub product_id: Uuid,
    /// Title, for log context.
    pub title: String,
    /// Representative reason.
    pub reason: DeleteReason,
}
