//! Store trait boundary.
//!
//! The catalog and inventory stores are shared, externally owned
//! resources. The engine performs only single-record reads and writes
//! against them and relies on the stores' own consistency guarantees;
//! there are no multi-record transactions and no locking at this seam.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::types::{InventoryItem, InventoryLevel, LocalProduct, StockLocation};

/// Error from a catalog or inventory store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation.
    #[error("store backend error: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl StoreError {
    /// Create a backend error without a source.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Create a not-found error.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// One page of a catalog listing.
#[derive(Debug, Clone)]
pub struct ProductPage {
    /// Products in this page, with variants included.
    pub products: Vec<LocalProduct>,
    /// Whether another page follows.
    pub has_more: bool,
}

/// Pagination parameters for catalog listing.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// Zero-based offset into the catalog.
    pub offset: u32,
    /// Maximum products per page.
    pub limit: u32,
}

/// The local product catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// List products with their variant relations included.
    async fn list_products(&self, page: PageRequest) -> StoreResult<ProductPage>;

    /// Delete a product by id.
    async fn delete_product(&self, product_id: Uuid) -> StoreResult<()>;
}

/// The inventory-level store.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Find the inventory item keyed to a SKU.
    async fn find_item_by_sku(&self, sku: &str) -> StoreResult<Option<InventoryItem>>;

    /// Create an inventory item for a SKU.
    async fn create_item(&self, sku: &str) -> StoreResult<InventoryItem>;

    /// List stock levels for an inventory item across all locations.
    async fn levels_for_item(&self, inventory_item_id: Uuid) -> StoreResult<Vec<InventoryLevel>>;

    /// Create a stock level at a location.
    async fn create_level(
        &self,
        inventory_item_id: Uuid,
        location_id: Uuid,
        stocked_quantity: u32,
    ) -> StoreResult<InventoryLevel>;

    /// Update the stocked quantity of an existing level.
    async fn update_level(
        &self,
        inventory_item_id: Uuid,
        location_id: Uuid,
        stocked_quantity: u32,
    ) -> StoreResult<()>;

    /// List all stock locations.
    async fn list_locations(&self) -> StoreResult<Vec<StockLocation>>;
}
