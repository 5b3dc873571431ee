//! Inventory writer.
//!
//! Applies stock-quantity creates and updates for one variant at a time.
//! Each call is independent: a failure is reported to the caller, logged
//! there, and never halts the surrounding scan. Writing a quantity that
//! already matches is a no-op and is reported as such so the run counters
//! only reflect real state changes.

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::store::{InventoryStore, StoreError};

/// What an inventory write actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A missing item and/or level was created with the supplier quantity.
    Created,
    /// An existing level was updated to the supplier quantity.
    Updated,
    /// The stocked quantity already matched; nothing written.
    Unchanged,
}

impl WriteOutcome {
    /// Whether the write changed persistent state.
    #[must_use]
    pub fn changed_state(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Error from a single variant's inventory write.
#[derive(Debug, Error)]
pub enum WriteError {
    /// A level must be created but the store has no stock locations.
    #[error("no stock location available to create a level")]
    NoStockLocation,

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Applies per-variant inventory writes against the inventory store.
pub struct InventoryWriter {
    inventory: Arc<dyn InventoryStore>,
}

impl InventoryWriter {
    /// Create a writer over the given store.
    #[must_use]
    pub fn new(inventory: Arc<dyn InventoryStore>) -> Self {
        Self { inventory }
    }

    /// Reconcile the stock level for one SKU to the supplier quantity.
    ///
    /// Three paths, per the variant's current state:
    /// - item and level exist: update the level if the quantity differs
    /// - item exists without a level: create a level at the first
    ///   available stock location
    /// - no item at all: create the item, then its level
    pub async fn apply(&self, sku: &str, quantity: u32) -> Result<WriteOutcome, WriteError> {
        let item = match self.inventory.find_item_by_sku(sku).await? {
            Some(item) => item,
            None => {
                let item = self.inventory.create_item(sku).await?;
                debug!(sku = %sku, item_id = %item.id, "created inventory item");
                self.create_first_level(item.id, quantity).await?;
                return Ok(WriteOutcome::Created);
            }
        };

        let levels = self.inventory.levels_for_item(item.id).await?;
        match levels.first() {
            Some(level) if level.stocked_quantity == quantity => Ok(WriteOutcome::Unchanged),
            Some(level) => {
                self.inventory
                    .update_level(item.id, level.location_id, quantity)
                    .await?;
                debug!(
                    sku = %sku,
                    from = level.stocked_quantity,
                    to = quantity,
                    "updated stock level"
                );
                Ok(WriteOutcome::Updated)
            }
            None => {
                self.create_first_level(item.id, quantity).await?;
                Ok(WriteOutcome::Created)
            }
        }
    }

    /// Create a level at the first available stock location.
    async fn create_first_level(
        &self,
        inventory_item_id: uuid::Uuid,
        quantity: u32,
    ) -> Result<(), WriteError> {
        let locations = self.inventory.list_locations().await?;
        let location = locations.first().ok_or(WriteError::NoStockLocation)?;
        self.inventory
            .create_level(inventory_item_id, location.id, quantity)
            .await?;
        debug!(
            item_id = %inventory_item_id,
            location_id = %location.id,
            quantity,
            "created stock level"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreResult;
    use crate::types::{InventoryItem, InventoryLevel, StockLocation};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct FakeInventory {
        items: Mutex<HashMap<String, InventoryItem>>,
        levels: Mutex<Vec<InventoryLevel>>,
        locations: Mutex<Vec<StockLocation>>,
    }

    impl FakeInventory {
        fn with_location() -> Self {
            let store = Self::default();
            store.locations.lock().unwrap().push(StockLocation {
                id: Uuid::new_v4(),
                name: "Main".to_string(),
            });
            store
        }

        fn seed(&self, sku: &str, quantity: u32) -> Uuid {
            let item = InventoryItem {
                id: Uuid::new_v4(),
                sku: sku.to_string(),
            };
            let location_id = self.locations.lock().unwrap()[0].id;
            self.levels.lock().unwrap().push(InventoryLevel {
                inventory_item_id: item.id,
                location_id,
                stocked_quantity: quantity,
            });
            let id = item.id;
            self.items.lock().unwrap().insert(sku.to_string(), item);
            id
        }

        fn level_for(&self, item_id: Uuid) -> Option<InventoryLevel> {
            self.levels
                .lock()
                .unwrap()
                .iter()
                .find(|l| l.inventory_item_id == item_id)
                .cloned()
        }
    }

    #[async_trait]
    impl InventoryStore for FakeInventory {
        async fn find_item_by_sku(&self, sku: &str) -> StoreResult<Option<InventoryItem>> {
            Ok(self.items.lock().unwrap().get(sku).cloned())
        }

        async fn create_item(&self, sku: &str) -> StoreResult<InventoryItem> {
            let item = InventoryItem {
                id: Uuid::new_v4(),
                sku: sku.to_string(),
            };
            self.items
                .lock()
                .unwrap()
                .insert(sku.to_string(), item.clone());
            Ok(item)
        }

        async fn levels_for_item(&self, inventory_item_id: Uuid) -> StoreResult<Vec<InventoryLevel>> {
            Ok(self
                .levels
                .lock()
                .unwrap()
                .iter()
                .filter(|l| l.inventory_item_id == inventory_item_id)
                .cloned()
                .collect())
        }

        async fn create_level(
            &self,
            inventory_item_id: Uuid,
            location_id: Uuid,
            stocked_quantity: u32,
        ) -> StoreResult<InventoryLevel> {
            let level = InventoryLevel {
                inventory_item_id,
                location_id,
                stocked_quantity,
            };
            self.levels.lock().unwrap().push(level.clone());
            Ok(level)
        }

        async fn update_level(
            &self,
            inventory_item_id: Uuid,
            location_id: Uuid,
            stocked_quantity: u32,
        ) -> StoreResult<()> {
            let mut levels = self.levels.lock().unwrap();
            let level = levels
                .iter_mut()
                .find(|l| l.inventory_item_id == inventory_item_id && l.location_id == location_id)
                .ok_or_else(|| StoreError::not_found("level", inventory_item_id.to_string()))?;
            level.stocked_quantity = stocked_quantity;
            Ok(())
        }

        async fn list_locations(&self) -> StoreResult<Vec<StockLocation>> {
            Ok(self.locations.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn test_update_existing_level() {
        let store = Arc::new(FakeInventory::with_location());
        let item_id = store.seed("A1", 0);

        let writer = InventoryWriter::new(store.clone());
        let outcome = writer.apply("A1", 5).await.unwrap();

        assert_eq!(outcome, WriteOutcome::Updated);
        assert_eq!(store.level_for(item_id).unwrap().stocked_quantity, 5);
    }

    #[tokio::test]
    async fn test_matching_quantity_is_noop() {
        let store = Arc::new(FakeInventory::with_location());
        store.seed("A1", 5);

        let writer = InventoryWriter::new(store);
        let outcome = writer.apply("A1", 5).await.unwrap();

        assert_eq!(outcome, WriteOutcome::Unchanged);
        assert!(!outcome.changed_state());
    }

    #[tokio::test]
    async fn test_missing_item_is_created_with_level() {
        let store = Arc::new(FakeInventory::with_location());

        let writer = InventoryWriter::new(store.clone());
        let outcome = writer.apply("NEW", 7).await.unwrap();

        assert_eq!(outcome, WriteOutcome::Created);
        let item = store.items.lock().unwrap().get("NEW").cloned().unwrap();
        assert_eq!(store.level_for(item.id).unwrap().stocked_quantity, 7);
    }

    #[tokio::test]
    async fn test_item_without_level_gets_level() {
        let store = Arc::new(FakeInventory::with_location());
        let item = InventoryItem {
            id: Uuid::new_v4(),
            sku: "A1".to_string(),
        };
        store
            .items
            .lock()
            .unwrap()
            .insert("A1".to_string(), item.clone());

        let writer = InventoryWriter::new(store.clone());
        let outcome = writer.apply("A1", 3).await.unwrap();

        assert_eq!(outcome, WriteOutcome::Created);
        assert_eq!(store.level_for(item.id).unwrap().stocked_quantity, 3);
    }

    #[tokio::test]
    async fn test_no_stock_location_errors() {
        let store = Arc::new(FakeInventory::default());

        let writer = InventoryWriter::new(store);
        let result = writer.apply("A1", 3).await;

        assert!(matches!(result, Err(WriteError::NoStockLocation)));
    }
}
