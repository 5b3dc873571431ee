//! HTTP trigger endpoint tests.
//!
//! Drives the router with `tower::ServiceExt::oneshot` against an
//! engine wired to in-memory collaborators, and asserts the response
//! contract: 200 with the run report on success, 500 with an error
//! detail on failure.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use restock_api::{reconciliation_router, TriggerResponse};
use restock_recon::{
    CatalogStore, InventoryItem, InventoryLevel, InventoryStore, PageRequest, ProductPage,
    ReconciliationEngine, StockLocation, StoreResult,
};
use restock_supplier::{AvailabilityClass, FeedError, FeedResult, SupplierFeed, SupplierRecord};
use rust_decimal::Decimal;

struct StaticFeed {
    records: Vec<SupplierRecord>,
    fail: bool,
}

#[async_trait]
impl SupplierFeed for StaticFeed {
    async fn fetch_snapshot(&self) -> FeedResult<Vec<SupplierRecord>> {
        if self.fail {
            return Err(FeedError::Timeout { timeout_secs: 30 });
        }
        Ok(self.records.clone())
    }
}

struct EmptyCatalog;

#[async_trait]
impl CatalogStore for EmptyCatalog {
    async fn list_products(&self, _page: PageRequest) -> StoreResult<ProductPage> {
        Ok(ProductPage {
            products: Vec::new(),
            has_more: false,
        })
    }

    async fn delete_product(&self, _product_id: Uuid) -> StoreResult<()> {
        Ok(())
    }
}

struct EmptyInventory;

#[async_trait]
impl InventoryStore for EmptyInventory {
    async fn find_item_by_sku(&self, _sku: &str) -> StoreResult<Option<InventoryItem>> {
        Ok(None)
    }

    async fn create_item(&self, sku: &str) -> StoreResult<InventoryItem> {
        Ok(InventoryItem {
            id: Uuid::new_v4(),
            sku: sku.to_string(),
        })
    }

    async fn levels_for_item(&self, _inventory_item_id: Uuid) -> StoreResult<Vec<InventoryLevel>> {
        Ok(Vec::new())
    }

    async fn create_level(
        &self,
        inventory_item_id: Uuid,
        location_id: Uuid,
        stocked_quantity: u32,
    ) -> StoreResult<InventoryLevel> {
        Ok(InventoryLevel {
            inventory_item_id,
            location_id,
            stocked_quantity,
        })
    }

    async fn update_level(
        &self,
        _inventory_item_id: Uuid,
        _location_id: Uuid,
        _stocked_quantity: u32,
    ) -> StoreResult<()> {
        Ok(())
    }

    async fn list_locations(&self) -> StoreResult<Vec<StockLocation>> {
        Ok(vec![StockLocation {
            id: Uuid::new_v4(),
            name: "Main warehouse".to_string(),
        }])
    }
}

fn router_with_feed(feed: StaticFeed) -> axum::Router {
    let engine = Arc::new(ReconciliationEngine::new(
        Arc::new(feed),
        Arc::new(EmptyCatalog),
        Arc::new(EmptyInventory),
    ));
    reconciliation_router(engine)
}

fn record(id: &str) -> SupplierRecord {
    SupplierRecord {
        external_id: id.to_string(),
        display_name: format!("Item {id}"),
        quantity: 4,
        list_price: Decimal::new(999, 2),
        wholesale_tier_1: Decimal::new(700, 2),
        wholesale_tier_2: Decimal::new(650, 2),
        wholesale_tier_3: Decimal::new(600, 2),
        category: None,
        subcategory: None,
        availability: AvailabilityClass::DualChannel,
    }
}

async fn post_run(router: axum::Router) -> (StatusCode, TriggerResponse) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reconciliation/run")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: TriggerResponse = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_successful_run_returns_200_with_report() {
    let router = router_with_feed(StaticFeed {
        records: vec![record("A1")],
        fail: false,
    });

    let (status, body) = post_run(router).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
    assert!(body.error.is_none());
    let result = body.result.expect("success response carries the report");
    assert!(result.success);
    assert_eq!(result.total_supplier_records, 1);
    assert_eq!(result.eligible_record_count, 1);
}

#[tokio::test]
async fn test_failed_run_returns_500_with_error() {
    let router = router_with_feed(StaticFeed {
        records: Vec::new(),
        fail: true,
    });

    let (status, body) = post_run(router).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.success);
    assert!(body.result.is_none());
    let error = body.error.expect("failure response carries a detail");
    assert!(error.contains("timed out") || error.contains("timeout"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let router = router_with_feed(StaticFeed {
        records: Vec::new(),
        fail: false,
    });

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/reconciliation/run")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Wrong method on the only route.
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
