//! Router configuration for the reconciliation API.

use axum::routing::post;
use axum::Router;
use restock_recon::ReconciliationEngine;
use std::sync::Arc;

use crate::handlers;
use crate::state::ApiState;

/// Build the reconciliation router.
///
/// Mounted by the host application alongside its other routes; the
/// engine is shared with the scheduler and event listener so every
/// trigger surface goes through one single-flight guard.
pub fn reconciliation_router(engine: Arc<ReconciliationEngine>) -> Router {
    Router::new()
        .route(
            "/reconciliation/run",
            post(handlers::trigger_reconciliation),
        )
        .with_state(ApiState::new(engine))
}
