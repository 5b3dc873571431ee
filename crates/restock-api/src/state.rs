//! Shared API state.

use restock_recon::ReconciliationEngine;
use std::sync::Arc;

/// State shared by the reconciliation API handlers.
///
/// Holds the same engine instance the scheduler and event listener use,
/// so the engine's single-flight guard covers all trigger surfaces.
#[derive(Clone)]
pub struct ApiState {
    /// The reconciliation engine.
    pub engine: Arc<ReconciliationEngine>,
}

impl ApiState {
    /// Create API state around an engine.
    #[must_use]
    pub fn new(engine: Arc<ReconciliationEngine>) -> Self {
        Self { engine }
    }
}
