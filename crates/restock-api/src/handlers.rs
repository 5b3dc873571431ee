//! HTTP request handlers for the reconciliation API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use restock_recon::{ReconciliationOutcome, TriggerSource};

use crate::state::ApiState;

/// Response body for a manual reconciliation trigger.
#[derive(Debug, Serialize, Deserialize)]
pub struct TriggerResponse {
    /// Whether the run completed successfully.
    pub success: bool,
    /// Human-readable summary of the run.
    pub message: String,
    /// Full run report, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ReconciliationOutcome>,
    /// Failure detail, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /reconciliation/run
///
/// Runs a full reconciliation synchronously and reports the outcome.
/// The response status mirrors the run result: 200 when the run
/// completed, 500 when it failed or was rejected because another run
/// holds the engine.
pub async fn trigger_reconciliation(
    State(state): State<ApiState>,
) -> (StatusCode, Json<TriggerResponse>) {
    info!("manual reconciliation triggered over HTTP");

    let outcome: ReconciliationOutcome = state.engine.run(TriggerSource::Manual).await;

    if outcome.success {
        info!(
            inventory_updates = outcome.inventory_updates_applied,
            products_deleted = outcome.products_deleted,
            "manual reconciliation completed"
        );
        let response = TriggerResponse {
            success: true,
            message: "Reconciliation completed".to_string(),
            result: Some(outcome),
            error: None,
        };
        (StatusCode::OK, Json(response))
    } else {
        let detail = outcome
            .error
            .clone()
            .unwrap_or_else(|| "unknown error".to_string());
        error!(error = %detail, "manual reconciliation failed");
        let response = TriggerResponse {
            success: false,
            message: "Reconciliation failed".to_string(),
            result: None,
            error: Some(detail),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(response))
    }
}
