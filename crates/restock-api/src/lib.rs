//! # restock-api
//!
//! HTTP trigger surface for the inventory reconciliation engine.
//!
//! Exposes a single endpoint, `POST /reconciliation/run`, which runs a
//! full reconciliation synchronously and returns the run report. The
//! router is mounted by the host application and shares its
//! [`restock_recon::ReconciliationEngine`] with the daily scheduler and
//! the internal event listener.

pub mod handlers;
pub mod router;
pub mod state;

pub use handlers::TriggerResponse;
pub use router::reconciliation_router;
pub use state::ApiState;
