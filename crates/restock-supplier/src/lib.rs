//! # restock-supplier
//!
//! Supplier feed domain for the restock reconciliation engine:
//!
//! - Wire payload types and the parse-and-validate step that turns the
//!   loosely typed feed into [`SupplierRecord`]s
//! - The [`SupplierFeed`] trait and its reqwest-based HTTP client
//! - [`SnapshotIndex`], the known-identifier set and eligible-record map
//!   the reconciler diffs against
//!
//! The feed is the external system of record for stock quantity and
//! price. It is queried exactly once per reconciliation run; any failure
//! to obtain a complete snapshot is fatal to that run, because
//! reconciling against truncated data would cause false deletions.

pub mod client;
pub mod config;
pub mod error;
pub mod index;
pub mod record;

pub use client::{HttpSupplierFeed, SupplierFeed};
pub use config::FeedConfig;
pub use error::{FeedError, FeedResult};
pub use index::SnapshotIndex;
pub use record::{AvailabilityClass, FeedItem, FeedResponse, SupplierRecord};
