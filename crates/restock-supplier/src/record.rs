//! Supplier snapshot records.
//!
//! The feed payload is loosely typed (quantities arrive as strings, the
//! availability classification as a free-form string), so the wire shape
//! is kept separate from the domain record and converted through an
//! explicit parse step.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Availability classification of a supplier record.
///
/// Only `DualChannel` records are eligible for sync. `RetailOnly` is an
/// explicit signal that any local product keyed to the record should be
/// removed. Every other (or absent) value is treated as not present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityClass {
    /// Sold through both channels; eligible for sync.
    DualChannel,
    /// Retail channel only; explicitly ineligible.
    RetailOnly,
    /// Unknown or absent classification.
    Other,
}

impl AvailabilityClass {
    /// Map the wire value onto the classification.
    ///
    /// Comparison is case-sensitive; the feed contract defines exactly
    /// two meaningful values.
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("Both") => Self::DualChannel,
            Some("Retail") => Self::RetailOnly,
            _ => Self::Other,
        }
    }

    /// Whether records with this classification may be synced locally.
    #[must_use]
    pub fn is_eligible(self) -> bool {
        matches!(self, Self::DualChannel)
    }
}

impl std::fmt::Display for AvailabilityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DualChannel => write!(f, "dual_channel"),
            Self::RetailOnly => write!(f, "retail_only"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One line item as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Supplier's stable product code.
    pub upc_code: String,
    /// Display name.
    #[serde(default)]
    pub product_name: String,
    /// Stock quantity, sent as a string.
    #[serde(default)]
    pub quantity: String,
    /// List price.
    #[serde(default)]
    pub price: Decimal,
    /// Wholesale price, tier 1.
    #[serde(default)]
    pub wholesale_price_1: Decimal,
    /// Wholesale price, tier 2.
    #[serde(default)]
    pub wholesale_price_2: Decimal,
    /// Wholesale price, tier 3.
    #[serde(default)]
    pub wholesale_price_3: Decimal,
    /// Product category.
    #[serde(default)]
    pub category: Option<String>,
    /// Product subcategory.
    #[serde(default)]
    pub sub_category: Option<String>,
    /// Availability classification, compared case-sensitively.
    #[serde(default)]
    pub product_availability_type: Option<String>,
}

/// Response body of the supplier inventory endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    /// All records in the snapshot.
    pub data: Vec<FeedItem>,
}

/// A parsed, validated supplier record.
///
/// Constructed fresh per run and immutable for its duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    /// Supplier's stable product code, matched against local SKUs.
    pub external_id: String,
    /// Display name.
    pub display_name: String,
    /// Non-negative stock quantity.
    pub quantity: u32,
    /// List price.
    pub list_price: Decimal,
    /// Wholesale price tiers.
    pub wholesale_tier_1: Decimal,
    pub wholesale_tier_2: Decimal,
    pub wholesale_tier_3: Decimal,
    /// Product category.
    pub category: Option<String>,
    /// Product subcategory.
    pub subcategory: Option<String>,
    /// Availability classification.
    pub availability: AvailabilityClass,
}

impl FeedItem {
    /// Parse the wire item into a domain record.
    ///
    /// An unparsable quantity is coerced to `0` rather than rejecting the
    /// record: dropping it would remove the id from the eligible index and
    /// a single malformed digit in the feed could cascade into deleting
    /// the local product. Zero stock is the conservative state.
    #[must_use]
    pub fn into_record(self) -> SupplierRecord {
        let quantity = match self.quantity.trim().parse::<u32>() {
            Ok(q) => q,
            Err(_) => {
                warn!(
                    external_id = %self.upc_code,
                    raw_quantity = %self.quantity,
                    "unparsable feed quantity, coercing to 0"
                );
                0
            }
        };

        SupplierRecord {
            external_id: self.upc_code,
            display_name: self.product_name,
            quantity,
            list_price: self.price,
            wholesale_tier_1: self.wholesale_price_1,
            wholesale_tier_2: self.wholesale_price_2,
            wholesale_tier_3: self.wholesale_price_3,
            category: self.category,
            subcategory: self.sub_category,
            availability: AvailabilityClass::from_wire(self.product_availability_type.as_deref()),
        }
    }
}
