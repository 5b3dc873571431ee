//! Snapshot indexing.
//!
//! Builds the two lookup structures the reconciler needs from one
//! snapshot: the set of every identifier the supplier knows about, and
//! the map of identifiers eligible for sync. The distinction between
//! "absent entirely" and "present but ineligible" drives two different
//! deletion reasons downstream.

use std::collections::{HashMap, HashSet};

use crate::record::SupplierRecord;

/// Lookup structures derived from one supplier snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotIndex {
    /// Every external id present anywhere in the snapshot.
    known: HashSet<String>,
    /// Eligible records by external id.
    eligible: HashMap<String, SupplierRecord>,
}

impl SnapshotIndex {
    /// Build the index from a snapshot.
    ///
    /// Supplier feeds are assumed de-duplicated; if an id does repeat,
    /// the last record wins.
    #[must_use]
    pub fn build(records: Vec<SupplierRecord>) -> Self {
        let mut index = Self::default();
        for record in records {
            index.known.insert(record.external_id.clone());
            if record.availability.is_eligible() {
                index.eligible.insert(record.external_id.clone(), record);
            } else {
                index.eligible.remove(&record.external_id);
            }
        }
        index
    }

    /// Whether the supplier knows this identifier at all.
    #[must_use]
    pub fn is_known(&self, external_id: &str) -> bool {
        self.known.contains(external_id)
    }

    /// Look up the eligible record for an identifier.
    #[must_use]
    pub fn eligible(&self, external_id: &str) -> Option<&SupplierRecord> {
        self.eligible.get(external_id)
    }

    /// Number of distinct identifiers in the snapshot.
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    /// Number of eligible records.
    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.eligible.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AvailabilityClass;
    use rust_decimal::Decimal;

    fn record(id: &str, quantity: u32, availability: AvailabilityClass) -> SupplierRecord {
        SupplierRecord {
            external_id: id.to_string(),
            display_name: format!("Item {id}"),
            quantity,
            list_price: Decimal::ZERO,
            wholesale_tier_1: Decimal::ZERO,
            wholesale_tier_2: Decimal::ZERO,
            wholesale_tier_3: Decimal::ZERO,
            category: None,
            subcategory: None,
            availability,
        }
    }

    #[test]
    fn test_eligibility_partition() {
        let index = SnapshotIndex::build(vec![
            record("A1", 5, AvailabilityClass::DualChannel),
            record("B2", 3, AvailabilityClass::RetailOnly),
            record("C3", 1, AvailabilityClass::Other),
        ]);

        assert_eq!(index.known_count(), 3);
        assert_eq!(index.eligible_count(), 1);

        assert!(index.is_known("A1"));
        assert!(index.is_known("B2"));
        assert!(index.is_known("C3"));

        assert!(index.eligible("A1").is_some());
        assert!(index.eligible("B2").is_none());
        assert!(index.eligible("C3").is_none());
    }

    #[test]
    fn test_eligible_keys_are_always_known() {
        let index = SnapshotIndex::build(vec![
            record("A1", 5, AvailabilityClass::DualChannel),
            record("B2", 0, AvailabilityClass::DualChannel),
        ]);
        for id in ["A1", "B2"] {
            assert!(index.eligible(id).is_some());
            assert!(index.is_known(id));
        }
    }

    #[test]
    fn test_duplicate_identifier_last_record_wins() {
        let index = SnapshotIndex::build(vec![
            record("A1", 5, AvailabilityClass::DualChannel),
            record("A1", 9, AvailabilityClass::DualChannel),
        ]);
        assert_eq!(index.known_count(), 1);
        assert_eq!(index.eligible("A1").map(|r| r.quantity), Some(9));
    }

    #[test]
    fn test_duplicate_eligibility_flip_follows_last_record() {
        let index = SnapshotIndex::build(vec![
            record("A1", 5, AvailabilityClass::RetailOnly),
            record("A1", 9, AvailabilityClass::DualChannel),
        ]);
        assert!(index.is_known("A1"));
        assert_eq!(index.eligible("A1").map(|r| r.quantity), Some(9));

        let index = SnapshotIndex::build(vec![
            record("A1", 5, AvailabilityClass::DualChannel),
            record("A1", 9, AvailabilityClass::RetailOnly),
        ]);
        assert!(index.is_known("A1"));
        assert!(index.eligible("A1").is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let index = SnapshotIndex::build(Vec::new());
        assert_eq!(index.known_count(), 0);
        assert_eq!(index.eligible_count(), 0);
        assert!(!index.is_known("A1"));
    }
}
