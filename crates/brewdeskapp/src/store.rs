//! # Record Store
//!
//! A [`RecordStore`] owns one session's ordered collection of records of a
//! single type. It is created once from a seed and lives as long as the
//! session that owns it.
//!
//! ## Mutation
//!
//! The only mutation is a targeted field write by identifier:
//!
//! - the record keeps its position in the sequence
//! - no record is added, removed or duplicated
//! - only the named field changes
//!
//! Unknown ids fail with [`DeskError::NotFound`] and leave the store as it
//! was. Field names the record type does not declare, read-only fields and
//! values of the wrong kind fail with [`DeskError::InvalidField`], also
//! without touching the store.
//!
//! Reads hand out borrowed slices; the view layer clones the records it
//! returns, so callers only ever change records through this type.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{DeskError, Result};
use crate::fields::FieldValue;
use crate::record::Record;

#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    /// Build a store from a seed collection. Ids must be unique.
    pub fn new(seed: Vec<R>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for record in &seed {
            if !seen.insert(record.id()) {
                return Err(DeskError::DuplicateId(record.id().to_string()));
            }
        }
        Ok(Self { records: seed })
    }

    /// All records, in seed order.
    pub fn get_all(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&R> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| DeskError::NotFound(id.to_string()))
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DeskError::NotFound(id.to_string()))
    }

    /// Replace one field of one record, returning the updated record.
    pub fn update_field(&mut self, id: &str, field: &str, value: FieldValue) -> Result<R> {
        let index = self.position(id)?;

        let spec = R::field_spec(field)
            .ok_or_else(|| DeskError::invalid_field(field, "no such field"))?;
        spec.validate(&value)
            .map_err(|reason| DeskError::invalid_field(field, reason))?;

        // Write into a copy so a rejected value can't leave a half-updated record
        let mut updated = self.records[index].clone();
        updated
            .set_field(field, value)
            .ok_or_else(|| DeskError::invalid_field(field, "value rejected by record"))?;

        debug!(id, field, position = index, "record field updated");
        self.records[index] = updated.clone();
        Ok(updated)
    }

    /// Flip a `Flag` field. This is what an on/off switch in the UI calls.
    pub fn toggle_flag(&mut self, id: &str, field: &str) -> Result<R> {
        let current = self
            .get(id)?
            .get_field(field)
            .ok_or_else(|| DeskError::invalid_field(field, "no such field"))?;
        let flag = current
            .as_flag()
            .ok_or_else(|| DeskError::invalid_field(field, "not a flag field"))?;
        self.update_field(id, field, FieldValue::Flag(!flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures::{inventory_item, product};
    use crate::records::{InventoryCategory, InventoryItem, Product, ProductCategory};

    fn product_store() -> RecordStore<Product> {
        RecordStore::new(vec![
            product("PRD-001", "Espresso", ProductCategory::Coffee, true),
            product("PRD-002", "Green Tea", ProductCategory::Tea, true),
            product("PRD-003", "Muffin", ProductCategory::Bakery, false),
        ])
        .unwrap()
    }

    fn ids<R: Record>(store: &RecordStore<R>) -> Vec<String> {
        store.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = RecordStore::new(vec![
            inventory_item("INV-1", InventoryCategory::Beans, 1, 0, 0, 1),
            inventory_item("INV-1", InventoryCategory::Dairy, 1, 0, 0, 1),
        ]);
        match result {
            Err(DeskError::DuplicateId(id)) => assert_eq!(id, "INV-1"),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn empty_store() {
        let store: RecordStore<InventoryItem> = RecordStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn update_field_preserves_order_and_count() {
        let mut store = product_store();
        let before = ids(&store);

        let updated = store
            .update_field("PRD-002", "active", FieldValue::Flag(false))
            .unwrap();
        assert!(!updated.active);

        assert_eq!(ids(&store), before);
        assert_eq!(store.len(), 3);
        assert!(!store.get("PRD-002").unwrap().active);
    }

    #[test]
    fn update_field_leaves_other_fields_untouched() {
        let mut store = product_store();
        let original = store.get("PRD-001").unwrap().clone();

        store
            .update_field("PRD-001", "featured", FieldValue::Flag(true))
            .unwrap();

        let after = store.get("PRD-001").unwrap();
        assert!(after.featured);
        assert_eq!(after.name, original.name);
        assert_eq!(after.category, original.category);
        assert_eq!(after.active, original.active);
        assert_eq!(after.price_cents, original.price_cents);
        // Neighbours are untouched too
        assert!(!store.get("PRD-002").unwrap().featured);
    }

    #[test]
    fn update_field_unknown_id_is_not_found() {
        let mut store = product_store();
        let before: Vec<_> = store.get_all().to_vec();

        match store.update_field("PRD-999", "active", FieldValue::Flag(false)) {
            Err(DeskError::NotFound(id)) => assert_eq!(id, "PRD-999"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert_eq!(store.len(), before.len());
        for (a, b) in store.iter().zip(before.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.active, b.active);
        }
    }

    #[test]
    fn update_field_rejects_unknown_field() {
        let mut store = product_store();
        let err = store
            .update_field("PRD-001", "colour", FieldValue::Text("red".into()))
            .unwrap_err();
        assert!(matches!(err, DeskError::InvalidField { ref field, .. } if field == "colour"));
    }

    #[test]
    fn update_field_rejects_read_only_id() {
        let mut store = product_store();
        let err = store
            .update_field("PRD-001", "id", FieldValue::Text("PRD-002".into()))
            .unwrap_err();
        assert!(matches!(err, DeskError::InvalidField { .. }));
        assert!(store.get("PRD-001").is_ok());
    }

    #[test]
    fn update_field_rejects_wrong_kind() {
        let mut store = product_store();
        let err = store
            .update_field("PRD-001", "active", FieldValue::Int(0))
            .unwrap_err();
        assert!(matches!(err, DeskError::InvalidField { .. }));
        assert!(store.get("PRD-001").unwrap().active);
    }

    #[test]
    fn update_field_rejects_unreadable_date() {
        use crate::records::fixtures::customer;
        use crate::records::CustomerTier;

        let mut store =
            RecordStore::new(vec![customer("CUST-1", "2024-04-01", CustomerTier::Gold)]).unwrap();
        let err = store
            .update_field("CUST-1", "last_order", FieldValue::Date("garbage".into()))
            .unwrap_err();
        assert!(matches!(err, DeskError::InvalidField { ref field, .. } if field == "last_order"));
        assert_eq!(store.get("CUST-1").unwrap().last_order, "2024-04-01");
    }

    #[test]
    fn toggle_flag_flips_and_flips_back() {
        let mut store = product_store();
        assert!(!store.toggle_flag("PRD-001", "active").unwrap().active);
        assert!(store.toggle_flag("PRD-001", "active").unwrap().active);
        assert!(store.toggle_flag("PRD-003", "active").unwrap().active);
    }

    #[test]
    fn toggle_flag_rejects_non_flag() {
        let mut store = product_store();
        let err = store.toggle_flag("PRD-001", "name").unwrap_err();
        assert!(matches!(err, DeskError::InvalidField { .. }));
    }

    #[test]
    fn toggle_flag_unknown_id_is_not_found() {
        let mut store = product_store();
        assert!(matches!(
            store.toggle_flag("nope", "active"),
            Err(DeskError::NotFound(_))
        ));
    }
}
