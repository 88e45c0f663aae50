//! # View Façade
//!
//! [`query_view`] is what a presentation layer calls: a query descriptor in,
//! the matching records plus the full-store category counts out. It reads
//! the store and nothing else; the records it returns are snapshots.

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{counts_by, TagCounts};
use crate::query::{compose, QueryDescriptor, ViewSchema};
use crate::record::Record;
use crate::store::RecordStore;

#[derive(Debug, Clone, Serialize)]
pub struct ViewResult<R> {
    /// Matching records in store order
    pub records: Vec<R>,
    /// Category counts over the whole store, independent of the query
    pub counts: TagCounts,
}

impl<R> ViewResult<R> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn query_view<R: Record>(
    store: &RecordStore<R>,
    schema: &ViewSchema,
    query: &QueryDescriptor,
) -> ViewResult<R> {
    let predicate = compose(query, schema);
    let records: Vec<R> = store
        .iter()
        .filter(|r| predicate.matches(*r))
        .cloned()
        .collect();
    let counts = counts_by(store, schema.category_field);

    debug!(
        free_text = %query.free_text,
        category = ?query.category,
        tab = ?query.tab,
        matched = records.len(),
        total = store.len(),
        "view query"
    );

    ViewResult { records, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ALL;
    use crate::records::fixtures::{inventory_item, product};
    use crate::records::{InventoryCategory, InventoryItem, Product, ProductCategory};
    use crate::status::{HasStockLevels, StockTag};

    fn inventory() -> RecordStore<InventoryItem> {
        RecordStore::new(vec![
            inventory_item("INV-1", InventoryCategory::Beans, 5, 3, 4, 10),
            inventory_item("INV-2", InventoryCategory::Dairy, 3, 3, 4, 10),
            inventory_item("INV-3", InventoryCategory::Syrups, 0, 0, 0, 0),
        ])
        .unwrap()
    }

    fn ids<R: Record>(result: &ViewResult<R>) -> Vec<&str> {
        result.records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn unrestricted_query_returns_everything_in_order() {
        let store = inventory();
        let query = QueryDescriptor::new().with_category(ALL);
        let result = query_view(&store, &InventoryItem::view_schema(), &query);

        assert_eq!(ids(&result), vec!["INV-1", "INV-2", "INV-3"]);
        let sum: usize = result.counts.tags().map(|e| e.count).sum();
        assert_eq!(sum, 3);
        assert_eq!(result.counts.total(), 3);
    }

    #[test]
    fn inventory_example_statuses() {
        let store = inventory();
        let result = query_view(&store, &InventoryItem::view_schema(), &QueryDescriptor::new());
        let statuses: Vec<_> = result.records.iter().map(|i| i.stock_status()).collect();

        assert_eq!(statuses[0].tag, StockTag::Ok);
        assert_eq!(statuses[1].tag, StockTag::Low);
        assert_eq!(statuses[2].tag, StockTag::Low);
        assert_eq!(statuses[2].percentage, 0.0);
    }

    #[test]
    fn counts_ignore_the_active_filter() {
        let store = inventory();
        let query = QueryDescriptor::new().with_category("dairy");
        let result = query_view(&store, &InventoryItem::view_schema(), &query);

        assert_eq!(ids(&result), vec!["INV-2"]);
        assert_eq!(result.counts.get("beans"), Some(1));
        assert_eq!(result.counts.get("syrups"), Some(1));
        assert_eq!(result.counts.total(), 3);
    }

    #[test]
    fn latte_search_returns_only_latte() {
        let store = RecordStore::new(vec![
            product("PRD-001", "Latte", ProductCategory::Coffee, true),
            product("PRD-002", "Cappuccino", ProductCategory::Coffee, true),
        ])
        .unwrap();
        let result = query_view(
            &store,
            &Product::view_schema(),
            &QueryDescriptor::search("latte"),
        );
        assert_eq!(ids(&result), vec!["PRD-001"]);
    }

    #[test]
    fn no_match_is_an_empty_result_not_an_error() {
        let store = inventory();
        let result = query_view(
            &store,
            &InventoryItem::view_schema(),
            &QueryDescriptor::search("saffron"),
        );
        assert!(result.is_empty());
        assert_eq!(result.counts.total(), 3);
    }

    #[test]
    fn same_query_same_result() {
        let store = inventory();
        let query = QueryDescriptor::search("inv").with_tab("low-stock");
        let a = query_view(&store, &InventoryItem::view_schema(), &query);
        let b = query_view(&store, &InventoryItem::view_schema(), &query);
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(a.counts, b.counts);
    }

    #[test]
    fn query_view_on_empty_store() {
        let store: RecordStore<InventoryItem> = RecordStore::default();
        let result = query_view(&store, &InventoryItem::view_schema(), &QueryDescriptor::new());
        assert!(result.is_empty());
        assert_eq!(result.counts.total(), 0);
    }
}
