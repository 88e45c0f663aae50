use serde::Serialize;

use super::as_count;
use crate::fields::{FieldFilter, FieldKind, FieldSpec, FieldValue};
use crate::query::ViewSchema;
use crate::record::Record;
use crate::status::{HasStockLevels, StockLevels};

/// Tab listing items at or below their reorder level.
pub const LOW_STOCK_TAB: &str = "low-stock";

tag_enum! {
    InventoryCategory, INVENTORY_CATEGORIES {
        Beans => "beans", "Coffee Beans",
        Dairy => "dairy", "Dairy Products",
        Syrups => "syrups", "Syrups",
        Supplies => "supplies", "Supplies",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: InventoryCategory,
    pub stock: u32,
    pub unit: String,
    pub min_level: u32,
    pub max_level: u32,
    pub reorder_level: u32,
    pub supplier: String,
    /// `YYYY-MM-DD`
    pub last_ordered: String,
    /// Unit price as displayed, e.g. `$15.99/lb`
    pub price: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", FieldKind::Text),
    FieldSpec::new("name", FieldKind::Text),
    FieldSpec::tagged("category", INVENTORY_CATEGORIES),
    FieldSpec::new("stock", FieldKind::Int).mutable(),
    FieldSpec::new("unit", FieldKind::Text),
    FieldSpec::new("min_level", FieldKind::Int).mutable(),
    FieldSpec::new("max_level", FieldKind::Int).mutable(),
    FieldSpec::new("reorder_level", FieldKind::Int).mutable(),
    FieldSpec::new("supplier", FieldKind::Text),
    FieldSpec::new("last_ordered", FieldKind::Date).mutable(),
    FieldSpec::new("price", FieldKind::Text),
];

impl InventoryItem {
    /// Inventory page: search by name or id, partition by category, low-stock tab.
    pub fn view_schema() -> ViewSchema {
        ViewSchema::new(&["name", "id"], "category").with_tab(
            LOW_STOCK_TAB,
            "Low Stock",
            vec![FieldFilter::at_most_field("stock", "reorder_level")],
        )
    }
}

impl HasStockLevels for InventoryItem {
    fn stock_levels(&self) -> StockLevels {
        StockLevels {
            stock: self.stock,
            reorder_level: self.reorder_level,
            min_level: self.min_level,
            max_level: self.max_level,
        }
    }
}

impl Record for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "category" => Some(FieldValue::Tag(self.category.as_str().to_string())),
            "stock" => Some(FieldValue::Int(i64::from(self.stock))),
            "unit" => Some(FieldValue::Text(self.unit.clone())),
            "min_level" => Some(FieldValue::Int(i64::from(self.min_level))),
            "max_level" => Some(FieldValue::Int(i64::from(self.max_level))),
            "reorder_level" => Some(FieldValue::Int(i64::from(self.reorder_level))),
            "supplier" => Some(FieldValue::Text(self.supplier.clone())),
            "last_ordered" => Some(FieldValue::Date(self.last_ordered.clone())),
            "price" => Some(FieldValue::Text(self.price.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Option<()> {
        match name {
            "stock" => self.stock = as_count(&value)?,
            "min_level" => self.min_level = as_count(&value)?,
            "max_level" => self.max_level = as_count(&value)?,
            "reorder_level" => self.reorder_level = as_count(&value)?,
            "last_ordered" => self.last_ordered = value.as_date()?.to_string(),
            _ => return None,
        }
        Some(())
    }
}
