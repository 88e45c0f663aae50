use serde::Serialize;

use super::as_count;
use crate::fields::{FieldFilter, FieldKind, FieldSpec, FieldValue};
use crate::query::ViewSchema;
use crate::record::Record;

/// Tab that hides inactive products.
pub const ACTIVE_TAB: &str = "active";

tag_enum! {
    ProductCategory, PRODUCT_CATEGORIES {
        Coffee => "coffee", "Coffee",
        Tea => "tea", "Tea",
        Food => "food", "Food",
        Bakery => "bakery", "Bakery",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub price_cents: i64,
    pub cost_cents: i64,
    pub stock: u32,
    pub sales: u32,
    pub rating: f64,
    pub active: bool,
    pub featured: bool,
    pub image: String,
    pub description: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("id", FieldKind::Text),
    FieldSpec::new("name", FieldKind::Text),
    FieldSpec::tagged("category", PRODUCT_CATEGORIES),
    FieldSpec::new("price_cents", FieldKind::Int),
    FieldSpec::new("cost_cents", FieldKind::Int),
    // Derived from price and cost
    FieldSpec::new("profit_cents", FieldKind::Int),
    FieldSpec::new("stock", FieldKind::Int).mutable(),
    FieldSpec::new("sales", FieldKind::Int),
    FieldSpec::new("rating", FieldKind::Float),
    FieldSpec::new("active", FieldKind::Flag).mutable(),
    FieldSpec::new("featured", FieldKind::Flag).mutable(),
    FieldSpec::new("image", FieldKind::Text),
    FieldSpec::new("description", FieldKind::Text),
];

impl Product {
    pub fn profit_cents(&self) -> i64 {
        self.price_cents - self.cost_cents
    }

    /// Products page: search by name or id, partition by category, optional active-only tab.
    pub fn view_schema() -> ViewSchema {
        ViewSchema::new(&["name", "id"], "category").with_tab(
            ACTIVE_TAB,
            "Active only",
            vec![FieldFilter::eq("active", FieldValue::Flag(true))],
        )
    }
}

impl Record for Product {
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
            "price_cents" => Some(FieldValue::Int(self.price_cents)),
            "cost_cents" => Some(FieldValue::Int(self.cost_cents)),
            "profit_cents" => Some(FieldValue::Int(self.profit_cents())),
            "stock" => Some(FieldValue::Int(i64::from(self.stock))),
            "sales" => Some(FieldValue::Int(i64::from(self.sales))),
            "rating" => Some(FieldValue::Float(self.rating)),
            "active" => Some(FieldValue::Flag(self.active)),
            "featured" => Some(FieldValue::Flag(self.featured)),
            "image" => Some(FieldValue::Text(self.image.clone())),
            "description" => Some(FieldValue::Text(self.description.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Option<()> {
        match name {
            "stock" => self.stock = as_count(&value)?,
            "active" => self.active = value.as_flag()?,
            "featured" => self.featured = value.as_flag()?,
            _ => return None,
        }
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures::product;

    #[test]
    fn profit_is_derived() {
        let p = product("PRD-1", "Latte", ProductCategory::Coffee, true);
        assert_eq!(p.profit_cents(), 330);
        assert_eq!(p.get_field("profit_cents"), Some(FieldValue::Int(330)));
    }

    #[test]
    fn flags_are_settable() {
        let mut p = product("PRD-1", "Latte", ProductCategory::Coffee, true);
        p.set_field("active", FieldValue::Flag(false)).unwrap();
        p.set_field("featured", FieldValue::Flag(true)).unwrap();
        assert!(!p.active);
        assert!(p.featured);
    }

    #[test]
    fn negative_stock_is_rejected() {
        let mut p = product("PRD-1", "Latte", ProductCategory::Coffee, true);
        assert!(p.set_field("stock", FieldValue::Int(-1)).is_none());
        assert_eq!(p.stock, 0);
        p.set_field("stock", FieldValue::Int(12)).unwrap();
        assert_eq!(p.stock, 12);
    }

    #[test]
    fn profit_is_read_only() {
        let mut p = product("PRD-1", "Latte", ProductCategory::Coffee, true);
        assert!(p.set_field("profit_cents", FieldValue::Int(1)).is_none());
        assert!(!Product::field_spec("profit_cents").unwrap().mutable);
    }

    #[test]
    fn every_declared_field_is_readable() {
        let p = product("PRD-1", "Latte", ProductCategory::Coffee, true);
        for spec in Product::fields() {
            let value = p
                .get_field(spec.name)
                .unwrap_or_else(|| panic!("missing field {}", spec.name));
            assert!(spec.kind.accepts(&value), "kind mismatch on {}", spec.name);
        }
    }

    #[test]
    fn schema_declares_active_tab() {
        let schema = Product::view_schema();
        assert_eq!(schema.category_field, "category");
        assert!(schema.tab(ACTIVE_TAB).is_some());
        assert!(schema.tab("low-stock").is_none());
    }
}
