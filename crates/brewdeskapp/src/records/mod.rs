//! # Café Records
//!
//! The four collections the back office works with. Each type implements
//! [`Record`](crate::record::Record), declares its field table and provides
//! the [`ViewSchema`](crate::query::ViewSchema) its page uses:
//!
//! | Record | Search fields | Category field | Tabs |
//! |--------|---------------|----------------|------|
//! | [`Order`] | customer, id | status | - |
//! | [`Product`] | name, id | category | `active` |
//! | [`Customer`] | name, email, id | tier | - |
//! | [`InventoryItem`] | name, id | category | `low-stock` |
//!
//! Money is held in integer cents. Dates are kept as the strings the
//! seed uses and parsed on demand by the aggregator.
//!
//! [`seed`] holds the session's starting data.

/// Declares a closed tag set: the enum, its string tags and display labels.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $tags:ident {
            $($variant:ident => $tag:literal, $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $tag)] $variant),+
        }

        /// Every tag of the set, in display order.
        pub const $tags: &[&str] = &[$($tag),+];

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(format!(
                        "unknown {} '{}' (expected one of: {})",
                        stringify!($name),
                        other,
                        $tags.join(", ")
                    )),
                }
            }
        }
    };
}

mod customer;
mod inventory;
mod order;
mod product;
pub mod seed;

pub use customer::{Customer, CustomerTier, CUSTOMER_TIERS};
pub use inventory::{InventoryCategory, InventoryItem, INVENTORY_CATEGORIES, LOW_STOCK_TAB};
pub use order::{Order, OrderStatus, ORDER_STATUSES};
pub use product::{Product, ProductCategory, ACTIVE_TAB, PRODUCT_CATEGORIES};

/// Parse an `Int` field value into an unsigned count. Negative values don't fit.
pub(crate) fn as_count(value: &crate::fields::FieldValue) -> Option<u32> {
    u32::try_from(value.as_int()?).ok()
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn inventory_item(
        id: &str,
        category: InventoryCategory,
        stock: u32,
        reorder_level: u32,
        min_level: u32,
        max_level: u32,
    ) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            category,
            stock,
            unit: "pcs".to_string(),
            min_level,
            max_level,
            reorder_level,
            supplier: "Test Supply".to_string(),
            last_ordered: "2024-03-25".to_string(),
            price: "$1.00/pc".to_string(),
        }
    }

    pub fn product(id: &str, name: &str, category: ProductCategory, active: bool) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category,
            price_cents: 450,
            cost_cents: 120,
            stock: 0,
            sales: 100,
            rating: 4.5,
            active,
            featured: false,
            image: String::new(),
            description: format!("{name} description"),
        }
    }

    pub fn customer(id: &str, last_order: &str, tier: CustomerTier) -> Customer {
        Customer {
            id: id.to_string(),
            name: format!("Customer {id}"),
            email: format!("{}@example.com", id.to_lowercase()),
            phone: "(555) 000-0000".to_string(),
            last_order: last_order.to_string(),
            total_spent_cents: 10_000,
            order_count: 10,
            tier,
        }
    }

    pub fn order(id: &str, customer: &str, date: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer: customer.to_string(),
            date: date.to_string(),
            items: 1,
            total_cents: 500,
            status,
        }
    }
}
