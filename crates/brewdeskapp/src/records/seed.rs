//! Starting data for a back-office session.
//!
//! Every session begins from these collections; nothing is persisted, so
//! edits made through the API are gone when the session ends.

use super::*;
use crate::dashboard::SalesPoint;

fn order(
    id: &str,
    customer: &str,
    date: &str,
    items: u32,
    total_cents: i64,
    status: OrderStatus,
) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        date: date.to_string(),
        items,
        total_cents,
        status,
    }
}

#[rustfmt::skip]
pub fn orders() -> Vec<Order> {
    use OrderStatus::*;
    vec![
        order("ORD-2024-1429", "Alex Johnson", "2024-04-03 08:15 AM", 3, 1875, Delivered),
        order("ORD-2024-1428", "Maria Garcia", "2024-04-03 08:02 AM", 2, 950, Processing),
        order("ORD-2024-1427", "Sam Taylor", "2024-04-03 07:48 AM", 4, 2430, Pending),
        order("ORD-2024-1426", "Olivia Chen", "2024-04-03 07:36 AM", 1, 525, Delivered),
        order("ORD-2024-1425", "James Williams", "2024-04-03 07:15 AM", 3, 1680, Delivered),
        order("ORD-2024-1424", "Emma Rodriguez", "2024-04-02 05:52 PM", 2, 1250, Canceled),
        order("ORD-2024-1423", "Noah Brown", "2024-04-02 05:30 PM", 5, 3215, Delivered),
        order("ORD-2024-1422", "Sophia Martinez", "2024-04-02 04:45 PM", 2, 1075, Processing),
        order("ORD-2024-1421", "Liam Wilson", "2024-04-02 04:22 PM", 3, 1590, Delivered),
        order("ORD-2024-1420", "Isabella Lopez", "2024-04-02 03:58 PM", 1, 625, Pending),
    ]
}

struct ProductRow {
    id: &'static str,
    name: &'static str,
    category: ProductCategory,
    price_cents: i64,
    cost_cents: i64,
    stock: u32,
    sales: u32,
    rating: f64,
    active: bool,
    featured: bool,
    image: &'static str,
    description: &'static str,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id.to_string(),
            name: row.name.to_string(),
            category: row.category,
            price_cents: row.price_cents,
            cost_cents: row.cost_cents,
            stock: row.stock,
            sales: row.sales,
            rating: row.rating,
            active: row.active,
            featured: row.featured,
            image: row.image.to_string(),
            description: row.description.to_string(),
        }
    }
}

pub fn products() -> Vec<Product> {
    use ProductCategory::*;
    [
        ProductRow {
            id: "PRD-001",
            name: "Espresso",
            category: Coffee,
            price_cents: 350,
            cost_cents: 85,
            stock: 0,
            sales: 842,
            rating: 4.8,
            active: true,
            featured: true,
            image: "/coffee1.jpg",
            description: "Rich, full-bodied espresso shot",
        },
        ProductRow {
            id: "PRD-002",
            name: "Cappuccino",
            category: Coffee,
            price_cents: 475,
            cost_cents: 125,
            stock: 0,
            sales: 756,
            rating: 4.7,
            active: true,
            featured: true,
            image: "/coffee2.jpg",
            description: "Equal parts espresso, steamed milk, and milk foam",
        },
        ProductRow {
            id: "PRD-003",
            name: "Latte",
            category: Coffee,
            price_cents: 495,
            cost_cents: 135,
            stock: 0,
            sales: 912,
            rating: 4.9,
            active: true,
            featured: true,
            image: "/coffee3.jpg",
            description: "Espresso with steamed milk and a light layer of foam",
        },
        ProductRow {
            id: "PRD-004",
            name: "Cold Brew",
            category: Coffee,
            price_cents: 450,
            cost_cents: 110,
            stock: 48,
            sales: 634,
            rating: 4.6,
            active: true,
            featured: false,
            image: "/coffee4.jpg",
            description: "12-hour steeped cold brew coffee",
        },
        ProductRow {
            id: "PRD-005",
            name: "Green Tea",
            category: Tea,
            price_cents: 395,
            cost_cents: 75,
            stock: 35,
            sales: 428,
            rating: 4.4,
            active: true,
            featured: false,
            image: "/tea1.jpg",
            description: "Japanese green tea, delicate and refreshing",
        },
        ProductRow {
            id: "PRD-006",
            name: "Earl Grey Tea",
            category: Tea,
            price_cents: 375,
            cost_cents: 65,
            stock: 42,
            sales: 385,
            rating: 4.3,
            active: true,
            featured: false,
            image: "/tea2.jpg",
            description: "Black tea infused with bergamot oil",
        },
        ProductRow {
            id: "PRD-007",
            name: "Avocado Toast",
            category: Food,
            price_cents: 895,
            cost_cents: 325,
            stock: 12,
            sales: 245,
            rating: 4.7,
            active: true,
            featured: true,
            image: "/food1.jpg",
            description: "Smashed avocado on artisan sourdough with chili flakes",
        },
        ProductRow {
            id: "PRD-008",
            name: "Breakfast Sandwich",
            category: Food,
            price_cents: 795,
            cost_cents: 285,
            stock: 8,
            sales: 312,
            rating: 4.6,
            active: true,
            featured: false,
            image: "/food2.jpg",
            description: "Egg, cheese, and bacon on a toasted bagel",
        },
        ProductRow {
            id: "PRD-009",
            name: "Chocolate Croissant",
            category: Bakery,
            price_cents: 425,
            cost_cents: 145,
            stock: 15,
            sales: 486,
            rating: 4.8,
            active: true,
            featured: true,
            image: "/bakery1.jpg",
            description: "Buttery croissant with rich chocolate filling",
        },
        ProductRow {
            id: "PRD-010",
            name: "Blueberry Muffin",
            category: Bakery,
            price_cents: 395,
            cost_cents: 125,
            stock: 18,
            sales: 354,
            rating: 4.5,
            active: true,
            featured: false,
            image: "/bakery2.jpg",
            description: "Moist muffin packed with fresh blueberries",
        },
        ProductRow {
            id: "PRD-011",
            name: "Seasonal Latte",
            category: Coffee,
            price_cents: 550,
            cost_cents: 165,
            stock: 0,
            sales: 124,
            rating: 4.2,
            active: false,
            featured: false,
            image: "/coffee5.jpg",
            description: "Limited edition seasonal flavored latte",
        },
        ProductRow {
            id: "PRD-012",
            name: "Cinnamon Roll",
            category: Bakery,
            price_cents: 450,
            cost_cents: 135,
            stock: 0,
            sales: 278,
            rating: 4.7,
            active: false,
            featured: false,
            image: "/bakery3.jpg",
            description: "Freshly baked cinnamon roll with cream cheese frosting",
        },
    ]
    .into_iter()
    .map(Product::from)
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    last_order: &str,
    total_spent_cents: i64,
    order_count: u32,
    tier: CustomerTier,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        last_order: last_order.to_string(),
        total_spent_cents,
        order_count,
        tier,
    }
}

#[rustfmt::skip]
pub fn customers() -> Vec<Customer> {
    use CustomerTier::*;
    vec![
        customer("CUST-001", "Emma Johnson", "emma.j@example.com", "(555) 123-4567", "2024-03-28", 48575, 42, Gold),
        customer("CUST-002", "Michael Chen", "mchen@example.com", "(555) 987-6543", "2024-04-01", 27930, 23, Silver),
        customer("CUST-003", "Sophia Rodriguez", "sophia.r@example.com", "(555) 234-5678", "2024-04-02", 72840, 65, Platinum),
        customer("CUST-004", "James Wilson", "jwilson@example.com", "(555) 345-6789", "2024-03-15", 14215, 13, Bronze),
        customer("CUST-005", "Olivia Kim", "olivia.k@example.com", "(555) 456-7890", "2024-04-03", 56390, 48, Gold),
    ]
}

/// `(stock, min, max, reorder)` as listed on the inventory sheet.
type Levels = (u32, u32, u32, u32);

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    category: InventoryCategory,
    unit: &str,
    (stock, min_level, max_level, reorder_level): Levels,
    supplier: &str,
    last_ordered: &str,
    price: &str,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        stock,
        unit: unit.to_string(),
        min_level,
        max_level,
        reorder_level,
        supplier: supplier.to_string(),
        last_ordered: last_ordered.to_string(),
        price: price.to_string(),
    }
}

#[rustfmt::skip]
pub fn inventory() -> Vec<InventoryItem> {
    use InventoryCategory::*;
    vec![
        item("INV-001", "Colombian Coffee Beans", Beans, "lb", (25, 20, 100, 15), "Coffee Farms Inc.", "2024-03-15", "$15.99/lb"),
        item("INV-002", "Ethiopian Coffee Beans", Beans, "lb", (42, 30, 100, 20), "Global Bean Co.", "2024-03-20", "$18.50/lb"),
        item("INV-003", "Organic Whole Milk", Dairy, "gal", (12, 15, 50, 10), "Local Dairy", "2024-04-01", "$5.99/gal"),
        item("INV-004", "Almond Milk", Dairy, "gal", (8, 10, 30, 5), "Plant Basics", "2024-03-28", "$7.50/gal"),
        item("INV-005", "Vanilla Syrup", Syrups, "bottles", (5, 8, 20, 3), "Flavor Co.", "2024-03-10", "$12.99/bottle"),
        item("INV-006", "Caramel Syrup", Syrups, "bottles", (7, 8, 20, 3), "Flavor Co.", "2024-03-10", "$12.99/bottle"),
        item("INV-007", "To-Go Cups (12oz)", Supplies, "pcs", (350, 300, 1000, 200), "Supply Chain Inc.", "2024-03-25", "$0.15/pc"),
        item("INV-008", "To-Go Cups (16oz)", Supplies, "pcs", (150, 300, 1000, 200), "Supply Chain Inc.", "2024-03-25", "$0.18/pc"),
        item("INV-009", "Cup Lids", Supplies, "pcs", (400, 300, 1000, 200), "Supply Chain Inc.", "2024-03-25", "$0.05/pc"),
        item("INV-010", "Napkins", Supplies, "pcs", (800, 500, 2000, 300), "Supply Chain Inc.", "2024-03-25", "$0.02/pc"),
    ]
}

/// Daily coffee and tea revenue, oldest first.
pub fn sales_series() -> Vec<SalesPoint> {
    [
        ("2024-03-23", 80_000, 40_000),
        ("2024-03-24", 120_000, 60_000),
        ("2024-03-25", 90_000, 70_000),
        ("2024-03-26", 150_000, 90_000),
        ("2024-03-27", 100_000, 100_000),
        ("2024-03-28", 130_000, 80_000),
        ("2024-03-29", 170_000, 120_000),
    ]
    .into_iter()
    .map(|(date, coffee_cents, tea_cents)| SalesPoint {
        date: date.to_string(),
        coffee_cents,
        tea_cents,
    })
    .collect()
}
