//! # API Facade
//!
//! [`DeskApi`] is the single entry point a front end talks to. It owns one
//! session's stores, seeded on construction, and dispatches to the view,
//! store and dashboard modules.
//!
//! The facade does no formatting and no I/O: it takes query descriptors and
//! field values and hands back [`ViewResult`]s, records and a
//! [`DashboardSummary`]. Rendering belongs to the caller.
//!
//! Sessions are independent. Two `DeskApi` values never share records, and
//! edits vanish with the value that made them.

use tracing::info;

use crate::config::DeskConfig;
use crate::dashboard::{self, DashboardOptions, DashboardSummary, SalesPoint, Sources, TimeRange};
use crate::error::Result;
use crate::fields::FieldValue;
use crate::query::QueryDescriptor;
use crate::records::{seed, Customer, InventoryItem, Order, Product};
use crate::store::RecordStore;
use crate::view::{query_view, ViewResult};

pub struct DeskApi {
    orders: RecordStore<Order>,
    products: RecordStore<Product>,
    customers: RecordStore<Customer>,
    inventory: RecordStore<InventoryItem>,
    sales: Vec<SalesPoint>,
    config: DeskConfig,
}

impl DeskApi {
    /// Start a session from the built-in sample data.
    pub fn new(config: DeskConfig) -> Result<Self> {
        let api = Self {
            orders: RecordStore::new(seed::orders())?,
            products: RecordStore::new(seed::products())?,
            customers: RecordStore::new(seed::customers())?,
            inventory: RecordStore::new(seed::inventory())?,
            sales: seed::sales_series(),
            config,
        };
        info!(
            orders = api.orders.len(),
            products = api.products.len(),
            customers = api.customers.len(),
            inventory = api.inventory.len(),
            "session seeded"
        );
        Ok(api)
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn orders(&self, query: &QueryDescriptor) -> ViewResult<Order> {
        query_view(&self.orders, &Order::view_schema(), query)
    }

    pub fn products(&self, query: &QueryDescriptor) -> ViewResult<Product> {
        query_view(&self.products, &Product::view_schema(), query)
    }

    pub fn customers(&self, query: &QueryDescriptor) -> ViewResult<Customer> {
        query_view(&self.customers, &Customer::view_schema(), query)
    }

    pub fn inventory(&self, query: &QueryDescriptor) -> ViewResult<InventoryItem> {
        query_view(&self.inventory, &InventoryItem::view_schema(), query)
    }

    /// Switch a product on or off. Returns the product as stored afterwards.
    pub fn toggle_product_active(&mut self, id: &str) -> Result<Product> {
        self.products.toggle_flag(id, "active")
    }

    pub fn update_order(&mut self, id: &str, field: &str, value: FieldValue) -> Result<Order> {
        self.orders.update_field(id, field, value)
    }

    pub fn update_product(&mut self, id: &str, field: &str, value: FieldValue) -> Result<Product> {
        self.products.update_field(id, field, value)
    }

    pub fn update_customer(
        &mut self,
        id: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<Customer> {
        self.customers.update_field(id, field, value)
    }

    pub fn update_inventory(
        &mut self,
        id: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<InventoryItem> {
        self.inventory.update_field(id, field, value)
    }

    /// Fails only when the configured reference time can't be parsed.
    pub fn dashboard(&self, range: TimeRange) -> Result<DashboardSummary> {
        let options = DashboardOptions {
            reference: self.config.reference_instant()?,
            recent_days: self.config.recent_days,
            top_products: self.config.top_products,
            range,
        };
        let sources = Sources {
            orders: &self.orders,
            products: &self.products,
            customers: &self.customers,
            inventory: &self.inventory,
            sales: &self.sales,
        };
        Ok(dashboard::build(&sources, &options))
    }
}
