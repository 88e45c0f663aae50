//! # Dashboard
//!
//! The landing page's numbers, recomputed from the live stores on every call:
//!
//! | Metric | Source |
//! |--------|--------|
//! | `orders_today` | orders dated from midnight of the reference day up to the reference time |
//! | `pending_orders` | orders with status `pending` |
//! | `active_products` / `featured_products` | product flags |
//! | `low_stock_items` | inventory rows the `low-stock` tab would show |
//! | `recent_customers` | customers whose last order is within `recent_days` |
//! | `delivered_revenue_cents` | sum of delivered order totals |
//! | `top_products` | products ranked by units sold, ties in store order |
//! | `sales` | trailing points of the daily coffee/tea revenue series |

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::aggregate::{count_matching, count_same_day, count_within_days, summarize};
use crate::fields::{FieldFilter, FieldValue};
use crate::query::{compose, Predicate, QueryDescriptor};
use crate::records::{Customer, InventoryItem, Order, OrderStatus, Product, LOW_STOCK_TAB};
use crate::store::RecordStore;

/// How much of the sales series the chart shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
}

impl TimeRange {
    /// Trailing daily points the range covers.
    pub fn points(&self) -> usize {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            other => Err(format!(
                "unknown range '{other}' (expected one of: day, week, month)"
            )),
        }
    }
}

/// One day of the revenue chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub coffee_cents: i64,
    pub tea_cents: i64,
}

impl SalesPoint {
    pub fn total_cents(&self) -> i64 {
        self.coffee_cents + self.tea_cents
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProduct {
    pub id: String,
    pub name: String,
    pub sales: u32,
    /// Units sold times the current price
    pub revenue_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub reference_time: NaiveDateTime,
    pub orders_today: usize,
    pub pending_orders: usize,
    pub active_products: usize,
    pub featured_products: usize,
    pub low_stock_items: usize,
    pub recent_days: u32,
    pub recent_customers: usize,
    pub delivered_revenue_cents: i64,
    pub top_products: Vec<TopProduct>,
    pub range: TimeRange,
    pub sales: Vec<SalesPoint>,
}

/// Knobs for [`build`], normally filled from [`DeskConfig`](crate::config::DeskConfig).
#[derive(Debug, Clone, Copy)]
pub struct DashboardOptions {
    pub reference: NaiveDateTime,
    pub recent_days: u32,
    pub top_products: usize,
    pub range: TimeRange,
}

/// Borrowed view of a session's collections.
pub struct Sources<'a> {
    pub orders: &'a RecordStore<Order>,
    pub products: &'a RecordStore<Product>,
    pub customers: &'a RecordStore<Customer>,
    pub inventory: &'a RecordStore<InventoryItem>,
    pub sales: &'a [SalesPoint],
}

pub fn build(sources: &Sources<'_>, options: &DashboardOptions) -> DashboardSummary {
    let status_is = |status: OrderStatus| {
        Predicate::all(vec![FieldFilter::eq(
            "status",
            FieldValue::Tag(status.as_str().to_string()),
        )])
    };
    let flag_set = |field: &str| Predicate::all(vec![FieldFilter::eq(field, FieldValue::Flag(true))]);
    let low_stock = compose(
        &QueryDescriptor::new().with_tab(LOW_STOCK_TAB),
        &InventoryItem::view_schema(),
    );

    let delivered_revenue_cents = summarize(
        sources.orders,
        "total_cents",
        &status_is(OrderStatus::Delivered),
    )
    .map(|s| s.sum.round() as i64)
    .unwrap_or(0);

    DashboardSummary {
        reference_time: options.reference,
        orders_today: count_same_day(sources.orders, "date", options.reference),
        pending_orders: count_matching(sources.orders, &status_is(OrderStatus::Pending)),
        active_products: count_matching(sources.products, &flag_set("active")),
        featured_products: count_matching(sources.products, &flag_set("featured")),
        low_stock_items: count_matching(sources.inventory, &low_stock),
        recent_days: options.recent_days,
        recent_customers: count_within_days(
            sources.customers,
            "last_order",
            options.recent_days,
            options.reference,
        ),
        delivered_revenue_cents,
        top_products: rank_products(sources.products, options.top_products),
        range: options.range,
        sales: trailing(sources.sales, options.range.points()),
    }
}

fn rank_products(products: &RecordStore<Product>, limit: usize) -> Vec<TopProduct> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    // Stable: equal sales keep store order
    ranked.sort_by(|a, b| b.sales.cmp(&a.sales));
    ranked
        .into_iter()
        .take(limit)
        .map(|p| TopProduct {
            id: p.id.clone(),
            name: p.name.clone(),
            sales: p.sales,
            revenue_cents: i64::from(p.sales) * p.price_cents,
        })
        .collect()
}

fn trailing(series: &[SalesPoint], points: usize) -> Vec<SalesPoint> {
    series[series.len().saturating_sub(points)..].to_vec()
}
