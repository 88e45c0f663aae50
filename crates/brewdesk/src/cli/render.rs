//! # Rendering
//!
//! Turns view results and the dashboard summary into terminal text. Every
//! function here is pure: data in, `String` out. Printing is left to
//! `commands.rs`.
//!
//! ## Page Layout
//!
//! A listing page is:
//!
//! ```text
//! All (10)  Pending (2)  Processing (2)  Delivered (5)  Canceled (1)
//!
//! ID             CUSTOMER        DATE                 ITEMS   TOTAL  STATUS
//! ORD-2024-1429  Alex Johnson    2024-04-03 08:15 AM      3  $18.75  Delivered
//! ```
//!
//! The chip line always counts the whole collection, so it reads the same
//! whatever the search. Column widths are measured with `unicode-width` on
//! the plain text, then styles are applied, so escape codes never skew the
//! alignment.

use brewdeskapp::aggregate::{parse_record_date, TagCounts};
use brewdeskapp::dashboard::DashboardSummary;
use brewdeskapp::query::ALL;
use brewdeskapp::records::{
    Customer, CustomerTier, InventoryCategory, InventoryItem, Order, OrderStatus, Product,
    ProductCategory,
};
use brewdeskapp::status::HasStockLevels;
use brewdeskapp::view::ViewResult;
use chrono::NaiveDateTime;
use console::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles::{self, THEME};

/// Widest a single column may grow before its text is truncated.
pub const MAX_COL: usize = 40;
const COL_GAP: &str = "  ";
const ELLIPSIS: char = '…';
const FEATURED_MARKER: &str = "★";

pub const EMPTY_ORDERS: &str = "No orders found matching your search criteria";
pub const EMPTY_PRODUCTS: &str = "No products found matching your criteria";
pub const EMPTY_CUSTOMERS: &str = "No customers found matching your criteria";
pub const EMPTY_INVENTORY: &str = "No inventory items found matching your criteria";
pub const EMPTY_LOW_STOCK: &str = "No low stock items found matching your criteria";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
}

const fn left(header: &'static str) -> Column {
    Column {
        header,
        align: Align::Left,
    }
}

const fn right(header: &'static str) -> Column {
    Column {
        header,
        align: Align::Right,
    }
}

struct Cell {
    text: String,
    style: Option<Style>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            style: None,
        }
    }

    fn styled(text: impl Into<String>, style: &Style) -> Self {
        Cell {
            text: text.into(),
            style: Some(style.clone()),
        }
    }
}

/// Cut `text` to at most `max` display columns, marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

fn table(columns: &[Column], rows: Vec<Vec<Cell>>) -> String {
    let rows: Vec<Vec<Cell>> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| Cell {
                    text: truncate_to_width(&cell.text, MAX_COL),
                    style: cell.style,
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.text.width())
                .chain(std::iter::once(col.header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| THEME.header.apply_to(pad(col.header, *w, col.align)).to_string())
        .collect();
    out.push_str(header.join(COL_GAP).trim_end());
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(columns.iter().zip(&widths))
            .map(|(cell, (col, w))| {
                let padded = pad(&cell.text, *w, col.align);
                match &cell.style {
                    Some(style) => style.apply_to(padded).to_string(),
                    None => padded,
                }
            })
            .collect();
        out.push_str(line.join(COL_GAP).trim_end());
        out.push('\n');
    }
    out
}

/// `$1,704.00` style amounts.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", abs % 100)
}

/// "3 days ago" relative to `now`; empty for dates that don't parse or lie ahead.
pub fn time_ago(date: &str, now: NaiveDateTime) -> String {
    parse_record_date(date)
        .and_then(|at| (now - at).to_std().ok())
        .map(|elapsed| timeago::Formatter::new().convert(elapsed))
        .unwrap_or_default()
}

/// The `Tag (n)` chip line. `selected` is highlighted; no selection means "all".
fn chips(counts: &TagCounts, selected: Option<&str>, label: impl Fn(&str) -> String) -> String {
    let selected = selected.unwrap_or(ALL);
    let parts: Vec<String> = counts
        .iter()
        .map(|entry| {
            let name = if entry.tag == ALL {
                "All".to_string()
            } else {
                label(&entry.tag)
            };
            let text = format!("{name} ({})", entry.count);
            if entry.tag == selected {
                THEME.chip_selected.apply_to(text).to_string()
            } else {
                THEME.chip.apply_to(text).to_string()
            }
        })
        .collect();
    parts.join(COL_GAP)
}

fn page<R>(
    view: &ViewResult<R>,
    selected: Option<&str>,
    label: impl Fn(&str) -> String,
    empty: &str,
    body: impl FnOnce(&[R]) -> String,
) -> String {
    let mut out = chips(&view.counts, selected, label);
    out.push_str("\n\n");
    if view.is_empty() {
        out.push_str(&THEME.muted.apply_to(empty).to_string());
        out.push('\n');
    } else {
        out.push_str(&body(&view.records));
    }
    out
}

fn label_of<T, F>(tag: &str, label: F) -> String
where
    T: std::str::FromStr,
    F: Fn(&T) -> &'static str,
{
    tag.parse::<T>()
        .map(|value| label(&value).to_string())
        .unwrap_or_else(|_| tag.to_string())
}

pub fn orders(view: &ViewResult<Order>, selected: Option<&str>) -> String {
    page(
        view,
        selected,
        |tag| label_of(tag, OrderStatus::label),
        EMPTY_ORDERS,
        |records| {
            let columns = [
                left("ID"),
                left("CUSTOMER"),
                left("DATE"),
                right("ITEMS"),
                right("TOTAL"),
                left("STATUS"),
            ];
            let rows = records
                .iter()
                .map(|o| {
                    vec![
                        Cell::styled(&o.id, &THEME.muted),
                        Cell::plain(&o.customer),
                        Cell::plain(&o.date),
                        Cell::plain(o.items.to_string()),
                        Cell::styled(format_cents(o.total_cents), &THEME.money),
                        Cell::styled(o.status.label(), styles::order_status(o.status)),
                    ]
                })
                .collect();
            table(&columns, rows)
        },
    )
}

pub fn products(view: &ViewResult<Product>, selected: Option<&str>, empty: &str) -> String {
    page(
        view,
        selected,
        |tag| label_of(tag, ProductCategory::label),
        empty,
        |records| {
            let columns = [
                left("ID"),
                left("NAME"),
                left("CATEGORY"),
                right("PRICE"),
                right("PROFIT"),
                right("STOCK"),
                right("SALES"),
                right("RATING"),
                left("STATUS"),
            ];
            let rows = records
                .iter()
                .map(|p| {
                    let name = if p.featured {
                        format!("{} {FEATURED_MARKER}", p.name)
                    } else {
                        p.name.clone()
                    };
                    let (status, style) = if p.active {
                        ("Active", &THEME.success)
                    } else {
                        ("Inactive", &THEME.muted)
                    };
                    vec![
                        Cell::styled(&p.id, &THEME.muted),
                        Cell::plain(name),
                        Cell::plain(p.category.label()),
                        Cell::styled(format_cents(p.price_cents), &THEME.money),
                        Cell::styled(format_cents(p.profit_cents()), &THEME.money),
                        Cell::plain(p.stock.to_string()),
                        Cell::plain(p.sales.to_string()),
                        Cell::plain(format!("{:.1}", p.rating)),
                        Cell::styled(status, style),
                    ]
                })
                .collect();
            table(&columns, rows)
        },
    )
}

pub fn customers(view: &ViewResult<Customer>, selected: Option<&str>, now: NaiveDateTime) -> String {
    page(
        view,
        selected,
        |tag| label_of(tag, CustomerTier::label),
        EMPTY_CUSTOMERS,
        |records| {
            let columns = [
                left("ID"),
                left(""),
                left("NAME"),
                left("EMAIL"),
                left("PHONE"),
                left("LAST ORDER"),
                right("ORDERS"),
                right("SPENT"),
                left("TIER"),
            ];
            let rows = records
                .iter()
                .map(|c| {
                    let ago = time_ago(&c.last_order, now);
                    let last = if ago.is_empty() {
                        c.last_order.clone()
                    } else {
                        format!("{} ({ago})", c.last_order)
                    };
                    vec![
                        Cell::styled(&c.id, &THEME.muted),
                        Cell::styled(c.initials(), &THEME.title),
                        Cell::plain(&c.name),
                        Cell::plain(&c.email),
                        Cell::styled(&c.phone, &THEME.muted),
                        Cell::plain(last),
                        Cell::plain(c.order_count.to_string()),
                        Cell::styled(format_cents(c.total_spent_cents), &THEME.money),
                        Cell::styled(c.tier.label(), styles::tier(c.tier)),
                    ]
                })
                .collect();
            table(&columns, rows)
        },
    )
}

pub fn inventory(view: &ViewResult<InventoryItem>, selected: Option<&str>, empty: &str) -> String {
    page(
        view,
        selected,
        |tag| label_of(tag, InventoryCategory::label),
        empty,
        |records| {
            let columns = [
                left("ID"),
                left("NAME"),
                left("CATEGORY"),
                right("STOCK"),
                right("LEVEL"),
                left("STATUS"),
                left("SUPPLIER"),
                left("LAST ORDERED"),
                right("PRICE"),
            ];
            let rows = records
                .iter()
                .map(|i| {
                    let status = i.stock_status();
                    vec![
                        Cell::styled(&i.id, &THEME.muted),
                        Cell::plain(&i.name),
                        Cell::plain(i.category.label()),
                        Cell::plain(format!("{} {}", i.stock, i.unit)),
                        Cell::plain(format!("{:.0}%", status.percentage)),
                        Cell::styled(status.tag.label(), styles::stock_tag(status.tag)),
                        Cell::plain(&i.supplier),
                        Cell::plain(&i.last_ordered),
                        Cell::styled(&i.price, &THEME.money),
                    ]
                })
                .collect();
            table(&columns, rows)
        },
    )
}

pub fn dashboard(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let as_of = summary.reference_time.format("%Y-%m-%d %I:%M %p");
    out.push_str(&format!(
        "{} {}\n\n",
        THEME.title.apply_to("Dashboard"),
        THEME.muted.apply_to(format!("(as of {as_of})"))
    ));

    let metrics = [
        ("Orders today", summary.orders_today.to_string(), String::new()),
        ("Pending orders", summary.pending_orders.to_string(), String::new()),
        (
            "Active products",
            summary.active_products.to_string(),
            format!("{} featured", summary.featured_products),
        ),
        ("Low stock items", summary.low_stock_items.to_string(), String::new()),
        (
            "Recent customers",
            summary.recent_customers.to_string(),
            format!("last {} days", summary.recent_days),
        ),
        (
            "Delivered revenue",
            format_cents(summary.delivered_revenue_cents),
            String::new(),
        ),
    ];
    let label_width = metrics.iter().map(|(l, _, _)| l.width()).max().unwrap_or(0);
    let value_width = metrics.iter().map(|(_, v, _)| v.width()).max().unwrap_or(0);
    for (label, value, note) in &metrics {
        let mut line = format!(
            "  {}  {}",
            pad(label, label_width, Align::Left),
            pad(value, value_width, Align::Right)
        );
        if !note.is_empty() {
            line.push_str(&format!("  {}", THEME.muted.apply_to(format!("({note})"))));
        }
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} {}\n",
        THEME.title.apply_to("Sales"),
        THEME.muted.apply_to(format!("({})", summary.range))
    ));
    let sales_rows = summary
        .sales
        .iter()
        .map(|point| {
            vec![
                Cell::plain(&point.date),
                Cell::styled(format_cents(point.coffee_cents), &THEME.money),
                Cell::styled(format_cents(point.tea_cents), &THEME.money),
                Cell::styled(format_cents(point.total_cents()), &THEME.money),
            ]
        })
        .collect();
    out.push_str(&table(
        &[left("DATE"), right("COFFEE"), right("TEA"), right("TOTAL")],
        sales_rows,
    ));

    out.push_str(&format!("\n{}\n", THEME.title.apply_to("Popular products")));
    let top_rows = summary
        .top_products
        .iter()
        .enumerate()
        .map(|(rank, p)| {
            vec![
                Cell::styled(format!("{}.", rank + 1), &THEME.muted),
                Cell::plain(&p.name),
                Cell::plain(p.sales.to_string()),
                Cell::styled(format_cents(p.revenue_cents), &THEME.money),
            ]
        })
        .collect();
    out.push_str(&table(
        &[right("#"), left("NAME"), right("SALES"), right("REVENUE")],
        top_rows,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewdeskapp::api::DeskApi;
    use brewdeskapp::config::DeskConfig;
    use brewdeskapp::dashboard::TimeRange;
    use brewdeskapp::query::QueryDescriptor;
    use brewdeskapp::records::LOW_STOCK_TAB;

    fn api() -> DeskApi {
        console::set_colors_enabled(false);
        DeskApi::new(DeskConfig {
            reference_time: Some("2024-04-03 08:30 AM".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn now() -> NaiveDateTime {
        parse_record_date("2024-04-03 08:30 AM").unwrap()
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(525), "$5.25");
        assert_eq!(format_cents(170_400), "$1,704.00");
        assert_eq!(format_cents(123_456_789), "$1,234,567.89");
        assert_eq!(format_cents(-150), "-$1.50");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Latte", 10), "Latte");
        assert_eq!(truncate_to_width("Chocolate Croissant", 10), "Chocolate…");
        assert_eq!(truncate_to_width("Chocolate Croissant", 10).width(), 10);
    }

    #[test]
    fn test_time_ago() {
        assert_eq!(time_ago("2024-04-01 08:30 AM", now()), "2 days ago");
        assert_eq!(time_ago("2024-04-10", now()), "");
        assert_eq!(time_ago("someday", now()), "");
    }

    #[test]
    fn test_orders_page_has_chips_and_rows() {
        let api = api();
        let out = orders(&api.orders(&QueryDescriptor::new()), None);
        assert!(out.starts_with("All (10)  Pending (2)  Processing (2)  Delivered (5)  Canceled (1)"));
        assert!(out.contains("ORD-2024-1429"));
        assert!(out.contains("$18.75"));
    }

    #[test]
    fn test_empty_orders_shows_message() {
        let api = api();
        let out = orders(&api.orders(&QueryDescriptor::search("zzz")), None);
        assert!(out.contains(EMPTY_ORDERS));
        assert!(out.contains("All (10)"));
        assert!(!out.contains("CUSTOMER"));
    }

    #[test]
    fn test_inventory_shows_percentage_and_label() {
        let api = api();
        let view = api.inventory(&QueryDescriptor::new().with_tab(LOW_STOCK_TAB));
        let out = inventory(&view, None, EMPTY_LOW_STOCK);
        assert!(out.contains("INV-008"));
        assert!(out.contains("15%"));
        assert!(out.contains("Low Stock"));
        assert!(out.contains("Coffee Beans (2)"));
    }

    #[test]
    fn test_products_mark_featured() {
        let api = api();
        let out = products(&api.products(&QueryDescriptor::search("PRD-001")), None, EMPTY_PRODUCTS);
        assert!(out.contains("Espresso ★"));
        assert!(out.contains("Active"));
    }

    #[test]
    fn test_customers_show_initials_and_age() {
        let api = api();
        let out = customers(&api.customers(&QueryDescriptor::search("Olivia")), None, now());
        assert!(out.contains("OK"));
        assert!(out.contains("2024-04-03 ("));
        assert!(out.contains("Gold"));
    }

    #[test]
    fn test_dashboard_render() {
        let api = api();
        let out = dashboard(&api.dashboard(TimeRange::Week).unwrap());
        assert!(out.contains("Orders today"));
        assert!(out.contains("$88.85"));
        assert!(out.contains("Popular products"));
        assert!(out.contains("Latte"));
        assert!(out.contains("2024-03-29"));
    }
}
