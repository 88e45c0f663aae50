//! # CLI Layer
//!
//! The only place that touches the terminal. `run` does the whole trip:
//!
//! 1. **Parse** arguments (`setup.rs`).
//! 2. **Install logging**: `tracing-subscriber` to stderr, `warn` by default,
//!    raised by `-v`, overridden by `RUST_LOG`.
//! 3. **Load config** from `--config` or the OS config directory, then
//!    `BREWDESK_*` variables.
//! 4. **Start a session** (`DeskApi::new`) and dispatch the subcommand.
//! 5. **Print** a rendered page, or JSON with `--json`.
//!
//! Errors bubble up as `anyhow::Error`; `main` prints them and exits 1.

use std::path::PathBuf;

use anyhow::{Context, Result};
use brewdeskapp::aggregate::TagCounts;
use brewdeskapp::api::DeskApi;
use brewdeskapp::config::DeskConfig;
use brewdeskapp::query::QueryDescriptor;
use brewdeskapp::records::{InventoryItem, ACTIVE_TAB, LOW_STOCK_TAB};
use brewdeskapp::status::{HasStockLevels, StockStatus};
use brewdeskapp::view::ViewResult;
use clap::Parser;
use directories::ProjectDirs;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::render;
use super::setup::{Cli, Commands};

const CONFIG_FILE: &str = "brewdesk.toml";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().or_else(default_config_path);
    debug!(path = ?config_path, "loading config");
    let config = DeskConfig::load(config_path.as_deref()).context("could not load configuration")?;
    let mut api = DeskApi::new(config)?;

    let output = dispatch(&mut api, cli.command, cli.json)?;
    print!("{output}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // try_init: a second call (tests) must not panic
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .try_init();
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "brewdesk", "brewdesk").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

fn query(search: Option<String>, category: Option<String>, tab: Option<&str>) -> QueryDescriptor {
    let mut query = QueryDescriptor::search(search.unwrap_or_default());
    if let Some(category) = category {
        query = query.with_category(category);
    }
    if let Some(tab) = tab {
        query = query.with_tab(tab);
    }
    query
}

/// An inventory row as printed by `--json`: the item plus its derived status.
#[derive(Serialize)]
struct InventoryRow<'a> {
    #[serde(flatten)]
    item: &'a InventoryItem,
    stock_status: StockStatus,
    stock_label: &'static str,
}

#[derive(Serialize)]
struct InventoryPage<'a> {
    records: Vec<InventoryRow<'a>>,
    counts: &'a TagCounts,
}

impl<'a> From<&'a ViewResult<InventoryItem>> for InventoryPage<'a> {
    fn from(view: &'a ViewResult<InventoryItem>) -> Self {
        let records = view
            .records
            .iter()
            .map(|item| {
                let stock_status = item.stock_status();
                InventoryRow {
                    item,
                    stock_status,
                    stock_label: stock_status.tag.label(),
                }
            })
            .collect();
        Self {
            records,
            counts: &view.counts,
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

pub(crate) fn dispatch(api: &mut DeskApi, command: Commands, json: bool) -> Result<String> {
    match command {
        Commands::Dashboard { range } => {
            let summary = api.dashboard(range)?;
            if json {
                return to_json(&summary);
            }
            Ok(render::dashboard(&summary))
        }

        Commands::Orders { search, status } => {
            let selected = status.clone();
            let view = api.orders(&query(search, status, None));
            if json {
                return to_json(&view);
            }
            Ok(render::orders(&view, selected.as_deref()))
        }

        Commands::Products {
            search,
            category,
            active_only,
            toggle,
        } => {
            let mut notes = String::new();
            for id in &toggle {
                let product = api.toggle_product_active(id)?;
                let state = if product.active { "active" } else { "inactive" };
                notes.push_str(&format!("{} ({}) is now {state}\n", product.id, product.name));
            }

            let selected = category.clone();
            let tab = active_only.then_some(ACTIVE_TAB);
            let view = api.products(&query(search, category, tab));
            if json {
                return to_json(&view);
            }
            if !notes.is_empty() {
                notes.push('\n');
            }
            Ok(notes + &render::products(&view, selected.as_deref(), render::EMPTY_PRODUCTS))
        }

        Commands::Customers { search, tier } => {
            let now = api.config().reference_instant()?;
            let selected = tier.clone();
            let view = api.customers(&query(search, tier, None));
            if json {
                return to_json(&view);
            }
            Ok(render::customers(&view, selected.as_deref(), now))
        }

        Commands::Inventory {
            search,
            category,
            low_stock,
        } => {
            let selected = category.clone();
            let tab = low_stock.then_some(LOW_STOCK_TAB);
            let view = api.inventory(&query(search, category, tab));
            if json {
                return to_json(&InventoryPage::from(&view));
            }
            let empty = if low_stock {
                render::EMPTY_LOW_STOCK
            } else {
                render::EMPTY_INVENTORY
            };
            Ok(render::inventory(&view, selected.as_deref(), empty))
        }
    }
}
