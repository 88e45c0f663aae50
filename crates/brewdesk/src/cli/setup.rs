use std::path::PathBuf;

use brewdeskapp::dashboard::TimeRange;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "brewdesk",
    bin_name = "brewdesk",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Café back office: orders, products, customers and inventory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON instead of tables
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Log more (-v debug, -vv trace). RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Config file [default: brewdesk.toml in the OS config directory]
    #[arg(long, value_name = "PATH", global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Today's numbers, sales chart and popular products
    Dashboard {
        /// Span of the sales series: day, week or month
        #[arg(long, default_value_t = TimeRange::Week)]
        range: TimeRange,
    },

    /// List orders
    Orders {
        /// Match customer name or order id
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,

        /// Only orders in this status (pending, processing, delivered, canceled)
        #[arg(long, value_name = "TAG")]
        status: Option<String>,
    },

    /// List products
    Products {
        /// Match product name or id
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,

        /// Only this category (coffee, tea, food, bakery)
        #[arg(long, value_name = "TAG")]
        category: Option<String>,

        /// Hide inactive products
        #[arg(long)]
        active_only: bool,

        /// Switch a product on or off before listing (repeatable)
        #[arg(long, value_name = "ID")]
        toggle: Vec<String>,
    },

    /// List customers
    Customers {
        /// Match name, email or customer id
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,

        /// Only this tier (bronze, silver, gold, platinum)
        #[arg(long, value_name = "TAG")]
        tier: Option<String>,
    },

    /// List inventory with stock levels
    Inventory {
        /// Match item name or id
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,

        /// Only this category (beans, dairy, syrups, supplies)
        #[arg(long, value_name = "TAG")]
        category: Option<String>,

        /// Only items at or below their reorder level
        #[arg(long)]
        low_stock: bool,
    },
}
