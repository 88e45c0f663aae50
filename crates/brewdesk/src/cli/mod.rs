//! # CLI Behavior
//!
//! One client of `brewdeskapp` among possible others. Each invocation is a
//! fresh session over the sample data: `--toggle` changes a product for the
//! listing that follows and is forgotten when the process exits.
//!
//! ## Pages
//!
//! - `brewdesk dashboard [--range day|week|month]`
//! - `brewdesk orders [-s TEXT] [--status TAG]`
//! - `brewdesk products [-s TEXT] [--category TAG] [--active-only] [--toggle ID]...`
//! - `brewdesk customers [-s TEXT] [--tier TAG]`
//! - `brewdesk inventory [-s TEXT] [--category TAG] [--low-stock]`
//!
//! An unknown tag is not rejected: it selects nothing, and the page shows
//! its empty-state message above zero rows.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: logging, config, dispatch to the API
//! - `render`: tables, chips, dashboard layout
//! - `styles`: terminal palette

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
