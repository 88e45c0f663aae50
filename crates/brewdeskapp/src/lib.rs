//! # Brewdesk Architecture
//!
//! Brewdesk is the engine behind a small café's back office: orders,
//! products, customers and inventory, each listed with free-text search,
//! category chips and per-page tabs, plus a dashboard of summary numbers.
//! The engine holds everything in memory for one session and knows nothing
//! about terminals; the `brewdesk` binary is just one client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the brewdesk CLI)                                  │
//! │  - Parses arguments, renders tables, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - One DeskApi per session, seeded on construction          │
//! │  - Views, updates, dashboard                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View engine (view.rs, query.rs, aggregate.rs, status.rs)   │
//! │  - Query descriptor → predicate → matching records + counts │
//! │  - Stock status derived on read                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store.rs, record.rs, fields/, records/)           │
//! │  - RecordStore<R>: ordered, id-unique, field-level updates  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records Are Read By Field Name
//!
//! Filters, counts and updates never match on concrete struct fields. Every
//! record type implements [`record::Record`], which exposes its fields by
//! name as [`fields::FieldValue`]s and declares them in a static
//! [`fields::FieldSpec`] table. One predicate composer and one aggregator
//! then serve all four pages.
//!
//! ## No I/O In The Engine
//!
//! Nothing here prints, reads files (besides [`config::DeskConfig::load`]),
//! or exits. Diagnostics go through `tracing`; the client decides whether
//! anyone sees them.
//!
//! ## Testing
//!
//! Unit tests live next to the code. Record builders for tests sit in
//! `records::fixtures`, exported to integration tests through the
//! `test_utils` feature.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fields;
pub mod query;
pub mod record;
pub mod records;
pub mod status;
pub mod store;
pub mod view;
