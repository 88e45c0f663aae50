//! # Field System
//!
//! Records are opaque to the engine except through their fields. Instead of
//! each page reaching into struct members ad hoc, the field system provides:
//!
//! - **Values**: what a field can hold ([`FieldValue`])
//! - **Specifications**: per-record-type field tables ([`FieldSpec`])
//! - **Filtering**: single-field conditions usable on any record ([`FieldFilter`])
//!
//! ## Field Kinds
//!
//! | Kind | Examples | Description |
//! |------|----------|-------------|
//! | `Text` | `name`, `email` | Free text, searchable |
//! | `Tag` | `status`, `tier` | Closed set, used for partitioning |
//! | `Int` | `stock`, `total_cents` | Counts and money in cents |
//! | `Float` | `rating` | Fractional numbers |
//! | `Flag` | `active` | Boolean switches |
//! | `Date` | `last_order` | Date strings, used by windowed counts |
//!
//! ## Usage
//!
//! ```ignore
//! let value = product.get_field("category");
//! store.update_field("PRD-011", "active", FieldValue::Flag(true))?;
//! let tab = FieldFilter::at_most_field("stock", "reorder_level");
//! if tab.matches(&item) { ... }
//! ```

mod filter;
mod spec;
mod value;

pub use filter::{FieldFilter, FilterOp, Operand};
pub use spec::{find_spec, FieldKind, FieldSpec};
pub use value::FieldValue;
