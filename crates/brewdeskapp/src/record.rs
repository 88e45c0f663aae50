//! # Record Abstraction
//!
//! The engine is generic over record shape. A record only has to name its
//! identifier and expose its fields by name:
//!
//! ```ignore
//! let status = order.get_field("status");          // Some(FieldValue::Tag("pending"))
//! product.set_field("active", FieldValue::Flag(false));
//! ```
//!
//! `set_field` is the raw write. Callers go through
//! [`RecordStore::update_field`](crate::store::RecordStore::update_field),
//! which validates the value against [`Record::fields`] first.

use crate::fields::{find_spec, FieldSpec, FieldValue};

pub trait Record: Clone {
    /// Unique identifier within a store.
    fn id(&self) -> &str;

    /// Static table describing every field this record type exposes.
    fn fields() -> &'static [FieldSpec];

    /// Read a field by name. `None` for names the type does not know.
    fn get_field(&self, name: &str) -> Option<FieldValue>;

    /// Write a field by name.
    ///
    /// Returns `None` if the name is unknown or the value kind doesn't fit.
    /// The record must be left untouched in that case.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Option<()>;

    /// Look up the spec of one field.
    fn field_spec(name: &str) -> Option<&'static FieldSpec> {
        find_spec(Self::fields(), name)
    }
}
