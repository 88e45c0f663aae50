//! Field specifications.
//!
//! Each record type publishes a static table of [`FieldSpec`]s describing
//! what its fields hold and how they may be used. The table is the single
//! source of truth for field names: `update_field` validates against it and
//! view schemas refer to it.

use super::FieldValue;
use crate::aggregate::parse_record_date;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Tag,
    Int,
    Float,
    Flag,
    Date,
}

impl FieldKind {
    /// Whether `value` is of this kind.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (FieldKind::Text, FieldValue::Text(_))
                | (FieldKind::Tag, FieldValue::Tag(_))
                | (FieldKind::Int, FieldValue::Int(_))
                | (FieldKind::Float, FieldValue::Float(_))
                | (FieldKind::Flag, FieldValue::Flag(_))
                | (FieldKind::Date, FieldValue::Date(_))
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Tag => "tag",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Flag => "flag",
            FieldKind::Date => "date",
        }
    }
}

/// Specification for a single record field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// The field name used across the engine (e.g. "status", "stock")
    pub name: &'static str,

    /// The kind of value this field holds
    pub kind: FieldKind,

    /// Closed set of values for `Tag` fields; empty for everything else
    pub tags: &'static [&'static str],

    /// Whether `update_field` may change this field
    ///
    /// Identifiers are never mutable so ids stay unique within a store.
    pub mutable: bool,
}

impl FieldSpec {
    /// Create a read-only spec.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            tags: &[],
            mutable: false,
        }
    }

    /// Create a categorical spec over a closed tag set.
    pub const fn tagged(name: &'static str, tags: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::Tag,
            tags,
            mutable: false,
        }
    }

    /// Set the mutable flag.
    pub const fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    pub fn is_categorical(&self) -> bool {
        self.kind == FieldKind::Tag && !self.tags.is_empty()
    }

    /// Check that `value` may be written into this field.
    pub fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if !self.mutable {
            return Err("field is read-only".to_string());
        }
        if !self.kind.accepts(value) {
            return Err(format!(
                "expected {} value, got {}",
                self.kind.name(),
                value.kind_name()
            ));
        }
        if let FieldValue::Tag(tag) = value {
            if !self.tags.contains(&tag.as_str()) {
                return Err(format!(
                    "unknown tag '{}' (expected one of: {})",
                    tag,
                    self.tags.join(", ")
                ));
            }
        }
        if let FieldValue::Date(date) = value {
            if parse_record_date(date).is_none() {
                return Err(format!(
                    "unreadable date '{date}' (expected YYYY-MM-DD or YYYY-MM-DD hh:mm AM/PM)"
                ));
            }
        }
        Ok(())
    }
}

/// Look up a spec by name in a record type's field table.
pub fn find_spec<'a>(specs: &'a [FieldSpec], name: &str) -> Option<&'a FieldSpec> {
    specs.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_TAGS: &[&str] = &["pending", "delivered"];

    const SPECS: &[FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Text),
        FieldSpec::tagged("status", STATUS_TAGS).mutable(),
        FieldSpec::new("active", FieldKind::Flag).mutable(),
        FieldSpec::new("last_order", FieldKind::Date).mutable(),
    ];

    #[test]
    fn find_spec_by_name() {
        assert_eq!(find_spec(SPECS, "status").unwrap().kind, FieldKind::Tag);
        assert!(find_spec(SPECS, "missing").is_none());
    }

    #[test]
    fn tagged_spec_is_categorical() {
        assert!(find_spec(SPECS, "status").unwrap().is_categorical());
        assert!(!find_spec(SPECS, "active").unwrap().is_categorical());
    }

    #[test]
    fn validate_rejects_read_only() {
        let spec = find_spec(SPECS, "id").unwrap();
        let err = spec.validate(&FieldValue::Text("X".into())).unwrap_err();
        assert!(err.contains("read-only"));
    }

    #[test]
    fn validate_rejects_kind_mismatch() {
        let spec = find_spec(SPECS, "active").unwrap();
        let err = spec.validate(&FieldValue::Int(1)).unwrap_err();
        assert_eq!(err, "expected flag value, got int");
    }

    #[test]
    fn validate_rejects_unknown_tag() {
        let spec = find_spec(SPECS, "status").unwrap();
        assert!(spec.validate(&FieldValue::Tag("delivered".into())).is_ok());
        let err = spec.validate(&FieldValue::Tag("lost".into())).unwrap_err();
        assert!(err.contains("pending, delivered"));
    }

    #[test]
    fn validate_rejects_unreadable_date() {
        let spec = find_spec(SPECS, "last_order").unwrap();
        assert!(spec.validate(&FieldValue::Date("2024-04-03".into())).is_ok());
        assert!(spec
            .validate(&FieldValue::Date("2024-04-03 09:15 AM".into()))
            .is_ok());
        let err = spec.validate(&FieldValue::Date("garbage".into())).unwrap_err();
        assert!(err.contains("unreadable date 'garbage'"));
    }
}
