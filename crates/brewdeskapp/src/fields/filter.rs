//! Field filtering.
//!
//! A [`FieldFilter`] is one condition on one field of a record. The predicate
//! composer builds its categorical and tab conditions out of these, and view
//! schemas declare their tabs as lists of them.

use super::FieldValue;
use crate::record::Record;

/// Filter operation for comparing a field against an operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact equality match.
    Eq,
    /// Not equal.
    Ne,
    /// Case-insensitive substring containment (textual fields).
    Contains,
    /// Numeric `<=` (Int/Float fields).
    AtMost,
}

/// What a filter compares against: a constant, or another field of the same record.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(FieldValue),
    Field(&'static str),
}

/// A filter condition on a record field.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    /// The field name (e.g. "status", "stock")
    pub field: String,
    /// The filter operation
    pub op: FilterOp,
    /// The operand to compare against
    pub operand: Operand,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, op: FilterOp, operand: Operand) -> Self {
        Self {
            field: field.into(),
            op,
            operand,
        }
    }

    /// Convenience: create an equality filter.
    pub fn eq(field: impl Into<String>, value: FieldValue) -> Self {
        Self::new(field, FilterOp::Eq, Operand::Value(value))
    }

    /// Convenience: create a not-equal filter.
    pub fn ne(field: impl Into<String>, value: FieldValue) -> Self {
        Self::new(field, FilterOp::Ne, Operand::Value(value))
    }

    /// Convenience: create a substring filter. Matching ignores case.
    pub fn contains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::new(
            field,
            FilterOp::Contains,
            Operand::Value(FieldValue::Text(needle.into())),
        )
    }

    /// Convenience: `field <= other` where both are numeric fields of the same record.
    pub fn at_most_field(field: impl Into<String>, other: &'static str) -> Self {
        Self::new(field, FilterOp::AtMost, Operand::Field(other))
    }

    /// Check if this filter matches the given record.
    ///
    /// Returns `false` if either side is missing or the kinds don't compare.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let Some(value) = record.get_field(&self.field) else {
            return false;
        };
        let operand = match &self.operand {
            Operand::Value(v) => v.clone(),
            Operand::Field(name) => match record.get_field(name) {
                Some(v) => v,
                None => return false,
            },
        };

        match self.op {
            FilterOp::Eq => values_equal(&value, &operand),
            FilterOp::Ne => !values_equal(&value, &operand),
            FilterOp::Contains => text_contains(&value, &operand),
            FilterOp::AtMost => match (value.as_number(), operand.as_number()) {
                (Some(a), Some(b)) => a <= b,
                _ => false,
            },
        }
    }
}

fn values_equal(a: &FieldValue, b: &FieldValue) -> bool {
    match (a, b) {
        // Ints and floats compare numerically
        (FieldValue::Int(_) | FieldValue::Float(_), FieldValue::Int(_) | FieldValue::Float(_)) => {
            a.as_number() == b.as_number()
        }
        _ => a == b,
    }
}

/// Case-insensitive substring check. The needle is not trimmed.
fn text_contains(value: &FieldValue, needle: &FieldValue) -> bool {
    let (Some(haystack), Some(needle)) = (value.as_search_text(), needle.as_search_text()) else {
        return false;
    };
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldKind, FieldSpec};

    #[derive(Debug, Clone)]
    struct Bin {
        id: String,
        label: String,
        state: String,
        level: i64,
        floor: i64,
        open: bool,
    }

    const SPECS: &[FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Text),
        FieldSpec::new("label", FieldKind::Text),
        FieldSpec::tagged("state", &["full", "empty"]),
        FieldSpec::new("level", FieldKind::Int),
        FieldSpec::new("floor", FieldKind::Int),
        FieldSpec::new("open", FieldKind::Flag).mutable(),
    ];

    impl Record for Bin {
        fn id(&self) -> &str {
            &self.id
        }

        fn fields() -> &'static [FieldSpec] {
            SPECS
        }

        fn get_field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(FieldValue::Text(self.id.clone())),
                "label" => Some(FieldValue::Text(self.label.clone())),
                "state" => Some(FieldValue::Tag(self.state.clone())),
                "level" => Some(FieldValue::Int(self.level)),
                "floor" => Some(FieldValue::Int(self.floor)),
                "open" => Some(FieldValue::Flag(self.open)),
                _ => None,
            }
        }

        fn set_field(&mut self, name: &str, value: FieldValue) -> Option<()> {
            match name {
                "open" => self.open = value.as_flag()?,
                _ => return None,
            }
            Some(())
        }
    }

    fn bin(label: &str, state: &str, level: i64, floor: i64) -> Bin {
        Bin {
            id: format!("BIN-{label}"),
            label: label.into(),
            state: state.into(),
            level,
            floor,
            open: true,
        }
    }

    #[test]
    fn filter_eq_tag() {
        let filter = FieldFilter::eq("state", FieldValue::Tag("full".into()));
        assert!(filter.matches(&bin("a", "full", 1, 0)));
        assert!(!filter.matches(&bin("a", "empty", 1, 0)));
    }

    #[test]
    fn filter_ne_flag() {
        let filter = FieldFilter::ne("open", FieldValue::Flag(false));
        assert!(filter.matches(&bin("a", "full", 1, 0)));
    }

    #[test]
    fn filter_contains_ignores_case() {
        let filter = FieldFilter::contains("label", "MILK");
        assert!(filter.matches(&bin("Oat Milk", "full", 1, 0)));
        assert!(!filter.matches(&bin("Beans", "full", 1, 0)));
    }

    #[test]
    fn filter_contains_does_not_trim() {
        let filter = FieldFilter::contains("label", " milk");
        assert!(filter.matches(&bin("Oat Milk", "full", 1, 0)));
        assert!(!filter.matches(&bin("Milk", "full", 1, 0)));
    }

    #[test]
    fn filter_at_most_field_is_inclusive() {
        let filter = FieldFilter::at_most_field("level", "floor");
        assert!(filter.matches(&bin("a", "full", 3, 3)));
        assert!(filter.matches(&bin("a", "full", 2, 3)));
        assert!(!filter.matches(&bin("a", "full", 4, 3)));
    }

    #[test]
    fn filter_unknown_field_returns_false() {
        let filter = FieldFilter::eq("unknown", FieldValue::Flag(true));
        assert!(!filter.matches(&bin("a", "full", 1, 0)));
        let filter = FieldFilter::at_most_field("level", "missing");
        assert!(!filter.matches(&bin("a", "full", 1, 0)));
    }

    #[test]
    fn filter_type_mismatch_returns_false() {
        let filter = FieldFilter::eq("state", FieldValue::Flag(true));
        assert!(!filter.matches(&bin("a", "full", 1, 0)));
    }

    #[test]
    fn numeric_equality_crosses_int_and_float() {
        let filter = FieldFilter::eq("level", FieldValue::Float(2.0));
        assert!(filter.matches(&bin("a", "full", 2, 0)));
    }
}
