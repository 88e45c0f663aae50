//! Runtime field values.
//!
//! Every record exposes its fields through [`FieldValue`], which is what the
//! predicate composer, the aggregator and `update_field` all speak.

use serde::Serialize;

/// Runtime representation of a record field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    /// Free-form text (names, emails, phone numbers)
    Text(String),

    /// Member of a closed tag set (e.g. order `status` = "pending")
    Tag(String),

    /// Whole number (stock counts, money in cents)
    Int(i64),

    /// Fractional number (ratings)
    Float(f64),

    /// Boolean switch (e.g. product `active`)
    Flag(bool),

    /// Date kept as its display string: `YYYY-MM-DD` or `YYYY-MM-DD hh:mm AM`
    Date(String),
}

impl FieldValue {
    /// The text a free-text search looks at.
    ///
    /// Only textual values take part in search; numbers and flags do not.
    pub fn as_search_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Tag(s) | FieldValue::Date(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> Option<&str> {
        match self {
            FieldValue::Tag(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&str> {
        match self {
            FieldValue::Date(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view used by summaries. Ints widen to `f64`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Tag(_) => "tag",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Flag(_) => "flag",
            FieldValue::Date(_) => "date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_text_covers_textual_kinds_only() {
        assert_eq!(FieldValue::Text("Latte".into()).as_search_text(), Some("Latte"));
        assert_eq!(FieldValue::Tag("gold".into()).as_search_text(), Some("gold"));
        assert_eq!(
            FieldValue::Date("2024-03-28".into()).as_search_text(),
            Some("2024-03-28")
        );
        assert_eq!(FieldValue::Int(42).as_search_text(), None);
        assert_eq!(FieldValue::Flag(true).as_search_text(), None);
    }

    #[test]
    fn as_number_widens_ints() {
        assert_eq!(FieldValue::Int(3).as_number(), Some(3.0));
        assert_eq!(FieldValue::Float(4.5).as_number(), Some(4.5));
        assert_eq!(FieldValue::Text("3".into()).as_number(), None);
    }

    #[test]
    fn typed_accessors_reject_other_kinds() {
        assert_eq!(FieldValue::Flag(false).as_flag(), Some(false));
        assert_eq!(FieldValue::Tag("x".into()).as_flag(), None);
        assert_eq!(FieldValue::Tag("tea".into()).as_tag(), Some("tea"));
        assert_eq!(FieldValue::Text("tea".into()).as_tag(), None);
        assert_eq!(FieldValue::Int(7).as_int(), Some(7));
        assert_eq!(FieldValue::Date("2024-04-01".into()).as_date(), Some("2024-04-01"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&FieldValue::Tag("gold".into())).unwrap();
        assert_eq!(json, r#"{"kind":"tag","value":"gold"}"#);
    }
}
