//! # Query Descriptors and Predicate Composition
//!
//! Every page asks the same three questions of its records: does the search
//! text appear in one of the searchable fields, is the record in the selected
//! category, and does it belong to the selected tab. [`compose`] turns a
//! [`QueryDescriptor`] and a record type's [`ViewSchema`] into one
//! [`Predicate`] answering all three.
//!
//! ## Matching Rules
//!
//! - **Free text**: case-insensitive substring match against the schema's
//!   search fields; ANY field matching is enough. Empty text matches all.
//!   The text is used as given: `" latte"` only matches names containing
//!   a space followed by "latte".
//! - **Category**: `None` or `"all"` matches all; anything else must equal the
//!   record's categorical field exactly. Unknown tags match nothing.
//! - **Tab**: `None` or `"all"` matches all; a named tab applies its filters;
//!   a tab the schema does not declare matches nothing.
//!
//! The three parts are AND-ed; the order they are checked in does not matter.

use serde::{Deserialize, Serialize};

use crate::fields::{FieldFilter, FieldValue};
use crate::record::Record;

/// Sentinel selection meaning "no restriction".
pub const ALL: &str = "all";

/// One complete query. Each call replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    #[serde(default)]
    pub free_text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tab: Option<String>,
}

impl QueryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            free_text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = Some(tab.into());
        self
    }
}

/// A named secondary filter, shown as a tab or toggle by the UI.
#[derive(Debug, Clone)]
pub struct Tab {
    pub name: &'static str,
    pub label: &'static str,
    pub filters: Vec<FieldFilter>,
}

/// How one record type is searched, partitioned and tabbed.
#[derive(Debug, Clone)]
pub struct ViewSchema {
    /// Fields the free text is matched against
    pub search_fields: Vec<&'static str>,
    /// The categorical field used for the category filter and counts
    pub category_field: &'static str,
    pub tabs: Vec<Tab>,
}

impl ViewSchema {
    pub fn new(search_fields: &[&'static str], category_field: &'static str) -> Self {
        Self {
            search_fields: search_fields.to_vec(),
            category_field,
            tabs: Vec::new(),
        }
    }

    pub fn with_tab(
        mut self,
        name: &'static str,
        label: &'static str,
        filters: Vec<FieldFilter>,
    ) -> Self {
        self.tabs.push(Tab {
            name,
            label,
            filters,
        });
        self
    }

    pub fn tab(&self, name: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.name == name)
    }
}

/// A pure boolean condition over one record.
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    /// At least one must hold. Empty means no constraint.
    any_of: Vec<FieldFilter>,
    /// Every one must hold.
    all_of: Vec<FieldFilter>,
    /// Set when the query selected something that cannot match.
    never: bool,
}

impl Predicate {
    /// Matches every record.
    pub fn always() -> Self {
        Self::default()
    }

    /// Matches no record.
    pub fn never() -> Self {
        Self {
            never: true,
            ..Default::default()
        }
    }

    /// Matches records satisfying every filter.
    pub fn all(filters: Vec<FieldFilter>) -> Self {
        Self {
            all_of: filters,
            ..Default::default()
        }
    }

    /// Add a condition that must also hold.
    pub fn and(mut self, filter: FieldFilter) -> Self {
        self.all_of.push(filter);
        self
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if self.never {
            return false;
        }
        let any = self.any_of.is_empty() || self.any_of.iter().any(|f| f.matches(record));
        any && self.all_of.iter().all(|f| f.matches(record))
    }
}

/// Build the combined predicate for a query against a schema.
pub fn compose(query: &QueryDescriptor, schema: &ViewSchema) -> Predicate {
    let mut predicate = Predicate::always();

    if !query.free_text.is_empty() {
        // no search fields: nothing can contain the text
        if schema.search_fields.is_empty() {
            return Predicate::never();
        }
        predicate.any_of = schema
            .search_fields
            .iter()
            .map(|field| FieldFilter::contains(*field, query.free_text.as_str()))
            .collect();
    }

    if let Some(category) = selection(&query.category) {
        predicate.all_of.push(FieldFilter::eq(
            schema.category_field,
            FieldValue::Tag(category.to_string()),
        ));
    }

    if let Some(tab_name) = selection(&query.tab) {
        match schema.tab(tab_name) {
            Some(tab) => predicate.all_of.extend(tab.filters.iter().cloned()),
            None => predicate.never = true,
        }
    }

    predicate
}

/// `None` and the `"all"` sentinel both mean "no restriction".
fn selection(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| *v != ALL)
}
