//! # Aggregation
//!
//! Counts and summaries over a whole [`RecordStore`]. Nothing here caches:
//! the store can change between calls (a product gets switched off, stock
//! gets topped up) and every call recomputes from the current records.
//!
//! Category counts are always taken over the full store, never over a
//! filtered view, so a chip like "Gold (2)" keeps its number while the user
//! narrows the list.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

use crate::query::{Predicate, ALL};
use crate::record::Record;
use crate::store::RecordStore;

/// Date layouts records use, tried in order.
const DATETIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Per-tag counts, `"all"` first, then the field's tags in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagCounts {
    entries: Vec<TagCount>,
}

impl TagCounts {
    pub fn get(&self, tag: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| e.count)
    }

    /// Size of the store the counts were taken from.
    pub fn total(&self) -> usize {
        self.get(ALL).unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TagCount> {
        self.entries.iter()
    }

    /// Entries excluding `"all"`.
    pub fn tags(&self) -> impl Iterator<Item = &TagCount> {
        self.entries.iter().filter(|e| e.tag != ALL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Count records per tag of a categorical field, plus `"all"`.
///
/// Tags come from the field's spec. A field that isn't categorical yields
/// only the `"all"` entry.
pub fn counts_by<R: Record>(store: &RecordStore<R>, field: &str) -> TagCounts {
    let tags = R::field_spec(field)
        .filter(|spec| spec.is_categorical())
        .map(|spec| spec.tags)
        .unwrap_or(&[]);

    let mut entries = Vec::with_capacity(tags.len() + 1);
    entries.push(TagCount {
        tag: ALL.to_string(),
        count: store.len(),
    });
    for tag in tags {
        let count = store
            .iter()
            .filter(|r| {
                r.get_field(field)
                    .is_some_and(|v| v.as_tag() == Some(*tag))
            })
            .count();
        entries.push(TagCount {
            tag: tag.to_string(),
            count,
        });
    }

    TagCounts { entries }
}

pub fn count_matching<R: Record>(store: &RecordStore<R>, predicate: &Predicate) -> usize {
    store.iter().filter(|r| predicate.matches(*r)).count()
}

/// Count records whose date field falls in `[reference - days, reference]`.
///
/// Exactly `days` ago counts; anything after `reference` does not. Records
/// without a parseable date are skipped. A window reaching past the
/// earliest representable date counts everything up to `reference`.
pub fn count_within_days<R: Record>(
    store: &RecordStore<R>,
    field: &str,
    days: u32,
    reference: NaiveDateTime,
) -> usize {
    let cutoff = TimeDelta::try_days(i64::from(days))
        .and_then(|span| reference.checked_sub_signed(span))
        .unwrap_or(NaiveDateTime::MIN);
    count_between(store, field, cutoff, reference)
}

/// Count records dated on the reference's calendar day, up to `reference`.
pub fn count_same_day<R: Record>(
    store: &RecordStore<R>,
    field: &str,
    reference: NaiveDateTime,
) -> usize {
    let midnight = reference.date().and_time(NaiveTime::MIN);
    count_between(store, field, midnight, reference)
}

fn count_between<R: Record>(
    store: &RecordStore<R>,
    field: &str,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> usize {
    store
        .iter()
        .filter_map(|r| r.get_field(field))
        .filter_map(|v| v.as_date().and_then(parse_record_date))
        .filter(|at| *at >= from && *at <= to)
        .count()
}

/// Sum/min/max/mean of a numeric field over the records a predicate selects.
///
/// `None` when no selected record has a numeric value for the field.
pub fn summarize<R: Record>(
    store: &RecordStore<R>,
    field: &str,
    predicate: &Predicate,
) -> Option<NumericSummary> {
    let values: Vec<f64> = store
        .iter()
        .filter(|r| predicate.matches(*r))
        .filter_map(|r| r.get_field(field))
        .filter_map(|v| v.as_number())
        .collect();

    if values.is_empty() {
        return None;
    }

    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(NumericSummary {
        count: values.len(),
        sum,
        min,
        max,
        mean: sum / values.len() as f64,
    })
}

/// Parse a record date. Date-only values are taken at midnight.
pub fn parse_record_date(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}
