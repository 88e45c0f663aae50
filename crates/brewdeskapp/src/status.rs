//! # Stock Status
//!
//! Derived, never stored: a stock level classification computed from an
//! item's thresholds on every read.
//!
//! | Condition (checked in order) | Tag | Label |
//! |------------------------------|-----|-------|
//! | `stock <= reorder_level` | `low` | Low Stock |
//! | `stock <= min_level` | `warning` | Running Low |
//! | otherwise | `ok` | In Stock |
//!
//! The fill percentage is `100 * stock / max_level`, clamped into `0..=100`.
//! A `max_level` of zero yields `0` instead of dividing by zero.

use serde::Serialize;

/// Thresholds a stock classification looks at.
///
/// `reorder_level <= min_level <= max_level` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLevels {
    pub stock: u32,
    pub reorder_level: u32,
    pub min_level: u32,
    pub max_level: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockTag {
    Low,
    Warning,
    Ok,
}

impl StockTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockTag::Low => "low",
            StockTag::Warning => "warning",
            StockTag::Ok => "ok",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockTag::Low => "Low Stock",
            StockTag::Warning => "Running Low",
            StockTag::Ok => "In Stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockStatus {
    pub tag: StockTag,
    pub percentage: f64,
}

/// Anything with stock thresholds can be classified.
pub trait HasStockLevels {
    fn stock_levels(&self) -> StockLevels;

    fn stock_status(&self) -> StockStatus {
        derive_status(&self.stock_levels())
    }
}

pub fn derive_status(levels: &StockLevels) -> StockStatus {
    let percentage = if levels.max_level == 0 {
        0.0
    } else {
        (100.0 * f64::from(levels.stock) / f64::from(levels.max_level)).clamp(0.0, 100.0)
    };

    let tag = if levels.stock <= levels.reorder_level {
        StockTag::Low
    } else if levels.stock <= levels.min_level {
        StockTag::Warning
    } else {
        StockTag::Ok
    };

    StockStatus { tag, percentage }
}
