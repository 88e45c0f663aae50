//! # Configuration
//!
//! Brewdesk settings are loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `BREWDESK_RECENT_DAYS`, `BREWDESK_TOP_PRODUCTS`,
//!    `BREWDESK_REFERENCE_TIME`.
//! 2. **Config file**: `brewdesk.toml`, wherever the caller points [`DeskConfig::load`].
//!    A missing file is not an error.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `recent_days` | `7` | Window for the dashboard's recent-customer count |
//! | `top_products` | `5` | Rows in the dashboard's popular-products table |
//! | `reference_time` | unset | Fixed "now" (`YYYY-MM-DD hh:mm AM` or `YYYY-MM-DD`); local time when unset |

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use confique::Config;
use serde::{Deserialize, Serialize};

use crate::aggregate::parse_record_date;
use crate::error::{DeskError, Result};

/// Configuration for brewdesk, stored in `brewdesk.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Days back from the reference time a customer's last order still counts as recent
    #[config(default = 7, env = "BREWDESK_RECENT_DAYS")]
    pub recent_days: u32,

    /// How many products the dashboard ranks by units sold
    #[config(default = 5, env = "BREWDESK_TOP_PRODUCTS")]
    pub top_products: usize,

    /// Pin "now" for date windows. Mostly useful against the 2024 sample data.
    #[config(env = "BREWDESK_REFERENCE_TIME")]
    pub reference_time: Option<String>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            recent_days: 7,
            top_products: 5,
            reference_time: None,
        }
    }
}

impl DeskConfig {
    /// Load from the environment, then `file` if given, then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// The instant date windows are measured back from.
    pub fn reference_instant(&self) -> Result<NaiveDateTime> {
        match &self.reference_time {
            Some(raw) => parse_record_date(raw).ok_or_else(|| {
                DeskError::InvalidConfig(format!(
                    "reference_time '{raw}' is not 'YYYY-MM-DD' or 'YYYY-MM-DD hh:mm AM'"
                ))
            }),
            None => Ok(Local::now().naive_local()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DeskConfig::default();
        assert_eq!(config.recent_days, 7);
        assert_eq!(config.top_products, 5);
        assert!(config.reference_time.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "top_products = 3").unwrap();
        writeln!(file, "reference_time = \"2024-04-03\"").unwrap();

        let config = DeskConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.top_products, 3);
        assert_eq!(config.reference_time.as_deref(), Some("2024-04-03"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeskConfig::load(Some(&dir.path().join("brewdesk.toml"))).unwrap();
        assert_eq!(config.recent_days, 7);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "top_products = \"many\"").unwrap();

        let err = DeskConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));
    }

    #[test]
    fn test_reference_instant_parses_both_layouts() {
        let mut config = DeskConfig {
            reference_time: Some("2024-04-03 08:30 AM".to_string()),
            ..Default::default()
        };
        let at = config.reference_instant().unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2024-04-03 08:30");

        config.reference_time = Some("2024-04-03".to_string());
        let at = config.reference_instant().unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2024-04-03 00:00");
    }

    #[test]
    fn test_reference_instant_rejects_garbage() {
        let config = DeskConfig {
            reference_time: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.reference_instant(),
            Err(DeskError::InvalidConfig(_))
        ));
    }
}
