use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::inventory::{StockFilter, DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_PAGE_SIZE};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Table and display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Rows per table page (default: 5).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Stock at or below this is tagged "Low Stock" (default: 5).
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    /// Stock filter active at startup: "all", "in" or "out" (default: "in").
    #[serde(default)]
    pub default_stock_filter: StockFilter,
    /// Input poll interval and idle redraw period in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Logging is disabled when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            low_stock_threshold: default_low_stock_threshold(),
            default_stock_filter: StockFilter::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
