//! Quotemill: a paginated quote scraper with a KPI report sidecar
//!
//! This crate implements two independent batch flows: a scraper that walks
//! paginated quote listings, extracting structured records and writing them
//! to CSV and JSON sinks, and a report generator that aggregates a sales
//! dataset into per-category KPIs rendered as a markdown dashboard.

pub mod config;
pub mod output;
pub mod record;
pub mod report;
pub mod scraper;

use thiserror::Error;

/// Main error type for Quotemill operations
#[derive(Debug, Error)]
pub enum QuotemillError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Report error: {0}")]
    Report(#[from] report::ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Quotemill operations
pub type Result<T> = std::result::Result<T, QuotemillError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
// (crate:: paths, since `scraper` is also the name of the HTML crate)
pub use crate::config::Config;
pub use crate::record::Record;
pub use crate::scraper::{ScrapeReport, StopReason};
