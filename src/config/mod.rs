//! Configuration module for Quotemill
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every field has a default, so an empty file (or no file at all)
//! yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use quotemill::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping up to {} pages", config.scraper.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ReportConfig, ScraperConfig, DEFAULT_MAX_PAGES};

// Re-export parser functions
pub use parser::load_config;

// Re-export validation for callers building configs in code
pub use validation::validate;
