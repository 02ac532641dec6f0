//! KPI report module
//!
//! A batch flow independent of the scraper: load a sales dataset from CSV,
//! compute three aggregate metrics per category, and render them as bar
//! charts in a markdown dashboard. Unlike the scraper's per-page error
//! handling, this flow propagates the first error it encounters.

mod dataset;
mod kpis;
mod markdown;

pub use dataset::{load_sales_data, SalesRow, REQUIRED_COLUMNS};
pub use kpis::{calculate_kpis, CategoryKpis, MARKETING_SPEND_RATE};
pub use markdown::{format_kpi_report, generate_kpi_report};

use crate::config::ReportConfig;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while generating the KPI report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Sales data file not found: {0}")]
    FileNotFound(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Failed to read sales data: {0}")]
    Csv(#[from] csv::Error),

    #[error("One or more KPI calculations returned empty results")]
    EmptyDataset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Runs the complete KPI flow: load, aggregate, render
pub fn generate_report(config: &ReportConfig) -> ReportResult<()> {
    let rows = load_sales_data(Path::new(&config.sales_data_path))?;
    tracing::info!("Dataset loaded: {} rows", rows.len());

    let kpis = calculate_kpis(&rows)?;
    tracing::info!("KPI calculations completed for {} categories", kpis.len());

    generate_kpi_report(&kpis, Path::new(&config.report_path))?;
    tracing::info!("Dashboard saved to {}", config.report_path);

    Ok(())
}
