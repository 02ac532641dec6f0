//! Sales dataset loading and validation
//!
//! The dataset is a CSV with one row per line item. The header must carry
//! every required column; a missing column is rejected up front with a
//! named error rather than surfacing later as a row-level decode failure.

use crate::report::ReportError;
use serde::Deserialize;
use std::path::Path;

/// Columns the sales dataset must provide
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Date",
    "ProductID",
    "ProductName",
    "Category",
    "QuantitySold",
    "PricePerUnit",
    "TotalSales",
];

/// One line item from the sales dataset
#[derive(Debug, Clone, Deserialize)]
pub struct SalesRow {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "ProductID")]
    pub product_id: String,

    #[serde(rename = "ProductName")]
    pub product_name: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "QuantitySold")]
    pub quantity_sold: f64,

    #[serde(rename = "PricePerUnit")]
    pub price_per_unit: f64,

    #[serde(rename = "TotalSales")]
    pub total_sales: f64,
}

/// Loads and validates the sales dataset
///
/// # Arguments
///
/// * `path` - Path to the sales CSV file
///
/// # Returns
///
/// * `Ok(Vec<SalesRow>)` - All rows, in file order
/// * `Err(ReportError)` - File missing, column missing, or a row failed to decode
pub fn load_sales_data(path: &Path) -> Result<Vec<SalesRow>, ReportError> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;

    // Validate required columns before decoding any rows
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ReportError::MissingColumn(column.to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }

    Ok(rows)
}
