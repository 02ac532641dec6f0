//! Per-category KPI aggregation
//!
//! Three metrics per category:
//! - total sales: sum of TotalSales
//! - ROMS (return on marketing spend): total sales over a simulated
//!   marketing spend of 5% of total sales
//! - AOV (average order value): sum of TotalSales over sum of QuantitySold

use crate::report::dataset::SalesRow;
use crate::report::ReportError;
use std::collections::BTreeMap;

/// Simulated marketing spend as a fraction of total sales
pub const MARKETING_SPEND_RATE: f64 = 0.05;

/// The three aggregate metrics for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryKpis {
    pub total_sales: f64,
    pub roms: f64,
    pub aov: f64,
}

/// Computes the KPIs per category
///
/// Categories are returned in lexicographic order. An empty dataset is an
/// error: every downstream chart would be empty.
pub fn calculate_kpis(rows: &[SalesRow]) -> Result<BTreeMap<String, CategoryKpis>, ReportError> {
    if rows.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    // (total sales, total quantity) per category
    let mut totals: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for row in rows {
        let entry = totals.entry(row.category.clone()).or_insert((0.0, 0.0));
        entry.0 += row.total_sales;
        entry.1 += row.quantity_sold;
    }

    Ok(totals
        .into_iter()
        .map(|(category, (total_sales, quantity))| {
            let marketing_spend = total_sales * MARKETING_SPEND_RATE;
            let roms = if marketing_spend > 0.0 {
                total_sales / marketing_spend
            } else {
                0.0
            };
            let aov = if quantity > 0.0 {
                total_sales / quantity
            } else {
                0.0
            };
            (
                category,
                CategoryKpis {
                    total_sales,
                    roms,
                    aov,
                },
            )
        })
        .collect())
}
