//! Markdown dashboard rendering
//!
//! One document, three sections (one per KPI), each a text bar chart over
//! the categories. Charts are fenced code blocks so the bars line up in a
//! monospace rendering.

use crate::report::kpis::CategoryKpis;
use crate::report::ReportResult;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Widest bar, in characters
const BAR_WIDTH: usize = 40;

/// Generates the KPI dashboard file
///
/// # Arguments
///
/// * `kpis` - Per-category KPI values
/// * `output_path` - Path where the markdown file should be written
pub fn generate_kpi_report(
    kpis: &BTreeMap<String, CategoryKpis>,
    output_path: &Path,
) -> ReportResult<()> {
    let markdown = format_kpi_report(kpis);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats the KPI values as a markdown dashboard
pub fn format_kpi_report(kpis: &BTreeMap<String, CategoryKpis>) -> String {
    let mut md = String::new();

    md.push_str("# KPI Dashboard\n\n");
    md.push_str(&format!(
        "Generated: {}\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    let total_sales: Vec<(&str, f64)> = kpis
        .iter()
        .map(|(category, k)| (category.as_str(), k.total_sales))
        .collect();
    let roms: Vec<(&str, f64)> = kpis
        .iter()
        .map(|(category, k)| (category.as_str(), k.roms))
        .collect();
    let aov: Vec<(&str, f64)> = kpis
        .iter()
        .map(|(category, k)| (category.as_str(), k.aov))
        .collect();

    md.push_str(&chart_section("Total Sales per Category", &total_sales));
    md.push_str(&chart_section("ROMS per Category", &roms));
    md.push_str(&chart_section("AOV per Category", &aov));

    md
}

/// Renders one titled bar chart over (category, value) pairs
fn chart_section(title: &str, values: &[(&str, f64)]) -> String {
    let mut section = String::new();
    section.push_str(&format!("## {}\n\n", title));
    section.push_str("```\n");

    let label_width = values.iter().map(|(c, _)| c.len()).max().unwrap_or(0);
    let max_value = values.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    for (category, value) in values {
        let bar_len = if max_value > 0.0 {
            ((value / max_value) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        section.push_str(&format!(
            "{:<label_width$} | {} {:.2}\n",
            category,
            "#".repeat(bar_len),
            value,
        ));
    }

    section.push_str("```\n\n");
    section
}
