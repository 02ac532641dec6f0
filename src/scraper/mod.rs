//! Scraper module for paginated quote extraction
//!
//! This module contains the scraping pipeline:
//! - HTTP fetching with per-page outcome classification
//! - Quote-block extraction with placeholder fallbacks
//! - Pagination control and record accumulation

mod controller;
mod extractor;
mod fetcher;

pub use controller::{Controller, ScrapeReport, StopReason};
pub use extractor::{extract_page, PageExtraction, MISSING_AUTHOR, MISSING_TEXT};
pub use fetcher::{build_http_client, fetch_page, page_url, FetchOutcome};

use crate::config::ScraperConfig;

/// Runs a complete scrape operation
///
/// This is the main entry point for the scraping flow. It builds the HTTP
/// client, walks pages from index 1 until a stopping signal fires, and
/// returns the accumulated records along with the reason the run stopped.
///
/// Per-page fetch failures are reported inside the [`ScrapeReport`], not as
/// errors; the only error path here is failing to construct the client.
pub async fn scrape(config: ScraperConfig) -> crate::Result<ScrapeReport> {
    let controller = Controller::new(config)?;
    Ok(controller.run().await)
}
