//! Pagination controller - the scrape orchestration loop
//!
//! The controller drives fetch → extract over the 1-based page index,
//! accumulating records in source order. Conceptually it is a two-state
//! machine: it is `Running` while the loop iterates and every exit from the
//! loop is the transition to `Stopped`, carrying a [`StopReason`].
//!
//! Two independent stopping signals guard against off-by-one pagination and
//! markup drift: a page with zero quote blocks, and a page without the
//! next-page affordance. The empty-page check runs first; whichever signal
//! fires first wins. The page-count ceiling terminates the run regardless.

use crate::config::ScraperConfig;
use crate::record::Record;
use crate::scraper::extractor::extract_page;
use crate::scraper::fetcher::{build_http_client, fetch_page, FetchOutcome};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

/// Why the controller transitioned to its stopped state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The page index exceeded the configured ceiling
    PageLimit,

    /// A fetched page contained zero quote blocks (past the end of data)
    EmptyPage,

    /// A fetched page had records but no next-page affordance
    NoNextLink,

    /// A page fetch failed; no further pages were attempted
    FetchFailed {
        /// The 1-based index of the page that failed
        page: u32,
        /// Description of the failure
        reason: String,
    },
}

impl StopReason {
    /// Returns true if the run ended because of a fetch failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }

    /// Returns true if the run ended on one of the natural end-of-data
    /// signals rather than the ceiling or a failure
    pub fn is_natural_end(&self) -> bool {
        matches!(self, Self::EmptyPage | Self::NoNextLink)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageLimit => write!(f, "page limit reached"),
            Self::EmptyPage => write!(f, "empty page (past the end of data)"),
            Self::NoNextLink => write!(f, "no next-page link"),
            Self::FetchFailed { page, reason } => {
                write!(f, "fetch of page {} failed: {}", page, reason)
            }
        }
    }
}

/// The outcome of a complete scrape run
#[derive(Debug)]
pub struct ScrapeReport {
    /// All accumulated records, source order preserved across pages
    pub records: Vec<Record>,

    /// Number of pages successfully fetched
    pub pages_fetched: u32,

    /// The signal that stopped the run
    pub stop: StopReason,
}

/// Drives the fetch/extract loop for one scrape run
pub struct Controller {
    config: ScraperConfig,
    client: Client,
}

impl Controller {
    /// Creates a controller with an HTTP client built from the configured
    /// user agent
    pub fn new(config: ScraperConfig) -> crate::Result<Self> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self { config, client })
    }

    /// Runs the scrape loop to completion
    ///
    /// Strictly sequential: one page is fetched, fully extracted, and fully
    /// absorbed into the accumulator before the next fetch begins. The only
    /// suspension point is the fixed inter-page pause.
    ///
    /// A failed fetch stops the run (logged, carried in the report) but is
    /// never surfaced as an error to the caller; whatever was accumulated
    /// up to that point is returned.
    pub async fn run(&self) -> ScrapeReport {
        let mut records: Vec<Record> = Vec::new();
        let mut pages_fetched = 0u32;
        let mut page = 1u32;
        let start_time = std::time::Instant::now();

        tracing::info!(
            "Starting scrape: up to {} pages from {}",
            self.config.max_pages,
            self.config.page_url_template
        );

        let stop = loop {
            // Ceiling check is independent of the in-page signals
            if page > self.config.max_pages {
                break StopReason::PageLimit;
            }

            let outcome = fetch_page(&self.client, &self.config.page_url_template, page).await;
            let body = match outcome {
                FetchOutcome::Success { body, .. } => body,
                failed => {
                    let reason = failed
                        .failure_reason()
                        .unwrap_or_else(|| "unknown error".to_string());
                    tracing::warn!("Error on page {}: {}", page, reason);
                    break StopReason::FetchFailed { page, reason };
                }
            };
            pages_fetched += 1;

            let extraction = extract_page(&body);

            // Empty-page check precedes the next-link check
            if extraction.records.is_empty() {
                tracing::info!("No quotes found on page {}, reached the last page", page);
                break StopReason::EmptyPage;
            }

            tracing::debug!(
                "Page {}: {} records, next link present: {}",
                page,
                extraction.records.len(),
                extraction.has_next
            );
            records.extend(extraction.records);

            if !extraction.has_next {
                tracing::info!("No next page link found, scrape complete");
                break StopReason::NoNextLink;
            }

            // Fixed pause before advancing, to avoid hammering the server
            tokio::time::sleep(Duration::from_millis(self.config.page_delay_ms)).await;
            page += 1;
        };

        tracing::info!(
            "Scrape stopped ({}) with {} records from {} page(s) in {:?}",
            stop,
            records.len(),
            pages_fetched,
            start_time.elapsed()
        );

        ScrapeReport {
            records,
            pages_fetched,
            stop,
        }
    }
}
