//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building an HTTP client with the configured user agent
//! - Substituting the page index into the URL template
//! - GET requests to fetch page markup
//! - Per-page error classification
//!
//! A failed fetch is data, not a panic: every outcome is reported through
//! [`FetchOutcome`] so the controller can decide what it means for the run.
//! No retry is performed.

use reqwest::Client;
use std::time::Duration;

/// Result of a single page fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Transport failure (connection refused, timeout, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchOutcome {
    /// Returns true if the fetch produced a usable page body
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Short description of a failed outcome, for logging
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { status_code } => Some(format!("HTTP status {}", status_code)),
            Self::NetworkError { error } => Some(error.clone()),
        }
    }
}

/// Builds an HTTP client with the configured User-Agent
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value sent with every request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Substitutes a 1-based page index into the URL template
///
/// Only the first `{}` placeholder is replaced.
pub fn page_url(template: &str, page: u32) -> String {
    template.replacen("{}", &page.to_string(), 1)
}

/// Fetches one page of the listing
///
/// Issues a single GET against the templated URL. Non-success statuses and
/// transport failures are classified into [`FetchOutcome`] variants rather
/// than returned as errors; the caller treats them as per-page signals.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `template` - The page URL template
/// * `page` - The 1-based page index
pub async fn fetch_page(client: &Client, template: &str, page: u32) -> FetchOutcome {
    let url = page_url(template, page);
    tracing::debug!("Fetching page {}: {}", page, url);

    match client.get(&url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchOutcome::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success {
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchOutcome::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            // Classify error
            if e.is_timeout() {
                FetchOutcome::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchOutcome::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                FetchOutcome::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}
