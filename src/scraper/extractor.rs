//! HTML extractor for quote records
//!
//! This module parses one page of listing markup into structured records
//! and, independently, detects whether a "next page" link is present.
//!
//! # Extraction Rules
//!
//! - Every `div.quote` block yields exactly one record, in document order.
//! - Text comes from `span.text`, author from `small.author`, tags from all
//!   `a.tag` elements inside the block, in markup order.
//! - A structurally missing text or author element resolves to a literal
//!   placeholder at this boundary; missing tags resolve to an empty list.
//!   Partial blocks are never an error.
//! - Zero quote blocks on a page is a signal for the pagination controller,
//!   not a failure of this module.

use crate::record::Record;
use scraper::{ElementRef, Html, Selector};

/// Placeholder for a quote block with no text element
pub const MISSING_TEXT: &str = "No text";

/// Placeholder for a quote block with no author element
pub const MISSING_AUTHOR: &str = "Unknown author";

/// Everything extracted from one page of markup
#[derive(Debug, Clone)]
pub struct PageExtraction {
    /// Records in document order
    pub records: Vec<Record>,

    /// Whether a next-page affordance was present
    pub has_next: bool,
}

/// Parses page markup into records plus the next-page signal
///
/// This function never fails: malformed markup simply yields fewer (or
/// zero) records.
///
/// # Arguments
///
/// * `html` - The page markup to parse
///
/// # Example
///
/// ```
/// use quotemill::scraper::extract_page;
///
/// let html = r#"<div class="quote">
///   <span class="text">Simplicity is the ultimate sophistication.</span>
///   <small class="author">Leonardo da Vinci</small>
/// </div>"#;
/// let extraction = extract_page(html);
/// assert_eq!(extraction.records.len(), 1);
/// assert!(!extraction.has_next);
/// ```
pub fn extract_page(html: &str) -> PageExtraction {
    let document = Html::parse_document(html);

    let mut records = Vec::new();
    if let Ok(quote_selector) = Selector::parse("div.quote") {
        for block in document.select(&quote_selector) {
            records.push(extract_record(&block));
        }
    }

    let has_next = Selector::parse("li.next")
        .map(|selector| document.select(&selector).next().is_some())
        .unwrap_or(false);

    PageExtraction { records, has_next }
}

/// Extracts one record from a quote block, resolving missing sub-fields
/// to their placeholders
fn extract_record(block: &ElementRef) -> Record {
    let text = select_text(block, "span.text").unwrap_or_else(|| MISSING_TEXT.to_string());
    let author = select_text(block, "small.author").unwrap_or_else(|| MISSING_AUTHOR.to_string());
    let tags = select_all_text(block, "a.tag");

    Record { text, author, tags }
}

/// Returns the trimmed text content of the first element matching the
/// selector within the block, or None if no element matches
fn select_text(block: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    block
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Returns the trimmed text content of every element matching the selector,
/// in document order
fn select_all_text(block: &ElementRef, selector: &str) -> Vec<String> {
    match Selector::parse(selector) {
        Ok(selector) => block
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}
