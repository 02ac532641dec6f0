use serde::Deserialize;

/// Default maximum number of pages a scrape will attempt
pub const DEFAULT_MAX_PAGES: u32 = 5;

/// Main configuration structure for Quotemill
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Page URL template with a `{}` placeholder for the 1-based page index
    #[serde(rename = "page-url-template", default = "default_page_url_template")]
    pub page_url_template: String,

    /// Maximum number of pages to attempt
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,

    /// Fixed pause between page fetches (milliseconds)
    #[serde(rename = "page-delay-ms", default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output sink configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path for the row-oriented CSV output
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,

    /// Path for the tree-structured JSON output
    #[serde(rename = "json-path", default = "default_json_path")]
    pub json_path: String,
}

/// KPI report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Path to the sales dataset CSV
    #[serde(rename = "sales-data-path", default = "default_sales_data_path")]
    pub sales_data_path: String,

    /// Path for the rendered KPI dashboard
    #[serde(rename = "report-path", default = "default_report_path")]
    pub report_path: String,
}

fn default_page_url_template() -> String {
    "https://quotes.toscrape.com/page/{}/".to_string()
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_page_delay_ms() -> u64 {
    1000
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string()
}

fn default_csv_path() -> String {
    "scraped_quotes.csv".to_string()
}

fn default_json_path() -> String {
    "scraped_quotes.json".to_string()
}

fn default_sales_data_path() -> String {
    "sales_data.csv".to_string()
}

fn default_report_path() -> String {
    "kpi_dashboard.md".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            page_url_template: default_page_url_template(),
            max_pages: default_max_pages(),
            page_delay_ms: default_page_delay_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            json_path: default_json_path(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sales_data_path: default_sales_data_path(),
            report_path: default_report_path(),
        }
    }
}
