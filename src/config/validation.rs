use crate::config::types::{Config, OutputConfig, ReportConfig, ScraperConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_output_config(&config.output)?;
    validate_report_config(&config.report)?;
    Ok(())
}

/// Validates scraper configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if !config.page_url_template.contains("{}") {
        return Err(ConfigError::Validation(format!(
            "page_url_template must contain a {{}} placeholder, got '{}'",
            config.page_url_template
        )));
    }

    // The template with the placeholder substituted must be a real http(s) URL
    let probe = config.page_url_template.replacen("{}", "1", 1);
    let url = Url::parse(&probe)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid page_url_template: {}", e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "page_url_template must be http(s), got scheme '{}'",
            url.scheme()
        )));
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    if config.json_path.is_empty() {
        return Err(ConfigError::Validation(
            "json_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates report configuration
fn validate_report_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.sales_data_path.is_empty() {
        return Err(ConfigError::Validation(
            "sales_data_path cannot be empty".to_string(),
        ));
    }

    if config.report_path.is_empty() {
        return Err(ConfigError::Validation(
            "report_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
