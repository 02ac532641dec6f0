use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[scraper]
page-url-template = "https://quotes.example.com/page/{}/"
max-pages = 3
page-delay-ms = 250
user-agent = "TestAgent/1.0"

[output]
csv-path = "./out.csv"
json-path = "./out.json"

[report]
sales-data-path = "./sales.csv"
report-path = "./dashboard.md"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(
            config.scraper.page_url_template,
            "https://quotes.example.com/page/{}/"
        );
        assert_eq!(config.scraper.max_pages, 3);
        assert_eq!(config.scraper.page_delay_ms, 250);
        assert_eq!(config.output.csv_path, "./out.csv");
        assert_eq!(config.report.report_path, "./dashboard.md");
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.scraper.max_pages, 5);
        assert_eq!(config.scraper.page_delay_ms, 1000);
        assert_eq!(config.output.csv_path, "scraped_quotes.csv");
        assert_eq!(config.output.json_path, "scraped_quotes.json");
    }

    #[test]
    fn test_load_partial_config() {
        let config_content = r#"
[scraper]
max-pages = 7
"#;
        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.scraper.max_pages, 7);
        // Unset fields fall back to defaults
        assert_eq!(
            config.scraper.page_url_template,
            "https://quotes.toscrape.com/page/{}/"
        );
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[scraper]
max-pages = 0
"#;
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
