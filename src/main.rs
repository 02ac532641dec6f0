//! Quotemill main entry point
//!
//! Command-line interface for the quote scraper and the KPI report
//! generator.

use clap::Parser;
use quotemill::config::load_config;
use quotemill::output::write_outputs;
use quotemill::report::generate_report;
use quotemill::scraper::scrape;
use quotemill::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quotemill: a paginated quote scraper
///
/// Walks a paginated quote listing, extracting text, author, and tags from
/// every quote block, and writes the accumulated records to CSV and JSON.
/// Can alternatively render a KPI dashboard from a sales dataset.
#[derive(Parser, Debug)]
#[command(name = "quotemill")]
#[command(version = "1.0.0")]
#[command(about = "A paginated quote scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration without fetching anything
    #[arg(long, conflicts_with = "kpi_report")]
    dry_run: bool,

    /// Generate the KPI dashboard from the sales dataset and exit
    #[arg(long, conflicts_with = "dry_run")]
    kpi_report: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            // The stock run goes deeper than the config-file default
            let mut config = Config::default();
            config.scraper.max_pages = 10;
            config
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.kpi_report {
        handle_kpi_report(&config)?;
    } else {
        handle_scrape(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quotemill=info,warn"),
            1 => EnvFilter::new("quotemill=debug,info"),
            2 => EnvFilter::new("quotemill=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Quotemill Dry Run ===\n");

    println!("Scraper Configuration:");
    println!("  Page URL template: {}", config.scraper.page_url_template);
    println!("  Max pages: {}", config.scraper.max_pages);
    println!("  Page delay: {}ms", config.scraper.page_delay_ms);
    println!("  User agent: {}", config.scraper.user_agent);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);
    println!("  JSON: {}", config.output.json_path);

    println!("\nReport:");
    println!("  Sales data: {}", config.report.sales_data_path);
    println!("  Dashboard: {}", config.report.report_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the --kpi-report mode: renders the sales dashboard
fn handle_kpi_report(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Generating KPI dashboard from {}",
        config.report.sales_data_path
    );

    match generate_report(&config.report) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("An error occurred: {}", e);
            Err(e.into())
        }
    }
}

/// Handles the default mode: scrape, then write both sinks
async fn handle_scrape(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting to scrape quotes");

    let report = scrape(config.scraper).await?;

    if report.records.is_empty() {
        tracing::warn!("No quotes were scraped ({})", report.stop);
        return Ok(());
    }

    // Sink failures are fatal, unlike per-page fetch failures
    write_outputs(&config.output, &report.records)?;

    tracing::info!(
        "Done: {} records from {} page(s)",
        report.records.len(),
        report.pages_fetched
    );

    Ok(())
}
