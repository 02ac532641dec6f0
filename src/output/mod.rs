//! Output module for serializing scraped records
//!
//! Two independent sinks consume the final record sequence after all
//! accumulation is complete:
//! - a row-oriented CSV file with the tag list flattened into one field
//! - a tree-structured JSON file that round-trips the records exactly

mod csv_sink;
mod json_sink;
mod traits;

pub use csv_sink::CsvSink;
pub use json_sink::JsonSink;
pub use traits::{OutputError, OutputResult, RecordSink};

use crate::config::OutputConfig;
use crate::record::Record;

/// Writes the record sequence through both configured sinks
///
/// The CSV sink runs first, then the JSON sink; the first failure aborts.
pub fn write_outputs(config: &OutputConfig, records: &[Record]) -> OutputResult<()> {
    let sinks: [Box<dyn RecordSink>; 2] = [
        Box::new(CsvSink::new(&config.csv_path)),
        Box::new(JsonSink::new(&config.json_path)),
    ];

    for sink in &sinks {
        sink.write(records)?;
        tracing::info!("Data saved to {}", sink.path().display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![Record {
            text: "A quote.".to_string(),
            author: "Author".to_string(),
            tags: vec!["one".to_string(), "two".to_string()],
        }]
    }

    #[test]
    fn test_write_outputs_creates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            csv_path: dir.path().join("q.csv").to_string_lossy().into_owned(),
            json_path: dir.path().join("q.json").to_string_lossy().into_owned(),
        };

        write_outputs(&config, &sample_records()).unwrap();

        assert!(std::path::Path::new(&config.csv_path).exists());
        assert!(std::path::Path::new(&config.json_path).exists());
    }

    #[test]
    fn test_write_outputs_unwritable_path_fails() {
        let config = OutputConfig {
            csv_path: "/nonexistent-dir/q.csv".to_string(),
            json_path: "/nonexistent-dir/q.json".to_string(),
        };
        assert!(write_outputs(&config, &sample_records()).is_err());
    }
}
