//! Row-oriented CSV sink
//!
//! One header row (`text,author,tags`), then one row per record with the
//! tag sequence flattened into a single comma-and-space-joined field.

use crate::output::traits::{OutputResult, RecordSink};
use crate::record::Record;
use std::path::{Path, PathBuf};

/// CSV sink writing one row per record
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Creates a sink targeting the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for CsvSink {
    fn write(&self, records: &[Record]) -> OutputResult<()> {
        // Writer::from_path truncates any existing file
        let mut writer = csv::Writer::from_path(&self.path)?;

        writer.write_record(["text", "author", "tags"])?;
        for record in records {
            let tags = record.joined_tags();
            writer.write_record([record.text.as_str(), record.author.as_str(), tags.as_str()])?;
        }
        writer.flush()?;

        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record {
                text: "The world as we have created it is a process of our thinking.".to_string(),
                author: "Albert Einstein".to_string(),
                tags: vec!["change".to_string(), "thinking".to_string()],
            },
            Record {
                text: "Quote with, a comma".to_string(),
                author: "Unknown author".to_string(),
                tags: vec![],
            },
        ]
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        let records = sample_records();

        CsvSink::new(&path).write(&records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, vec!["text", "author", "tags"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(&row[0], record.text.as_str());
            assert_eq!(&row[1], record.author.as_str());
            assert_eq!(&row[2], record.joined_tags().as_str());
        }
    }

    #[test]
    fn test_csv_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        std::fs::write(&path, "stale content that should vanish").unwrap();

        CsvSink::new(&path).write(&sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale content"));
        assert!(content.starts_with("text,author,tags"));
    }

    #[test]
    fn test_csv_empty_records_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");

        CsvSink::new(&path).write(&[]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.records().count(), 0);
    }

    #[test]
    fn test_csv_unwritable_path_fails() {
        let sink = CsvSink::new("/nonexistent-dir/quotes.csv");
        assert!(sink.write(&sample_records()).is_err());
    }
}
