//! Tree-structured JSON sink
//!
//! Serializes the full record sequence as a pretty-printed array with
//! 4-space indentation, tags kept as a nested ordered list. Parsing the
//! file back reproduces the record list exactly.

use crate::output::traits::{OutputResult, RecordSink};
use crate::record::Record;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// JSON sink writing the records as one nested document
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    /// Creates a sink targeting the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for JsonSink {
    fn write(&self, records: &[Record]) -> OutputResult<()> {
        // File::create truncates any existing file
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        records.serialize(&mut serializer)?;
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
                text: "It is our choices that show what we truly are.".to_string(),
                author: "J.K. Rowling".to_string(),
                tags: vec!["abilities".to_string(), "choices".to_string()],
            },
            Record {
                text: "No text".to_string(),
                author: "Unknown author".to_string(),
                tags: vec![],
            },
        ]
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        let records = sample_records();

        JsonSink::new(&path).write(&records).unwrap();

        let file = File::open(&path).unwrap();
        let parsed: Vec<Record> = serde_json::from_reader(file).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        JsonSink::new(&path).write(&sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n    {"));
        assert!(content.contains("\n        \"text\""));
    }

    #[test]
    fn test_json_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        std::fs::write(&path, "[{\"stale\": true}]").unwrap();

        JsonSink::new(&path).write(&sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_json_empty_records_is_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");

        JsonSink::new(&path).write(&[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn test_json_unwritable_path_fails() {
        let sink = JsonSink::new("/nonexistent-dir/quotes.json");
        assert!(sink.write(&sample_records()).is_err());
    }
}
