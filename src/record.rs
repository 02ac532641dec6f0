//! The scraped record data model
//!
//! A record is one extracted quote: its text, its author, and an ordered
//! list of tags. Records are immutable once constructed and carry no
//! identity beyond their position in the accumulated sequence; duplicates
//! across pages are kept as-is.

use serde::{Deserialize, Serialize};

/// One extracted quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The quote text
    pub text: String,

    /// The attributed author
    pub author: String,

    /// Tags in markup order
    pub tags: Vec<String>,
}

impl Record {
    /// Flattens the tag list into the single-field encoding used by the
    /// row-oriented sink
    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_tags() {
        let record = Record {
            text: "The world as we have created it".to_string(),
            author: "Albert Einstein".to_string(),
            tags: vec!["change".to_string(), "deep-thoughts".to_string()],
        };
        assert_eq!(record.joined_tags(), "change, deep-thoughts");
    }

    #[test]
    fn test_joined_tags_empty() {
        let record = Record {
            text: "text".to_string(),
            author: "author".to_string(),
            tags: vec![],
        };
        assert_eq!(record.joined_tags(), "");
    }

    #[test]
    fn test_joined_tags_single() {
        let record = Record {
            text: "text".to_string(),
            author: "author".to_string(),
            tags: vec!["life".to_string()],
        };
        assert_eq!(record.joined_tags(), "life");
    }
}
