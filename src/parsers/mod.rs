//! Chat export parsers.
//!
//! Each parser implements the [`ChatParser`] trait. The crate currently reads
//! WhatsApp TXT exports; the free functions [`parse`] and
//! [`parse_with_report`] are the infallible in-memory entry points.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parsers::{ChatParser, WhatsAppParser};
//!
//! let parser = WhatsAppParser::new();
//! let records = parser.parse_str("1/1/23, 10:00 - Alice: Hello\n")?;
//! assert_eq!(records.len(), 1);
//! # Ok::<(), chatlens::AnalyzerError>(())
//! ```

mod whatsapp;

pub use whatsapp::{ParseOutcome, WhatsAppParser, parse, parse_with_report};

use std::path::Path;

use crate::MessageRecord;
use crate::error::Result;

/// Trait for turning a chat export into message records.
pub trait ChatParser: Send + Sync {
    /// Returns the name of the parser (e.g., "WhatsApp").
    fn name(&self) -> &'static str;

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not UTF-8, or (in
    /// strict mode) contains unparseable timestamps.
    fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>>;

    /// Parses export content that is already in memory.
    fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "1/1/23, 10:00 - Alice: Hello\n1/1/23, 10:01 - Bob: Hi\n").unwrap();

        let parser: Box<dyn ChatParser> = Box::new(WhatsAppParser::new());
        let records = parser.parse(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let parser = WhatsAppParser::new();
        let err = ChatParser::parse(&parser, Path::new("/no/such/export.txt")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_parse_invalid_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x31, 0x2f, 0xff, 0xfe]).unwrap();

        let parser = WhatsAppParser::new();
        let err = ChatParser::parse(&parser, file.path()).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}
