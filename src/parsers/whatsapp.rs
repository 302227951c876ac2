//! `WhatsApp` TXT export parser.
//!
//! Supported formats (detected once per file):
//! - 24-hour: `15/01/24, 22:30 - Sender: Message`
//! - 12-hour: `15/01/24, 10:30 PM - Sender: Message`
//!
//! Messages whose timestamp cannot be parsed are dropped. Lines without a
//! `Sender: ` prefix become [`GROUP_NOTIFICATION`](crate::record::GROUP_NOTIFICATION)
//! records.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::MessageRecord;
use crate::config::WhatsAppConfig;
use crate::error::{AnalyzerError, Result};
use crate::parsers::ChatParser;
use crate::parsing::whatsapp::{
    DateFormat, detect_format, parse_timestamp, segments, split_sender, strip_line_end,
};

/// Result of a parse together with its diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    /// Parsed records in source order.
    pub records: Vec<MessageRecord>,
    /// Timestamp format chosen for the file.
    pub format: DateFormat,
    /// Number of timestamp prefixes found.
    pub candidates: usize,
    /// Number of candidates dropped because their timestamp did not parse.
    pub dropped: usize,
}

impl ParseOutcome {
    /// Returns `true` if every candidate message was kept.
    pub fn is_lossless(&self) -> bool {
        self.dropped == 0
    }
}

/// Parses an export, silently dropping messages with bad timestamps.
///
/// # Example
///
/// ```rust
/// let records = chatlens::parse("1/1/23, 10:00 - Alice: Hello\n1/1/23, 10:06 - Alice joined\n");
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].sender, "Alice");
/// assert_eq!(records[1].sender, "group_notification");
/// ```
pub fn parse(text: &str) -> Vec<MessageRecord> {
    parse_with_report(text).records
}

/// Parses an export and reports how many candidate messages were dropped.
pub fn parse_with_report(text: &str) -> ParseOutcome {
    let format = detect_format(text);
    let segments = segments(text, format);
    let candidates = segments.len();
    log::debug!("detected {format} timestamps, {candidates} candidate messages");

    let records: Vec<MessageRecord> = segments
        .into_iter()
        .filter_map(|segment| {
            let Some(timestamp) = parse_timestamp(segment.stamp, format) else {
                log::trace!("dropping message with timestamp {:?}", segment.stamp);
                return None;
            };
            let record = match split_sender(segment.body) {
                (Some(sender), text) => MessageRecord::new(timestamp, sender, strip_line_end(text)),
                (None, text) => MessageRecord::notification(timestamp, strip_line_end(text)),
            };
            Some(record)
        })
        .collect();

    let dropped = candidates - records.len();
    if dropped > 0 {
        log::warn!("dropped {dropped} of {candidates} messages with unparseable timestamps");
    }

    ParseOutcome {
        records,
        format,
        candidates,
        dropped,
    }
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parsers::{ChatParser, WhatsAppParser};
///
/// let parser = WhatsAppParser::new();
/// let records = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatlens::AnalyzerError>(())
/// ```
pub struct WhatsAppParser {
    config: WhatsAppConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default (lossy) configuration.
    pub fn new() -> Self {
        Self {
            config: WhatsAppConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: WhatsAppConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &WhatsAppConfig {
        &self.config
    }

    /// Parses raw uploaded bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<MessageRecord>> {
        let content = String::from_utf8(bytes.to_vec())?;
        self.parse_content(&content, None)
    }

    fn parse_content(&self, content: &str, path: Option<&Path>) -> Result<Vec<MessageRecord>> {
        let outcome = parse_with_report(content);

        if self.config.strict && outcome.candidates == 0 && !content.trim().is_empty() {
            return Err(AnalyzerError::invalid_format(
                "WhatsApp",
                "no timestamped messages found",
            ));
        }

        if self.config.strict && !outcome.is_lossless() {
            return Err(AnalyzerError::dropped_lines(
                outcome.dropped,
                outcome.candidates,
                path.map(Path::to_path_buf),
            ));
        }

        Ok(outcome.records)
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatParser for WhatsAppParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| AnalyzerError::Utf8 {
            context: path.display().to_string(),
            source,
        })?;
        self.parse_content(&content, Some(path))
    }

    fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>> {
        self.parse_content(content, None)
    }
}
