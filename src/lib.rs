//! # chatlens
//!
//! Parses exported chat logs (the `WhatsApp` "Export chat" TXT format) into
//! typed message records and computes descriptive statistics over them, for
//! one sender or for the whole conversation.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let raw = "\
//! 12/01/23, 14:05 - Alice: Hello there
//! 12/01/23, 14:06 - Bob: <Media omitted>
//! 12/01/23, 14:07 - Alice joined using this group's invite link
//! ";
//!
//! let records = chatlens::parse(raw);
//! assert_eq!(records.len(), 3);
//!
//! let config = AnalysisConfig::default();
//! let stats = fetch_stats(&Selection::Overall, &records, &config);
//! assert_eq!(stats.media, 1);
//!
//! let report = Report::build(Selection::user("Alice"), &records, &config);
//! assert_eq!(report.stats.messages, 1);
//! ```
//!
//! ## Parsing Files
//!
//! ```rust,no_run
//! use chatlens::config::WhatsAppConfig;
//! use chatlens::parsers::{ChatParser, WhatsAppParser};
//!
//! let parser = WhatsAppParser::with_config(WhatsAppConfig::new().with_strict(true));
//! let records = parser.parse("chat.txt".as_ref())?;
//! # Ok::<(), chatlens::AnalyzerError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsers`] - [`parse`], [`parse_with_report`], [`WhatsAppParser`](parsers::WhatsAppParser)
//! - [`parsing`] - format detection, segmentation and timestamp primitives
//! - [`record`] - [`MessageRecord`] and its derived calendar fields
//! - [`core`] - the statistics engine and output writers
//! - [`report`] - [`Report`](report::Report), every statistic for one selection
//! - [`config`] - [`WhatsAppConfig`](config::WhatsAppConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`error`] - [`AnalyzerError`], [`Result`]
//! - [`cli`] - CLI types (feature `cli`)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parsers;
pub mod parsing;
pub mod record;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use error::{AnalyzerError, Result};
pub use parsers::{parse, parse_with_report};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;
    pub use crate::error::{AnalyzerError, Result};

    pub use crate::config::{AnalysisConfig, WhatsAppConfig};
    pub use crate::parsers::{ChatParser, ParseOutcome, WhatsAppParser, parse, parse_with_report};
    pub use crate::parsing::DateFormat;

    pub use crate::core::{
        Selection, activity_heat_map, create_wordcloud, daily_timeline, emoji_helper,
        fetch_stats, month_activity_map, monthly_timeline, most_busy_users, most_common_words,
        user_list, week_activity_map,
    };
    pub use crate::report::Report;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
}
