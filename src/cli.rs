//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - What the binary emits
//! - [`TextReport`] - Human-readable rendering of a [`Report`]

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::core::Selection;
use crate::report::Report;

/// Analyze a WhatsApp chat export: message counts, timelines, activity maps,
/// word and emoji frequency.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --list-users
    chatlens chat.txt --user Alice --top 10
    chatlens chat.txt --top-users 3
    chatlens chat.txt --format json -o report.json
    chatlens chat.txt --format csv -o records.csv --strict")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Analyze a single sender instead of the whole conversation
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Replace the built-in stop words with a file (one word per line)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Number of most common words to report
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top: usize,

    /// Number of senders in the busiest-users ranking
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,

    /// Print the sender list and exit
    #[arg(long)]
    pub list_users: bool,

    /// Fail if any timestamp in the file cannot be parsed
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The sender selection named by `--user`.
    pub fn selection(&self) -> Selection {
        let Ok(selection) = self.user.parse();
        selection
    }

    /// Log level for the binary's own messages.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Output format options.
///
/// - [`Text`](ReportFormat::Text) - human-readable summary (default)
/// - [`Json`](ReportFormat::Json) - the full report as pretty JSON
/// - [`Csv`](ReportFormat::Csv) - the selected records as semicolon CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json", "csv"]
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Human-readable rendering of a [`Report`].
pub struct TextReport<'a>(pub &'a Report);

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const LIST_ROWS: usize = 10;

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let stats = &report.stats;

        writeln!(f, "📊 Top Statistics: {}", report.selection)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "   Messages:  {}", stats.messages)?;
        writeln!(f, "   Words:     {}", stats.words)?;
        writeln!(f, "   Media:     {}", stats.media)?;
        writeln!(f, "   Links:     {}", stats.links)?;

        writeln!(f)?;
        writeln!(f, "📅 Monthly Timeline")?;
        for row in &report.monthly_timeline {
            writeln!(f, "   {:<16} {}", row.label, row.messages)?;
        }

        writeln!(f)?;
        writeln!(f, "🗓️  Most Busy Day")?;
        for row in &report.week_activity {
            writeln!(f, "   {:<16} {}", row.label, row.messages)?;
        }

        writeln!(f)?;
        writeln!(f, "📆 Most Busy Month")?;
        for row in report.month_activity.iter().filter(|row| row.messages > 0) {
            writeln!(f, "   {:<16} {}", row.label, row.messages)?;
        }

        if let Some((day, bucket, n)) = report.heat_map.peak() {
            writeln!(f)?;
            writeln!(f, "🔥 Peak Activity: {day} {bucket} ({n} messages)")?;
        }

        if let Some(busy) = &report.busy_users {
            writeln!(f)?;
            writeln!(f, "👥 Most Busy Users")?;
            for row in &busy.top {
                writeln!(f, "   {:<16} {}", row.sender, row.messages)?;
            }
            writeln!(f, "   Share:")?;
            for row in &busy.shares {
                writeln!(f, "   {:<16} {:.2}%", row.sender, row.percent)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "💬 Most Common Words")?;
        for row in &report.common_words {
            writeln!(f, "   {:<16} {}", row.word, row.count)?;
        }

        writeln!(f)?;
        writeln!(f, "😀 Emoji Analysis")?;
        for row in report.emojis.iter().take(LIST_ROWS) {
            writeln!(f, "   {}  {}", row.emoji, row.count)?;
        }

        Ok(())
    }
}
