//! Headline statistics and sender rankings.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::counter::Counter;
use super::filter::{Selection, apply_selection};
use crate::MessageRecord;
use crate::config::AnalysisConfig;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("valid regex"));

/// The four headline numbers shown for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Number of messages.
    pub messages: usize,
    /// Whitespace-separated words summed over all messages.
    pub words: usize,
    /// Messages that are the media placeholder.
    pub media: usize,
    /// Messages containing at least one link.
    pub links: usize,
}

/// Computes message, word, media and link counts for `selection`.
///
/// # Example
///
/// ```
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::{Selection, fetch_stats};
///
/// let records = chatlens::parse(
///     "1/1/23, 10:00 - Alice: Hello there\n\
///      1/1/23, 10:05 - Bob: <Media omitted>\n\
///      1/1/23, 10:06 - Alice joined\n",
/// );
/// let stats = fetch_stats(&Selection::Overall, &records, &AnalysisConfig::default());
///
/// assert_eq!(stats.messages, 3);
/// assert_eq!(stats.media, 1);
/// assert_eq!(stats.links, 0);
/// ```
pub fn fetch_stats(
    selection: &Selection,
    records: &[MessageRecord],
    config: &AnalysisConfig,
) -> Stats {
    let selected = apply_selection(records, selection);

    Stats {
        messages: selected.len(),
        words: selected.iter().map(|r| r.text.split_whitespace().count()).sum(),
        media: selected.iter().filter(|r| config.is_media(&r.text)).count(),
        links: selected.iter().filter(|r| contains_link(&r.text)).count(),
    }
}

/// Returns `true` if `text` contains an `http(s)://` or `www.` link.
pub fn contains_link(text: &str) -> bool {
    URL.is_match(text)
}

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    pub sender: String,
    pub messages: usize,
}

/// A sender's share of all messages, in percent rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderShare {
    pub sender: String,
    pub percent: f64,
}

/// Ranking of the busiest senders in the whole conversation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusyUsers {
    /// Top senders by message count, descending.
    pub top: Vec<SenderCount>,
    /// Every sender's percentage of the total, descending.
    pub shares: Vec<SenderShare>,
}

/// Ranks senders across all records (no selection applies).
///
/// Percentages are `count / total * 100` rounded half away from zero to two
/// decimals. Notification records count as their own sender so that shares
/// add up to the total message count.
pub fn most_busy_users(records: &[MessageRecord], config: &AnalysisConfig) -> BusyUsers {
    let total = records.len();
    let ranked = records
        .iter()
        .map(|r| r.sender.as_str())
        .collect::<Counter<&str>>()
        .most_common();

    let top = ranked
        .iter()
        .take(config.top_users)
        .map(|(sender, messages)| SenderCount {
            sender: (*sender).to_string(),
            messages: *messages,
        })
        .collect();

    let shares = ranked
        .iter()
        .map(|(sender, messages)| SenderShare {
            sender: (*sender).to_string(),
            percent: round2(*messages as f64 / total as f64 * 100.0),
        })
        .collect();

    BusyUsers { top, shares }
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
