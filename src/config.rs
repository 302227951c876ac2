//! Configuration types for parsing and analysis.
//!
//! - [`WhatsAppConfig`] - how strictly the export parser treats bad timestamps
//! - [`AnalysisConfig`] - stop words, media placeholder and result sizes used
//!   by the statistics engine
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, WhatsAppConfig};
//!
//! let parser_config = WhatsAppConfig::new().with_strict(true);
//! let analysis = AnalysisConfig::new()
//!     .with_top_words(10)
//!     .with_extra_stop_words(["bhai", "yaar"]);
//!
//! assert!(parser_config.strict);
//! assert!(analysis.is_stop_word("yaar"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

/// Text the export writes in place of an attached photo, video or file.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Built-in stop words: common English function words plus the Hinglish
/// fillers that dominate casual group chats.
#[rustfmt::skip]
const DEFAULT_STOP_WORDS: &[&str] = &[
    // English
    "a", "about", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "but", "by", "can", "could", "did", "do", "does",
    "doing", "don", "for", "from", "had", "has", "have", "having", "he", "her", "here", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "my", "no", "not",
    "now", "of", "off", "ok", "on", "or", "our", "out", "s", "she", "so", "some", "such", "t",
    "than", "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
    "to", "too", "up", "very", "was", "we", "were", "what", "when", "where", "which", "who",
    "why", "will", "with", "would", "you", "your",
    // Hinglish
    "aur", "bhi", "h", "hai", "hain", "ho", "haan", "hi", "ka", "kar", "ke", "ki", "ko", "kya",
    "main", "mein", "na", "nahi", "se", "tha", "to", "tu", "tum",
];

/// Configuration for WhatsApp export parsing.
///
/// By default parsing is lossy: a message whose timestamp cannot be parsed is
/// dropped without an error. Strict mode turns any dropped message into
/// [`AnalyzerError::DroppedLines`].
///
/// # Example
///
/// ```rust
/// use chatlens::config::WhatsAppConfig;
///
/// let config = WhatsAppConfig::new().with_strict(true);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Fail instead of silently dropping unparseable messages (default: false)
    pub strict: bool,
}

impl WhatsAppConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables strict timestamp validation.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Settings shared by the statistics operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Lowercase words excluded from word statistics.
    pub stop_words: HashSet<String>,

    /// Literal body the export uses for omitted media.
    pub media_placeholder: String,

    /// Number of entries returned by `most_common_words` (default: 20)
    pub top_words: usize,

    /// Number of senders returned by `most_busy_users` (default: 5)
    pub top_users: usize,

    /// Maximum number of words kept for the word cloud (default: 200)
    pub max_cloud_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            top_words: 20,
            top_users: 5,
            max_cloud_words: 200,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with the built-in stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stop-word set. Words are lowercased and trimmed.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = normalize_words(words);
        self
    }

    /// Adds words to the current stop-word set.
    #[must_use]
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words.extend(normalize_words(words));
        self
    }

    /// Replaces the stop-word set with the contents of a file, one word per
    /// line. Blank lines are ignored.
    pub fn with_stop_words_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AnalyzerError::StopWords {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.with_stop_words(content.lines()))
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets how many words `most_common_words` returns.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets how many senders `most_busy_users` ranks.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the word cloud size limit.
    #[must_use]
    pub fn with_max_cloud_words(mut self, n: usize) -> Self {
        self.max_cloud_words = n;
        self
    }

    /// Returns `true` if `word` (already lowercased) is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Returns `true` if `text` is the media placeholder.
    pub fn is_media(&self, text: &str) -> bool {
        text.trim() == self.media_placeholder
    }
}

fn normalize_words<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
