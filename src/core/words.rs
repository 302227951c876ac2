//! Word frequency: the most common words table and word cloud input.
//!
//! Text is lowercased and split on every non-alphanumeric character. Stop
//! words, media placeholders and notification lines never contribute.

use serde::{Deserialize, Serialize};

use super::counter::Counter;
use super::filter::{Selection, apply_selection};
use crate::MessageRecord;
use crate::config::AnalysisConfig;

/// A word with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// A word cloud entry: its count and its weight relative to the most frequent
/// word (1.0 for the top word).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudWord {
    pub word: String,
    pub count: usize,
    pub weight: f64,
}

/// Frequencies ready for a word cloud renderer, most frequent first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordCloud {
    pub words: Vec<CloudWord>,
}

/// Splits `text` into lowercase alphanumeric tokens.
///
/// ```
/// use chatlens::core::words::tokenize;
///
/// assert_eq!(tokenize("Don't STOP-me now!"), ["don", "t", "stop", "me", "now"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn count_words(
    selection: &Selection,
    records: &[MessageRecord],
    config: &AnalysisConfig,
) -> Counter<String> {
    apply_selection(records, selection)
        .into_iter()
        .filter(|r| !r.is_notification() && !config.is_media(&r.text))
        .flat_map(|r| tokenize(&r.text))
        .filter(|w| !config.is_stop_word(w))
        .collect()
}

/// Returns the `config.top_words` most frequent words (20 by default),
/// descending; ties keep the order in which words first appeared.
///
/// # Example
///
/// ```
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::{Selection, most_common_words};
///
/// let records = chatlens::parse(
///     "1/1/23, 10:00 - Alice: Hello there\n\
///      1/1/23, 10:05 - Bob: <Media omitted>\n\
///      1/1/23, 10:06 - Alice joined\n",
/// );
/// let words = most_common_words(&Selection::Overall, &records, &AnalysisConfig::default());
///
/// assert_eq!(words[0].word, "hello");
/// assert_eq!(words.len(), 1);
/// ```
pub fn most_common_words(
    selection: &Selection,
    records: &[MessageRecord],
    config: &AnalysisConfig,
) -> Vec<WordCount> {
    count_words(selection, records, config)
        .most_common()
        .into_iter()
        .take(config.top_words)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Builds word cloud frequencies, capped at `config.max_cloud_words`.
pub fn create_wordcloud(
    selection: &Selection,
    records: &[MessageRecord],
    config: &AnalysisConfig,
) -> WordCloud {
    let ranked = count_words(selection, records, config).most_common();
    let max = ranked.first().map_or(1, |(_, n)| *n);

    let words = ranked
        .into_iter()
        .take(config.max_cloud_words)
        .map(|(word, count)| CloudWord {
            word,
            count,
            weight: count as f64 / max as f64,
        })
        .collect();

    WordCloud { words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GROUP_NOTIFICATION;
    use chrono::NaiveDate;

    fn record(sender: &str, text: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        MessageRecord::new(ts, sender, text)
    }

    fn sample() -> Vec<MessageRecord> {
        vec![
            record("Alice", "Pizza tonight? Pizza!"),
            record("Bob", "<Media omitted>"),
            record("Bob", "pizza, pasta or sushi"),
            record(GROUP_NOTIFICATION, "Alice created group pizza"),
            record("Alice", "the sushi place is closed"),
        ]
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Hello, WORLD!! 42times"), ["hello", "world", "42times"]);
        assert_eq!(tokenize("Привет мир"), ["привет", "мир"]);
        assert!(tokenize("  ...  ").is_empty());
    }

    #[test]
    fn test_most_common_words() {
        let words = most_common_words(&Selection::Overall, &sample(), &AnalysisConfig::default());
        let pairs: Vec<_> = words.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(
            pairs,
            [
                ("pizza", 3),
                ("sushi", 2),
                ("tonight", 1),
                ("pasta", 1),
                ("place", 1),
                ("closed", 1),
            ]
        );
    }

    #[test]
    fn test_most_common_words_excludes_media_and_notifications() {
        let words = most_common_words(&Selection::Overall, &sample(), &AnalysisConfig::default());
        assert!(words.iter().all(|w| w.word != "media" && w.word != "omitted"));
        assert!(words.iter().all(|w| w.word != "created"));
    }

    #[test]
    fn test_most_common_words_limit() {
        let text: String = (0..30).map(|i| format!("word{i} ")).collect();
        let records = vec![record("Alice", &text)];
        let words = most_common_words(&Selection::Overall, &records, &AnalysisConfig::default());
        assert_eq!(words.len(), 20);
        assert_eq!(words[0].word, "word0");
        assert_eq!(words[19].word, "word19");
    }

    #[test]
    fn test_most_common_words_user() {
        let words = most_common_words(&Selection::user("Bob"), &sample(), &AnalysisConfig::default());
        let list: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(list, ["pizza", "pasta", "sushi"]);
    }

    #[test]
    fn test_custom_stop_words() {
        let config = AnalysisConfig::new().with_extra_stop_words(["pizza"]);
        let words = most_common_words(&Selection::Overall, &sample(), &config);
        assert_eq!(words[0].word, "sushi");
    }

    #[test]
    fn test_create_wordcloud() {
        let cloud = create_wordcloud(
            &Selection::Overall,
            &sample(),
            &AnalysisConfig::default().with_max_cloud_words(2),
        );
        assert_eq!(cloud.words.len(), 2);
        assert_eq!(cloud.words[0].word, "pizza");
        assert!((cloud.words[0].weight - 1.0).abs() < f64::EPSILON);
        assert!((cloud.words[1].weight - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_create_wordcloud_empty() {
        let cloud = create_wordcloud(&Selection::Overall, &[], &AnalysisConfig::default());
        assert!(cloud.words.is_empty());
    }
}
