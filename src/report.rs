//! Complete analysis for one selection.
//!
//! A [`Report`] bundles every statistic the dashboard shows for a selected
//! sender (or the whole conversation) so callers can compute it in one call
//! and serialize it.
//!
//! # Example
//!
//! ```
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::Selection;
//! use chatlens::report::Report;
//!
//! let records = chatlens::parse("1/1/23, 10:00 - Alice: Hello\n1/1/23, 10:01 - Bob: Hi\n");
//! let report = Report::build(Selection::Overall, &records, &AnalysisConfig::default());
//!
//! assert_eq!(report.stats.messages, 2);
//! assert!(report.busy_users.is_some());
//! ```

use serde::Serialize;

use crate::MessageRecord;
use crate::config::AnalysisConfig;
use crate::core::{
    BusyUsers, DailyCount, EmojiCount, HeatMap, LabelCount, MonthlyCount, Selection, Stats,
    WordCloud, WordCount, activity_heat_map, create_wordcloud, daily_timeline, emoji_helper,
    fetch_stats, month_activity_map, monthly_timeline, most_busy_users, most_common_words,
    week_activity_map,
};

/// Every aggregate for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub selection: Selection,
    pub stats: Stats,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<LabelCount>,
    pub month_activity: Vec<LabelCount>,
    pub heat_map: HeatMap,
    /// Only present for [`Selection::Overall`].
    pub busy_users: Option<BusyUsers>,
    pub word_cloud: WordCloud,
    pub common_words: Vec<WordCount>,
    pub emojis: Vec<EmojiCount>,
}

impl Report {
    /// Runs every statistic for `selection`.
    pub fn build(selection: Selection, records: &[MessageRecord], config: &AnalysisConfig) -> Self {
        log::debug!("building report for {selection} over {} records", records.len());

        Self {
            stats: fetch_stats(&selection, records, config),
            monthly_timeline: monthly_timeline(&selection, records),
            daily_timeline: daily_timeline(&selection, records),
            week_activity: week_activity_map(&selection, records),
            month_activity: month_activity_map(&selection, records),
            heat_map: activity_heat_map(&selection, records),
            busy_users: selection
                .is_overall()
                .then(|| most_busy_users(records, config)),
            word_cloud: create_wordcloud(&selection, records, config),
            common_words: most_common_words(&selection, records, config),
            emojis: emoji_helper(&selection, records),
            selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAT: &str = "1/1/23, 10:00 - Alice: Pizza tonight? 🍕\n\
                        1/1/23, 10:05 - Bob: <Media omitted>\n\
                        2/1/23, 18:30 - Bob: pizza yes 🍕🍕\n\
                        3/2/23, 09:00 - Alice joined using this group's invite link\n";

    #[test]
    fn test_overall_report() {
        let records = crate::parse(CHAT);
        let report = Report::build(Selection::Overall, &records, &AnalysisConfig::default());

        assert_eq!(report.stats.messages, 4);
        assert_eq!(report.stats.media, 1);
        assert_eq!(report.monthly_timeline.len(), 2);
        assert_eq!(report.daily_timeline.len(), 3);
        assert_eq!(report.week_activity.len(), 7);
        assert_eq!(report.month_activity.len(), 12);
        assert_eq!(report.heat_map.total(), 4);
        assert_eq!(report.common_words[0].word, "pizza");
        assert_eq!(report.emojis[0].count, 3);

        let busy = report.busy_users.expect("overall report ranks users");
        assert_eq!(busy.top[0].sender, "Bob");
    }

    #[test]
    fn test_user_report_has_no_ranking() {
        let records = crate::parse(CHAT);
        let report = Report::build(Selection::user("Alice"), &records, &AnalysisConfig::default());

        assert_eq!(report.stats.messages, 1);
        assert!(report.busy_users.is_none());
        assert_eq!(report.selection, Selection::user("Alice"));
    }

    #[test]
    fn test_empty_report() {
        let report = Report::build(Selection::Overall, &[], &AnalysisConfig::default());
        assert_eq!(report.stats, Stats::default());
        assert!(report.monthly_timeline.is_empty());
        assert_eq!(report.week_activity.len(), 7);
        assert!(report.emojis.is_empty());
    }
}
