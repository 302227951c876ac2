//! The statistics engine.
//!
//! Every operation takes a [`Selection`] (one sender or the whole
//! conversation) and the parsed records, and returns a typed aggregate.
//! Operations are pure and total: empty input gives empty or zero-filled
//! results, never an error.
//!
//! - [`filter`] - [`Selection`], [`apply_selection`], [`user_list`]
//! - [`stats`] - [`fetch_stats`], [`most_busy_users`]
//! - [`timeline`] - [`monthly_timeline`], [`daily_timeline`]
//! - [`activity`] - [`week_activity_map`], [`month_activity_map`], [`activity_heat_map`]
//! - [`words`] - [`most_common_words`], [`create_wordcloud`]
//! - [`emoji`] - [`emoji_helper`]
//! - [`output`] - CSV and JSON writers
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::{Selection, fetch_stats, monthly_timeline};
//!
//! let records = chatlens::parse("1/1/23, 10:00 - Alice: Hello\n");
//! let config = AnalysisConfig::default();
//!
//! let stats = fetch_stats(&Selection::Overall, &records, &config);
//! let timeline = monthly_timeline(&Selection::user("Alice"), &records);
//! assert_eq!(stats.messages, timeline[0].messages);
//! ```

pub mod activity;
pub mod counter;
pub mod emoji;
pub mod filter;
pub mod output;
pub mod stats;
pub mod timeline;
pub mod words;

// Re-export main types for convenience
pub use activity::{HeatMap, LabelCount, activity_heat_map, month_activity_map, week_activity_map};
pub use emoji::{EmojiCount, emoji_helper};
pub use filter::{OVERALL, Selection, apply_selection, user_list};
pub use stats::{BusyUsers, SenderCount, SenderShare, Stats, fetch_stats, most_busy_users};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use words::{CloudWord, WordCloud, WordCount, create_wordcloud, most_common_words};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
