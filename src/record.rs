//! Typed message records produced by the parser.
//!
//! A [`MessageRecord`] is one row of the analysis table. It is built complete
//! at parse time: the calendar fields (date, year, month, weekday, hour
//! bucket, ...) are derived once from the timestamp in [`MessageRecord::new`]
//! and never patched afterwards.
//!
//! # Example
//!
//! ```
//! use chatlens::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 15, 0)
//!     .unwrap();
//! let record = MessageRecord::new(ts, "Alice", "Happy new year!");
//!
//! assert_eq!(record.day_name, "Sunday");
//! assert_eq!(record.month, "January");
//! assert_eq!(record.hour_bucket, "23-00");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Sender value for lines without an identifiable author
/// ("X joined", encryption notices, ...).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// English weekday names, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English month names, January first.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One parsed chat message with its derived calendar fields.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the message was sent (export local time) |
/// | `sender` | `String` | Author, or [`GROUP_NOTIFICATION`] |
/// | `text` | `String` | Message body without the `sender: ` prefix |
/// | `date` | `NaiveDate` | Calendar date of `timestamp` |
/// | `year`, `month_num`, `day` | numbers | Calendar components |
/// | `month`, `day_name` | `String` | English month and weekday names |
/// | `hour`, `minute` | `u32` | Clock components (24-hour) |
/// | `hour_bucket` | `String` | `"HH-HH+1"`, wrapping `23-00` |
///
/// Deserializing reads only `timestamp`, `sender` and `text` and derives the
/// calendar fields again, so a stored record can never carry a `hour` of 24
/// or a `month_num` of 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordParts")]
pub struct MessageRecord {
    pub timestamp: NaiveDateTime,
    pub sender: String,
    pub text: String,
    pub date: NaiveDate,
    pub year: i32,
    pub month_num: u32,
    pub month: String,
    pub day: u32,
    pub day_name: String,
    pub hour: u32,
    pub minute: u32,
    pub hour_bucket: String,
}

impl MessageRecord {
    /// Builds a record and derives every calendar field from `timestamp`.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let date = timestamp.date();
        let hour = timestamp.hour();

        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
            date,
            year: date.year(),
            month_num: date.month(),
            month: month_name(date.month()).to_string(),
            day: date.day(),
            day_name: WEEKDAYS[date.weekday().num_days_from_monday() as usize].to_string(),
            hour,
            minute: timestamp.minute(),
            hour_bucket: hour_bucket(hour),
        }
    }

    /// Creates a senderless (system notification) record.
    pub fn notification(timestamp: NaiveDateTime, text: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, text)
    }

    /// Returns `true` if the parser could not identify an author.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }
}

/// The source columns of a record; everything else is derived.
#[derive(Deserialize)]
struct RecordParts {
    timestamp: NaiveDateTime,
    sender: String,
    text: String,
}

impl From<RecordParts> for MessageRecord {
    fn from(parts: RecordParts) -> Self {
        MessageRecord::new(parts.timestamp, parts.sender, parts.text)
    }
}

/// Formats the hour bucket label for `hour`, e.g. `14` → `"14-15"`.
pub fn hour_bucket(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// Returns the English name of a 1-based month number.
///
/// # Panics
///
/// Panics if `month_num` is not in `1..=12`.
pub fn month_name(month_num: u32) -> &'static str {
    MONTHS[(month_num - 1) as usize]
}
