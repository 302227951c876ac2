//! Message counts over time.
//!
//! Both timelines are single-pass groupings keyed by calendar values, so the
//! rows come out in chronological order regardless of source order.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::filter::{Selection, apply_selection};
use crate::MessageRecord;
use crate::record::month_name;

/// One row of the monthly timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    /// `"Month-Year"`, e.g. `"January-2023"`.
    pub label: String,
    pub messages: usize,
}

/// One row of the daily timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Messages per (year, month), oldest first. Months without messages are
/// not listed.
///
/// # Example
///
/// ```
/// use chatlens::core::{Selection, monthly_timeline};
///
/// let records = chatlens::parse(
///     "5/2/23, 10:00 - Alice: later\n1/12/22, 09:00 - Bob: earlier\n",
/// );
/// let timeline = monthly_timeline(&Selection::Overall, &records);
///
/// assert_eq!(timeline[0].label, "December-2022");
/// assert_eq!(timeline[1].label, "February-2023");
/// ```
pub fn monthly_timeline(selection: &Selection, records: &[MessageRecord]) -> Vec<MonthlyCount> {
    let mut groups: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in apply_selection(records, selection) {
        *groups.entry((record.date.year(), record.date.month())).or_default() += 1;
    }

    groups
        .into_iter()
        .map(|((year, month_num), messages)| MonthlyCount {
            year,
            month_num,
            label: format!("{}-{}", month_name(month_num), year),
            messages,
        })
        .collect()
}

/// Messages per calendar date, oldest first.
pub fn daily_timeline(selection: &Selection, records: &[MessageRecord]) -> Vec<DailyCount> {
    let mut groups: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in apply_selection(records, selection) {
        *groups.entry(record.date).or_default() += 1;
    }

    groups
        .into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}
