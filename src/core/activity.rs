//! Weekday, month and hour-of-day activity maps.
//!
//! All maps are zero-filled: every weekday, month and hour bucket is present
//! even when no message falls into it. Records with out-of-range calendar
//! fields (only possible by editing a record by hand) are skipped.

use serde::{Deserialize, Serialize};

use super::filter::{Selection, apply_selection};
use crate::MessageRecord;
use crate::record::{MONTHS, WEEKDAYS, hour_bucket};

/// A label with its message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub messages: usize,
}

/// Messages per weekday, Monday through Sunday.
pub fn week_activity_map(selection: &Selection, records: &[MessageRecord]) -> Vec<LabelCount> {
    let mut counts = [0usize; 7];
    for record in apply_selection(records, selection) {
        if let Some(i) = WEEKDAYS.iter().position(|d| *d == record.day_name) {
            counts[i] += 1;
        }
    }
    labelled(&WEEKDAYS, &counts)
}

/// Messages per month name, January through December, all years combined.
pub fn month_activity_map(selection: &Selection, records: &[MessageRecord]) -> Vec<LabelCount> {
    let mut counts = [0usize; 12];
    for record in apply_selection(records, selection) {
        let slot = (record.month_num as usize)
            .checked_sub(1)
            .and_then(|i| counts.get_mut(i));
        if let Some(count) = slot {
            *count += 1;
        }
    }
    labelled(&MONTHS, &counts)
}

fn labelled(labels: &[&str], counts: &[usize]) -> Vec<LabelCount> {
    labels
        .iter()
        .zip(counts)
        .map(|(label, messages)| LabelCount {
            label: (*label).to_string(),
            messages: *messages,
        })
        .collect()
}

/// Weekday × hour-bucket message counts.
///
/// Rows are weekdays (Monday first), columns are the 24 hour buckets
/// `"00-01"` through `"23-00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatMap {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<usize>>,
}

impl HeatMap {
    /// Returns the count for a weekday name and hour bucket label.
    pub fn get(&self, day_name: &str, bucket: &str) -> Option<usize> {
        let row = self.rows.iter().position(|r| r == day_name)?;
        let col = self.columns.iter().position(|c| c == bucket)?;
        Some(self.cells[row][col])
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// The busiest (weekday, hour bucket) cell, if any message exists.
    /// Ties resolve to the earliest weekday, then the earliest hour.
    pub fn peak(&self) -> Option<(&str, &str, usize)> {
        let mut best: Option<(usize, usize, usize)> = None;
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &n) in row.iter().enumerate() {
                if n > 0 && best.is_none_or(|(_, _, m)| n > m) {
                    best = Some((r, c, n));
                }
            }
        }
        best.map(|(r, c, n)| (self.rows[r].as_str(), self.columns[c].as_str(), n))
    }
}

/// Cross-tabulates weekday against hour bucket for `selection`.
pub fn activity_heat_map(selection: &Selection, records: &[MessageRecord]) -> HeatMap {
    let mut cells = vec![vec![0usize; 24]; 7];
    for record in apply_selection(records, selection) {
        let row = WEEKDAYS.iter().position(|d| *d == record.day_name);
        if let Some(cell) = row.and_then(|r| cells[r].get_mut(record.hour as usize)) {
            *cell += 1;
        }
    }

    HeatMap {
        rows: WEEKDAYS.iter().map(|d| (*d).to_string()).collect(),
        columns: (0..24).map(hour_bucket).collect(),
        cells,
    }
}
