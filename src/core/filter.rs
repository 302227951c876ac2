//! Sender selection.
//!
//! Every statistic is computed either for the whole conversation
//! ([`Selection::Overall`]) or for one sender ([`Selection::User`]).
//!
//! # Example
//!
//! ```
//! use chatlens::core::filter::{Selection, apply_selection, user_list};
//!
//! let records = chatlens::parse(
//!     "1/1/23, 10:00 - Bob: hi\n1/1/23, 10:01 - Alice: hey\n1/1/23, 10:02 - Bob joined\n",
//! );
//!
//! assert_eq!(user_list(&records), ["Overall", "Alice", "Bob"]);
//! assert_eq!(apply_selection(&records, &Selection::user("Bob")).len(), 1);
//! assert_eq!(apply_selection(&records, &Selection::Overall).len(), 3);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::error::{AnalyzerError, Result};
use crate::record::GROUP_NOTIFICATION;

/// Label of the "all senders" selector.
pub const OVERALL: &str = "Overall";

/// Which messages a statistic covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// Every record, notifications included.
    #[default]
    Overall,
    /// Records whose sender equals the name exactly.
    User(String),
}

impl Selection {
    /// Creates a single-sender selection.
    pub fn user(name: impl Into<String>) -> Self {
        Selection::User(name.into())
    }

    /// Returns `true` if `record` is covered by this selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Selection::Overall => true,
            Selection::User(name) => record.sender == *name,
        }
    }

    /// Returns `true` for the "all senders" selection.
    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    /// Checks that a user selection names a sender present in `records`.
    pub fn validate(&self, records: &[MessageRecord]) -> Result<()> {
        match self {
            Selection::Overall => Ok(()),
            Selection::User(name) if records.iter().any(|r| r.sender == *name) => Ok(()),
            Selection::User(name) => Err(AnalyzerError::unknown_user(name.clone())),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Overall => write!(f, "{OVERALL}"),
            Selection::User(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == OVERALL {
            Ok(Selection::Overall)
        } else {
            Ok(Selection::User(s.to_string()))
        }
    }
}

/// Returns the records covered by `selection`, in source order.
pub fn apply_selection<'a>(
    records: &'a [MessageRecord],
    selection: &Selection,
) -> Vec<&'a MessageRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

/// Returns the selector list: `"Overall"` followed by every distinct sender,
/// sorted, without [`GROUP_NOTIFICATION`].
pub fn user_list(records: &[MessageRecord]) -> Vec<String> {
    let senders: BTreeSet<&str> = records
        .iter()
        .map(|r| r.sender.as_str())
        .filter(|s| *s != GROUP_NOTIFICATION)
        .collect();

    std::iter::once(OVERALL)
        .chain(senders)
        .map(str::to_string)
        .collect()
}
