//! WhatsApp export parsing primitives.
//!
//! The parser works on the whole export text rather than line by line: the
//! timestamp prefix (`D/M/YY, H:MM - ` or `D/M/YY, H:MM AM - `) is the only
//! message delimiter, so bodies may contain embedded newlines.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Any `H:MM AM|PM` clock reading; its presence anywhere switches the whole
/// export to the 12-hour format.
static TWELVE_HOUR_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d{1,2}:\d{2}\s*(?:AM|PM)").expect("valid regex"));

static TWELVE_HOUR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DateFormat::TwelveHour.pattern()).expect("valid regex"));

static TWENTY_FOUR_HOUR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DateFormat::TwentyFourHour.pattern()).expect("valid regex"));

/// Shortest non-empty run followed by `:` and a whitespace character.
static SENDER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+?):\s").expect("valid regex"));

/// Narrow no-break space, inserted by newer exports between time and AM/PM.
const NARROW_NBSP: char = '\u{202F}';

/// Timestamp layout of an export. Detected once per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `15/01/24, 10:30 PM - Sender: Message`
    TwelveHour,
    /// `15/01/24, 22:30 - Sender: Message`
    TwentyFourHour,
}

impl DateFormat {
    /// Returns the regex pattern matching a message prefix in this format.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::TwelveHour => {
                r"\d{1,2}/\d{1,2}/\d{2,4},\s*\d{1,2}:\d{2}\s*(?:AM|PM|am|pm)\s*-\s"
            }
            DateFormat::TwentyFourHour => r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s-\s",
        }
    }

    /// Returns the chrono format for a normalized stamp, by year width.
    fn parse_format(self, four_digit_year: bool) -> &'static str {
        match (self, four_digit_year) {
            (DateFormat::TwelveHour, false) => "%d/%m/%y, %I:%M %p",
            (DateFormat::TwelveHour, true) => "%d/%m/%Y, %I:%M %p",
            (DateFormat::TwentyFourHour, false) => "%d/%m/%y, %H:%M",
            (DateFormat::TwentyFourHour, true) => "%d/%m/%Y, %H:%M",
        }
    }

    fn prefix_regex(self) -> &'static Regex {
        match self {
            DateFormat::TwelveHour => LazyLock::force(&TWELVE_HOUR_PREFIX),
            DateFormat::TwentyFourHour => LazyLock::force(&TWENTY_FOUR_HOUR_PREFIX),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::TwelveHour => write!(f, "12-hour"),
            DateFormat::TwentyFourHour => write!(f, "24-hour"),
        }
    }
}

/// Picks the timestamp format for the whole export.
///
/// A single `AM`/`PM` clock reading anywhere selects [`DateFormat::TwelveHour`];
/// mixed exports are not supported.
pub fn detect_format(text: &str) -> DateFormat {
    if TWELVE_HOUR_MARKER.is_match(text) {
        DateFormat::TwelveHour
    } else {
        DateFormat::TwentyFourHour
    }
}

/// A raw message: the matched timestamp prefix and the text up to the next
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub stamp: &'a str,
    pub body: &'a str,
}

/// Splits `text` at every timestamp prefix. Text before the first prefix is
/// preamble and is not returned.
pub fn segments(text: &str, format: DateFormat) -> Vec<Segment<'_>> {
    let matches: Vec<_> = format.prefix_regex().find_iter(text).collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = matches.get(i + 1).map_or(text.len(), |next| next.start());
            Segment {
                stamp: m.as_str(),
                body: &text[m.end()..end],
            }
        })
        .collect()
}

/// Replaces narrow no-break spaces with plain spaces and trims.
pub fn normalize_stamp(stamp: &str) -> String {
    stamp.replace(NARROW_NBSP, " ").trim().to_string()
}

/// Parses a matched timestamp prefix such as `"1/1/23, 10:00 PM - "`.
///
/// Returns `None` for impossible dates or clock readings (`31/2/23`,
/// `0:15 AM`); callers drop those messages.
pub fn parse_timestamp(stamp: &str, format: DateFormat) -> Option<NaiveDateTime> {
    let normalized = normalize_stamp(stamp);
    let stamp = normalized.trim_end_matches('-').trim_end();
    let (date, clock) = stamp.split_once(',')?;
    let date = date.trim();

    let mut clock: String = clock.chars().filter(|c| !c.is_whitespace()).collect();
    if format == DateFormat::TwelveHour {
        clock = clock.to_uppercase();
        if !(clock.ends_with("AM") || clock.ends_with("PM")) {
            return None;
        }
        clock.insert(clock.len() - 2, ' ');
    }

    let four_digit_year = date.rsplit('/').next().is_some_and(|y| y.len() == 4);
    let canonical = format!("{date}, {clock}");

    NaiveDateTime::parse_from_str(&canonical, format.parse_format(four_digit_year)).ok()
}

/// Splits a message body into `(sender, text)`.
///
/// The sender is the shortest non-empty run before the first `:` followed by
/// whitespace. Bodies without one have no sender. This is purely structural:
/// a display name containing `": "` is split in the wrong place.
pub fn split_sender(body: &str) -> (Option<&str>, &str) {
    match SENDER_PREFIX.captures(body) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            (caps.get(1).map(|m| m.as_str()), &body[whole..])
        }
        None => (None, body),
    }
}

/// Strips the line terminators that separate a body from the next prefix.
pub fn strip_line_end(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_detect_format_24h() {
        let text = "1/1/23, 10:00 - Alice: Hello\n1/1/23, 22:05 - Bob: Hi";
        assert_eq!(detect_format(text), DateFormat::TwentyFourHour);
    }

    #[test]
    fn test_detect_format_12h() {
        let text = "1/1/23, 10:00 am - Alice: Hello\n1/1/23, 10:05 - Bob: Hi";
        assert_eq!(detect_format(text), DateFormat::TwelveHour);

        let text = "12/3/23, 9:41\u{202F}PM - Alice: Hello";
        assert_eq!(detect_format(text), DateFormat::TwelveHour);
    }

    #[test]
    fn test_detect_format_empty() {
        assert_eq!(detect_format(""), DateFormat::TwentyFourHour);
    }

    #[test]
    fn test_segments_drop_preamble() {
        let text = "preamble\n1/1/23, 10:00 - Alice: Hello\nsecond line\n2/1/23, 11:00 - Bob: Hi\n";
        let segs = segments(text, DateFormat::TwentyFourHour);

        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].stamp, "1/1/23, 10:00 - ");
        assert_eq!(segs[0].body, "Alice: Hello\nsecond line\n");
        assert_eq!(segs[1].stamp, "2/1/23, 11:00 - ");
        assert_eq!(segs[1].body, "Bob: Hi\n");
    }

    #[test]
    fn test_segments_none() {
        assert!(segments("no timestamps here", DateFormat::TwentyFourHour).is_empty());
    }

    #[test]
    fn test_parse_timestamp_24h() {
        assert_eq!(
            parse_timestamp("1/2/23, 9:05 - ", DateFormat::TwentyFourHour),
            Some(at(2023, 2, 1, 9, 5))
        );
        assert_eq!(
            parse_timestamp("25/12/2023, 23:59 - ", DateFormat::TwentyFourHour),
            Some(at(2023, 12, 25, 23, 59))
        );
    }

    #[test]
    fn test_parse_timestamp_12h() {
        assert_eq!(
            parse_timestamp("1/2/23, 9:05 PM - ", DateFormat::TwelveHour),
            Some(at(2023, 2, 1, 21, 5))
        );
        assert_eq!(
            parse_timestamp("1/2/23, 12:30\u{202F}am - ", DateFormat::TwelveHour),
            Some(at(2023, 2, 1, 0, 30))
        );
        assert_eq!(
            parse_timestamp("1/2/23,9:05pm - ", DateFormat::TwelveHour),
            Some(at(2023, 2, 1, 21, 5))
        );
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert_eq!(parse_timestamp("31/2/23, 10:00 - ", DateFormat::TwentyFourHour), None);
        assert_eq!(parse_timestamp("1/13/23, 10:00 - ", DateFormat::TwentyFourHour), None);
        assert_eq!(parse_timestamp("1/1/23, 25:00 - ", DateFormat::TwentyFourHour), None);
        assert_eq!(parse_timestamp("1/1/23, 0:15 AM - ", DateFormat::TwelveHour), None);
        assert_eq!(parse_timestamp("garbage", DateFormat::TwelveHour), None);
    }

    #[test]
    fn test_normalize_stamp() {
        assert_eq!(normalize_stamp(" 1/1/23, 9:05\u{202F}PM - "), "1/1/23, 9:05 PM -");
    }

    #[test]
    fn test_split_sender() {
        assert_eq!(split_sender("Alice: Hello"), (Some("Alice"), "Hello"));
        assert_eq!(split_sender("Alice: time is 10: 30"), (Some("Alice"), "time is 10: 30"));
        assert_eq!(split_sender("Alice joined\n"), (None, "Alice joined\n"));
        assert_eq!(split_sender("Bob:\n"), (Some("Bob"), ""));
        assert_eq!(split_sender(": nobody"), (None, ": nobody"));
        assert_eq!(split_sender("see https://x.y"), (None, "see https://x.y"));
    }

    #[test]
    fn test_strip_line_end() {
        assert_eq!(strip_line_end("Hello\r\n"), "Hello");
        assert_eq!(strip_line_end("a\nb\n\n"), "a\nb");
        assert_eq!(strip_line_end(""), "");
    }
}
