//! Edge case tests for chatlens
//!
//! These tests cover export quirks and boundary conditions that the unit
//! tests of individual modules do not reach.

use chatlens::config::AnalysisConfig;
use chatlens::core::{Selection, emoji_helper, fetch_stats, most_common_words, user_list};
use chatlens::parsing::DateFormat;
use chatlens::record::GROUP_NOTIFICATION;
use chatlens::{parse, parse_with_report};
use chrono::NaiveDate;

// =========================================================================
// Input shape
// =========================================================================

#[test]
fn test_empty_and_whitespace_input() {
    assert!(parse("").is_empty());
    assert!(parse("   \n\n\t").is_empty());

    let outcome = parse_with_report("");
    assert_eq!(outcome.candidates, 0);
    assert_eq!(outcome.dropped, 0);
}

#[test]
fn test_no_timestamps() {
    assert!(parse("just a note\nanother line").is_empty());
}

#[test]
fn test_preamble_is_discarded() {
    let raw = "Exported from phone\n\n1/1/23, 10:00 - Alice: Hi\n";
    let records = parse(raw);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "Hi");
}

#[test]
fn test_missing_trailing_newline() {
    let records = parse("1/1/23, 10:00 - Alice: Hi\n1/1/23, 10:01 - Bob: last");
    assert_eq!(records[1].text, "last");
}

#[test]
fn test_empty_body_kept() {
    let records = parse("1/1/23, 10:00 - Alice: \n1/1/23, 10:01 - \n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sender, "Alice");
    assert_eq!(records[0].text, "");
    assert_eq!(records[1].sender, GROUP_NOTIFICATION);
    assert_eq!(records[1].text, "");
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_four_digit_year() {
    let records = parse("15/01/2024, 22:30 - Alice: Hi\n");
    assert_eq!(records[0].year, 2024);
    assert_eq!(records[0].day, 15);
}

#[test]
fn test_day_first_dates() {
    // 12/01 is the 12th of January, not December 1st
    let records = parse("12/01/23, 14:05 - Alice: Hi\n");
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2023, 1, 12).unwrap());
    assert_eq!(records[0].day_name, "Thursday");
}

#[test]
fn test_lowercase_and_nbsp_meridiem() {
    let raw = "1/1/23, 9:05 pm - Alice: a\n1/1/23, 9:06\u{202F}AM - Bob: b\n";
    let outcome = parse_with_report(raw);
    assert_eq!(outcome.format, DateFormat::TwelveHour);
    assert_eq!(outcome.records[0].hour, 21);
    assert_eq!(outcome.records[1].hour, 9);
}

#[test]
fn test_midnight_and_noon() {
    let records = parse("1/1/23, 12:00 AM - Alice: a\n1/1/23, 12:00 PM - Bob: b\n");
    assert_eq!(records[0].hour, 0);
    assert_eq!(records[0].hour_bucket, "00-01");
    assert_eq!(records[1].hour, 12);
    assert_eq!(records[1].hour_bucket, "12-13");
}

#[test]
fn test_invalid_dates_dropped() {
    let raw = "31/2/23, 10:00 - Alice: bad day\n\
               1/13/23, 10:00 - Alice: bad month\n\
               1/1/23, 24:00 - Alice: bad hour\n\
               1/1/23, 10:00 - Bob: good\n";
    let outcome = parse_with_report(raw);
    assert_eq!(outcome.candidates, 4);
    assert_eq!(outcome.dropped, 3);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].sender, "Bob");
}

#[test]
fn test_mixed_formats_absorb_minority_lines() {
    // one AM/PM reading makes the whole file 12-hour; 24-hour prefixes are
    // then ordinary body text of the previous message
    let raw = "1/1/23, 10:00 AM - Alice: first\n1/1/23, 22:00 - Bob: second\n";
    let records = parse(raw);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "first\n1/1/23, 22:00 - Bob: second");
}

// =========================================================================
// Sender heuristic
// =========================================================================

#[test]
fn test_sender_with_colon_in_text() {
    let records = parse("1/1/23, 10:00 - Alice: time: 10:30 sharp\n");
    assert_eq!(records[0].sender, "Alice");
    assert_eq!(records[0].text, "time: 10:30 sharp");
}

#[test]
fn test_phone_number_sender() {
    let records = parse("1/1/23, 10:00 - +91 98765 43210: namaste\n");
    assert_eq!(records[0].sender, "+91 98765 43210");
}

#[test]
fn test_notification_not_in_user_list() {
    let records = parse("1/1/23, 10:00 - Alice added Bob\n1/1/23, 10:01 - Bob: thanks\n");
    assert_eq!(records[0].sender, GROUP_NOTIFICATION);
    assert_eq!(user_list(&records), ["Overall", "Bob"]);
}

// =========================================================================
// Unicode
// =========================================================================

#[test]
fn test_unicode_senders_and_words() {
    let raw = "1/1/23, 10:00 - Иван: Привет мир\n1/1/23, 10:01 - 田中太郎: こんにちは\n";
    let records = parse(raw);
    assert_eq!(records[0].sender, "Иван");
    assert_eq!(records[1].sender, "田中太郎");

    let words = most_common_words(&Selection::user("Иван"), &records, &AnalysisConfig::default());
    let list: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(list, ["привет", "мир"]);
}

#[test]
fn test_emoji_sequences() {
    let raw = "1/1/23, 10:00 - Alice: 👍🏽 ❤️ 🇮🇳\n";
    let emojis = emoji_helper(&Selection::Overall, &parse(raw));
    let found: Vec<char> = emojis.iter().map(|e| e.emoji).collect();
    assert!(found.contains(&'👍'));
    assert!(found.contains(&'❤'));
    assert!(!found.contains(&'\u{FE0F}'));
}

// =========================================================================
// Statistics boundaries
// =========================================================================

#[test]
fn test_media_placeholder_with_trailing_space() {
    let records = parse("1/1/23, 10:00 - Alice: <Media omitted> \n");
    let stats = fetch_stats(&Selection::Overall, &records, &AnalysisConfig::default());
    assert_eq!(stats.media, 1);
    assert_eq!(stats.words, 2);
}

#[test]
fn test_custom_media_placeholder() {
    let records = parse("1/1/23, 10:00 - Alice: <attached: photo.jpg>\n");
    let config = AnalysisConfig::new().with_media_placeholder("<attached: photo.jpg>");
    assert_eq!(fetch_stats(&Selection::Overall, &records, &config).media, 1);
}

#[test]
fn test_selection_is_case_sensitive() {
    let records = parse("1/1/23, 10:00 - Alice: Hi\n");
    let config = AnalysisConfig::default();
    assert_eq!(fetch_stats(&Selection::user("alice"), &records, &config).messages, 0);
    assert_eq!("overall".parse::<Selection>().unwrap(), Selection::user("overall"));
}
