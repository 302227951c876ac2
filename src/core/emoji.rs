//! Emoji frequency.
//!
//! Detection is per character against the Unicode emoji registry (`emojis`),
//! so a multi-codepoint sequence (ZWJ family) is tallied as its
//! individual emoji characters. Joiners, variation selectors, skin tone
//! modifiers and lone regional indicators are not emoji on their own.

use serde::{Deserialize, Serialize};

use super::counter::Counter;
use super::filter::{Selection, apply_selection};
use crate::MessageRecord;

/// An emoji with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: char,
    pub count: usize,
}

/// Returns `true` if `c` on its own is a registered emoji, in fully or
/// minimally qualified form.
///
/// ```
/// use chatlens::core::emoji::is_emoji;
///
/// assert!(is_emoji('😂'));
/// assert!(is_emoji('❤'));
/// assert!(!is_emoji('a'));
/// assert!(!is_emoji('✓'));
/// assert!(!is_emoji('\u{200D}'));
/// ```
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}

/// Returns the emoji characters of `text`, in order.
pub fn extract_emojis(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| is_emoji(*c))
}

/// Tallies every emoji used by `selection`, most frequent first; ties keep
/// first-use order.
///
/// # Example
///
/// ```
/// use chatlens::core::{Selection, emoji_helper};
///
/// let records = chatlens::parse("1/1/23, 10:00 - Alice: 😂😂 ok 👍\n1/1/23, 10:01 - Bob: 👍👍👍\n");
/// let emojis = emoji_helper(&Selection::Overall, &records);
///
/// assert_eq!(emojis[0].emoji, '👍');
/// assert_eq!(emojis[0].count, 4);
/// assert_eq!(emojis[1].emoji, '😂');
/// ```
pub fn emoji_helper(selection: &Selection, records: &[MessageRecord]) -> Vec<EmojiCount> {
    apply_selection(records, selection)
        .into_iter()
        .flat_map(|r| extract_emojis(&r.text))
        .collect::<Counter<char>>()
        .most_common()
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}
