// src/core/tokenizer.rs
use crate::models::WordFrequencyMap;

/// Cleaned words shorter than this are dropped.
pub const MIN_WORD_LEN: usize = 3;

/// Strips every character that is not an ASCII letter and lowercases the rest.
///
/// Returns `None` when fewer than [`MIN_WORD_LEN`] letters remain, which drops
/// punctuation-only tokens as well as short words such as "a" or "to".
#[must_use]
pub fn clean_token(token: &str) -> Option<String> {
    let cleaned: String = token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    (cleaned.len() >= MIN_WORD_LEN).then_some(cleaned)
}

/// Space, tab, line feed, vertical tab, form feed and carriage return.
///
/// Other Unicode spaces such as U+00A0 stay inside a token and are removed
/// by [`clean_token`], so `"hello\u{a0}world"` counts as one word.
#[must_use]
pub const fn is_token_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{b}' | '\u{c}' | '\r')
}

/// Splits `text` on runs of [`is_token_separator`] characters.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_token_separator).filter(|token| !token.is_empty())
}

/// Counts every cleaned word of `text`. Never fails; empty text yields an empty map.
#[must_use]
pub fn analyze_text(text: &str) -> WordFrequencyMap {
    tokens(text).filter_map(clean_token).collect()
}
