// src/core/ranking.rs
use crate::models::WordFrequencyMap;
use std::cmp::Reverse;

/// Returns up to `n` words ordered by descending count.
///
/// The sort is stable over the map's alphabetical iteration, so words with
/// equal counts come out alphabetically.
#[must_use]
pub fn top_words(frequencies: &WordFrequencyMap, n: usize) -> Vec<String> {
    let mut entries: Vec<(&str, u64)> = frequencies.iter().collect();
    entries.sort_by_key(|&(_, count)| Reverse(count));

    entries
        .into_iter()
        .take(n)
        .map(|(word, _)| word.to_owned())
        .collect()
}
