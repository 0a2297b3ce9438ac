// src/models/word_frequencies.rs

use std::collections::BTreeMap;

/// Occurrence count per cleaned word.
///
/// Iteration is alphabetical, which keeps the statistics file and the
/// tie order of the ranking reproducible between runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordFrequencyMap {
    counts: BTreeMap<String, u64>,
}

impl WordFrequencyMap {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Counts one more occurrence of `word`, starting unseen words at 1.
    #[inline]
    pub fn record(&mut self, word: String) {
        let count = self.counts.entry(word).or_insert(0);
        *count = count.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. how many kept tokens the text contained.
    #[inline]
    #[must_use]
    pub fn total_occurrences(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |total, count| total.saturating_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<S> for WordFrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut map = Self::new();
        for word in words {
            map.record(word.into());
        }
        map
    }
}
