//! Frequency table.

use rustc_hash::FxHashMap;
use wordrank_types::{Count, WordCount};

/// Occurrence counts keyed by token.
///
/// Built in a single pass over the token stream. Iteration order is
/// unspecified; the table is only meaningful once ranked.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, Count>,
    total: Count,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `capacity` distinct tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            total: 0,
        }
    }

    /// Records one occurrence of `token`: inserts it at 1 or increments it.
    ///
    /// Only allocates the first time a token is seen.
    #[inline]
    pub fn record(&mut self, token: &str) {
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
        } else {
            self.counts.insert(token.to_owned(), 1);
        }
        self.total += 1;
    }

    /// Count for `token`, or 0 if it never occurred.
    #[inline]
    #[must_use]
    pub fn get(&self, token: &str) -> Count {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no token was recorded.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences recorded, across all tokens.
    #[inline(always)]
    #[must_use]
    pub fn total(&self) -> Count {
        self.total
    }

    /// Iterates `(token, count)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Consumes the table into unsorted entries.
    pub fn into_entries(self) -> Vec<WordCount> {
        self.counts
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.record(token);
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
