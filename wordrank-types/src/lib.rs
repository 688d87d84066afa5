//! Core types shared across the wordrank crates.
//!
//! This crate holds the value types that cross crate boundaries:
//!
//! - **Ranking entries**: [`WordCount`] and its count-descending order
//! - **Configuration**: [`AnalyzerConfig`] and [`WordClass`]
//! - **Errors**: [`AnalyzeError`] for input that cannot be read as text

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;

use serde::Serialize;
use thiserror::Error;

/// Occurrence count of a single word.
pub type Count = u64;

/// A word and the number of times it occurred in the analyzed text.
///
/// The `Ord` impl is the ranking order: a *higher* count sorts *first*, and
/// equal counts fall back to the word in ascending code-point order. Sorting a
/// slice of `WordCount` ascending therefore yields the ranking directly.
///
/// No two distinct entries of one frequency table compare equal (their words
/// differ), so the order is total and the ranking is unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordCount {
    /// The lowercased word.
    pub word: String,
    /// How many times the word occurred.
    pub count: Count,
}

impl WordCount {
    /// Creates a new entry.
    #[inline]
    pub fn new(word: impl Into<String>, count: Count) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    /// Converts into the plain `(word, count)` pair.
    #[inline]
    pub fn into_pair(self) -> (String, Count) {
        (self.word, self.count)
    }
}

impl PartialOrd for WordCount {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordCount {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        // Primary: count, reversed so the most frequent word sorts first.
        // Secondary: word, ascending. `str` compares bytewise, which for UTF-8
        // is the same as comparing code points.
        match other.count.cmp(&self.count) {
            Ordering::Equal => self.word.cmp(&other.word),
            ord => ord,
        }
    }
}

impl From<WordCount> for (String, Count) {
    #[inline]
    fn from(wc: WordCount) -> Self {
        wc.into_pair()
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.word, self.count)
    }
}

/// Which characters count as word characters when splitting text into tokens.
///
/// A token is a maximal run of word characters; everything else is a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WordClass {
    /// Any alphanumeric `char` (Unicode letters and numbers) plus `_`.
    #[default]
    Unicode = 0,
    /// Only `[A-Za-z0-9_]`. Every non-ASCII character is a boundary.
    Ascii = 1,
}

impl WordClass {
    /// Returns `true` if `c` belongs to this word class.
    #[must_use]
    #[inline(always)]
    pub fn contains(self, c: char) -> bool {
        match self {
            WordClass::Unicode => c == '_' || c.is_alphanumeric(),
            WordClass::Ascii => c == '_' || c.is_ascii_alphanumeric(),
        }
    }
}

/// Analysis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Maximum number of ranked words to return.
    /// Default: 3
    pub top_n: usize,
    /// Minimum token length in characters. Shorter runs are dropped.
    /// Default: 4. A value of 0 behaves like 1.
    pub min_token_len: usize,
    /// Definition of a word character.
    pub word_class: WordClass,
}

impl AnalyzerConfig {
    /// Number of ranked words returned by default.
    pub const DEFAULT_TOP_N: usize = 3;

    /// Minimum token length used by default.
    pub const DEFAULT_MIN_TOKEN_LEN: usize = 4;

    /// The default configuration with ASCII-only word characters.
    pub const fn ascii() -> Self {
        Self {
            top_n: Self::DEFAULT_TOP_N,
            min_token_len: Self::DEFAULT_MIN_TOKEN_LEN,
            word_class: WordClass::Ascii,
        }
    }

    /// Returns a copy with `top_n` replaced.
    #[must_use]
    pub const fn with_top_n(self, top_n: usize) -> Self {
        Self { top_n, ..self }
    }

    /// Returns a copy with `min_token_len` replaced.
    #[must_use]
    pub const fn with_min_token_len(self, min_token_len: usize) -> Self {
        Self {
            min_token_len,
            ..self
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: Self::DEFAULT_TOP_N,
            min_token_len: Self::DEFAULT_MIN_TOKEN_LEN,
            word_class: WordClass::Unicode,
        }
    }
}

/// Errors that can occur when analyzing raw input.
///
/// Analysis of `&str` never fails. Only byte input, which may not be valid
/// UTF-8, can produce an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InputEncoding {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

impl AnalyzeError {
    /// Stable machine-readable reason.
    pub fn reason_code(&self) -> &'static str {
        match self {
            AnalyzeError::InputEncoding { .. } => "input_encoding",
        }
    }
}

impl From<core::str::Utf8Error> for AnalyzeError {
    fn from(err: core::str::Utf8Error) -> Self {
        AnalyzeError::InputEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}
