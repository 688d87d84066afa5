//! Streaming word tokenizer.
//!
//! Second stage of the pipeline. Takes lowercased text and emits every
//! qualifying word as a slice of the input, in left-to-right order:
//!
//! ```ignore
//! "coding is fun. coding is powerful."
//!   -> "coding", "coding", "powerful"
//! ```
//!
//! A word is a *maximal* run of word characters (see [`WordClass`]). Runs
//! shorter than the minimum length are skipped whole; runs are never split or
//! merged with their neighbours.
//!
//! Length is measured in characters, not bytes: `"café"` is four long.

use wordrank_types::WordClass;

/// Splits text into maximal word runs of at least `min_len` characters.
///
/// Tokens are not copied; each one borrows from the input string.
///
/// ## Example
///
/// ```
/// use wordrank_core::analyzer::WordTokenizer;
/// use wordrank_types::WordClass;
///
/// let tokenizer = WordTokenizer::new(4, WordClass::Unicode);
/// let mut words = Vec::new();
///
/// tokenizer.tokenize("coding is fun. python_3 rocks!", |text| words.push(text));
///
/// assert_eq!(words, ["coding", "python_3", "rocks"]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WordTokenizer {
    min_len: usize,
    class: WordClass,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new(4, WordClass::Unicode)
    }
}

impl WordTokenizer {
    /// Creates a tokenizer. A `min_len` of 0 is treated as 1.
    #[inline]
    pub const fn new(min_len: usize, class: WordClass) -> Self {
        let min_len = if min_len == 0 { 1 } else { min_len };
        Self { min_len, class }
    }

    /// Minimum token length in characters.
    #[inline(always)]
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Word-character class used for splitting.
    #[inline(always)]
    #[must_use]
    pub const fn word_class(&self) -> WordClass {
        self.class
    }

    /// Tokenizes `normalized` and emits every qualifying token.
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str),
    {
        let mut run_start: Option<usize> = None;
        let mut run_chars = 0usize;

        for (i, c) in normalized.char_indices() {
            if self.class.contains(c) {
                if run_start.is_none() {
                    run_start = Some(i);
                    run_chars = 0;
                }
                run_chars += 1;
            } else if let Some(start) = run_start.take() {
                if run_chars >= self.min_len {
                    emit(&normalized[start..i]);
                }
            }
        }

        if let Some(start) = run_start {
            if run_chars >= self.min_len {
                emit(&normalized[start..]);
            }
        }
    }

    /// Counts qualifying tokens without collecting them.
    #[inline]
    pub fn count(&self, normalized: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(normalized, |_| n += 1);
        n
    }
}
