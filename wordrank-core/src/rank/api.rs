//! Public API for analyzing text.

use crate::rank::frequency::FrequencyTable;
use crate::rank::select::{top_n, Ranking};
use crate::rank::types::{Analysis, Analyzer};

use tracing::{debug, trace};
use wordrank_types::{AnalyzeError, Count};

impl Analyzer {
    /// Counts every qualifying word in `text`.
    pub fn frequencies(&self, text: &str) -> FrequencyTable {
        let normalized = self.normalizer.normalize(text);
        trace!(
            input_bytes = text.len(),
            normalized_bytes = normalized.len(),
            "normalized input"
        );

        let mut table = FrequencyTable::new();
        self.tokenizer.tokenize(&normalized, |token| table.record(token));
        table
    }

    /// Analyzes `text` and returns the ranking with totals.
    pub fn analyze(&self, text: &str) -> Analysis {
        let table = self.frequencies(text);
        let total_tokens = table.total();
        let distinct_tokens = table.len();
        let ranking = top_n(table.into_entries(), self.config.top_n);

        debug!(
            total_tokens,
            distinct_tokens,
            ranked = ranking.len(),
            "analysis complete"
        );

        Analysis {
            ranking,
            total_tokens,
            distinct_tokens,
        }
    }

    /// Returns the top words of `text`, most frequent first.
    #[inline]
    pub fn rank(&self, text: &str) -> Ranking {
        self.analyze(text).ranking
    }

    /// Like [`Analyzer::rank`], for raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzeError::InputEncoding` if `bytes` is not valid UTF-8.
    pub fn rank_bytes(&self, bytes: &[u8]) -> Result<Ranking, AnalyzeError> {
        Ok(self.analyze_bytes(bytes)?.ranking)
    }

    /// Like [`Analyzer::analyze`], for raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzeError::InputEncoding` if `bytes` is not valid UTF-8.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<Analysis, AnalyzeError> {
        let text = core::str::from_utf8(bytes).map_err(|err| {
            debug!(valid_up_to = err.valid_up_to(), "rejected non-UTF-8 input");
            AnalyzeError::from(err)
        })?;
        Ok(self.analyze(text))
    }
}

/// Returns the 3 most frequent words of length ≥ 4 in `text`.
///
/// Matching is case-insensitive. Higher counts come first; equal counts are
/// ordered alphabetically.
///
/// # Example
///
/// ```
/// use wordrank_core::analyze;
///
/// let top = analyze("Coding is fun. Coding is powerful. Python coding is simple and powerful.");
/// assert_eq!(
///     top,
///     [
///         ("coding".to_string(), 3),
///         ("powerful".to_string(), 2),
///         ("python".to_string(), 1),
///     ]
/// );
/// ```
pub fn analyze(text: &str) -> Vec<(String, Count)> {
    Analyzer::new().analyze(text).into_pairs()
}

/// Like [`analyze`], for raw bytes.
///
/// # Errors
///
/// Returns `AnalyzeError::InputEncoding` if `bytes` is not valid UTF-8.
pub fn analyze_bytes(bytes: &[u8]) -> Result<Vec<(String, Count)>, AnalyzeError> {
    Ok(Analyzer::new().analyze_bytes(bytes)?.into_pairs())
}
