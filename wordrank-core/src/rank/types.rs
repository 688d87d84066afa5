//! Analyzer and analysis result types.

use crate::analyzer::normalizer::TextNormalizer;
use crate::analyzer::tokenizer::WordTokenizer;
use crate::rank::select::Ranking;

use wordrank_types::{AnalyzerConfig, Count};

/// Top-N word frequency analyzer.
///
/// Holds only configuration. Every call builds its own buffers, so one
/// analyzer can be shared and called any number of times; the same input
/// always gives the same output.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    pub(crate) config: AnalyzerConfig,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) tokenizer: WordTokenizer,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer with the default configuration (top 3, length ≥ 4).
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::new(),
            tokenizer: WordTokenizer::new(config.min_token_len, config.word_class),
        }
    }

    /// Returns the active configuration.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

/// Result of one analysis: the ranking plus totals about the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Top entries, most frequent first.
    pub ranking: Ranking,
    /// Number of qualifying token occurrences.
    pub total_tokens: Count,
    /// Number of distinct qualifying tokens.
    pub distinct_tokens: usize,
}

impl Analysis {
    /// Returns the ranking as plain `(word, count)` pairs.
    pub fn into_pairs(self) -> Vec<(String, Count)> {
        self.ranking.into_iter().map(Into::into).collect()
    }

    /// Returns `true` if no qualifying word was found.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}
