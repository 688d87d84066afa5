//! Top-N word frequency ranking.
//!
//! Finds the most frequent words in a block of text. Words are compared
//! case-insensitively, only words of at least four characters count, and ties
//! are broken alphabetically so the answer is always unique.
//!
//! ```
//! use wordrank_core::Analyzer;
//!
//! let analyzer = Analyzer::new();
//! let ranking = analyzer.rank("alpha beta gamma delta");
//!
//! let words: Vec<&str> = ranking.iter().map(|e| e.word.as_str()).collect();
//! assert_eq!(words, ["alpha", "beta", "delta"]);
//! ```

pub mod analyzer;
pub mod rank;

pub use rank::{analyze, analyze_bytes, Analysis, Analyzer, FrequencyTable, Ranking};
pub use wordrank_types::{AnalyzeError, AnalyzerConfig, Count, WordClass, WordCount};
