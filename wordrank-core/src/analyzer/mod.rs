//! Text analysis pipeline.
//!
//! This module provides the stages that turn raw text into tokens:
//! - **Normalizer**: Lowercases raw text
//! - **Tokenizer**: Splits lowercased text into qualifying words

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use tokenizer::WordTokenizer;
