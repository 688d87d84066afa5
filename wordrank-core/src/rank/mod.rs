//! Counting and ranking of words.
//!
//! The [`Analyzer`] runs the whole pipeline: lowercase, tokenize, count into a
//! [`FrequencyTable`], then rank with count descending and word ascending, and
//! keep the first `top_n`.
//!
//! Everything is built per call. Nothing is cached between calls, so results
//! never depend on what was analyzed before.

mod api;
mod frequency;
mod select;
mod stats;
mod types;

pub use api::{analyze, analyze_bytes};
pub use frequency::FrequencyTable;
pub use select::{full_ranking, top_n, Ranking};
pub use types::{Analysis, Analyzer};
