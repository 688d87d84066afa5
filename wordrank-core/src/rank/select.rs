//! Ranking and top-N selection.

use smallvec::SmallVec;
use wordrank_types::WordCount;

/// Ranked words, most frequent first. The default top 3 stay inline.
pub type Ranking = SmallVec<[WordCount; 3]>;

/// Below this many entries a full sort beats select-then-sort.
pub const SELECT_THRESHOLD: usize = 32;

/// Returns the first `top_n` entries of the ranking.
///
/// Large tables are partitioned with `select_nth_unstable` and only the
/// winning prefix is sorted. `WordCount`'s order is total, so this returns
/// exactly what a full sort followed by truncation would.
pub fn top_n(mut entries: Vec<WordCount>, top_n: usize) -> Ranking {
    if top_n == 0 || entries.is_empty() {
        return Ranking::new();
    }

    if entries.len() > top_n && entries.len() >= SELECT_THRESHOLD {
        entries.select_nth_unstable(top_n - 1);
        entries.truncate(top_n);
    }

    entries.sort_unstable();
    entries.truncate(top_n);
    entries.into_iter().collect()
}

/// Sorts every entry into ranking order.
pub fn full_ranking(mut entries: Vec<WordCount>) -> Vec<WordCount> {
    entries.sort_unstable();
    entries
}
