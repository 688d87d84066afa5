//! Display for Analysis.

use crate::rank::types::Analysis;

impl core::fmt::Display for Analysis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens, {} distinct, top {}: [",
            self.total_tokens,
            self.distinct_tokens,
            self.ranking.len()
        )?;

        for (i, entry) in self.ranking.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }

        f.write_str("]")
    }
}
