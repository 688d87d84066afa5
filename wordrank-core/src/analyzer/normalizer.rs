//! Lowercasing normalizer.
//!
//! First stage of the pipeline. Folds the input to lowercase so that
//! `"Coding"`, `"CODING"` and `"coding"` all become the same token later on.
//! Nothing else is touched: punctuation and whitespace survive unchanged
//! because the tokenizer needs them as word boundaries.

const LOWERCASE_TABLE: [u8; 256] = build_lowercase_table();

const fn build_lowercase_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).to_ascii_lowercase();
        i += 1;
    }
    table
}

/// Unicode-aware lowercasing normalizer.
///
/// Uses simple per-character case mapping (`char::to_lowercase`), so the
/// context-sensitive final sigma rule of `str::to_lowercase` does not apply:
/// `'Σ'` always becomes `'σ'`. A character may expand into several
/// (`'İ'` becomes `"i\u{307}"`).
///
/// ASCII runs are lowered through a lookup table without decoding chars.
///
/// # Examples
///
/// ```
/// use wordrank_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("Coding is FUN."), "coding is fun.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Lowercases `input` into an existing buffer.
    ///
    /// Clears the buffer first and reuses its capacity, growing only when the
    /// lowered text is longer than what it already holds.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut rest = input;
        while !rest.is_empty() {
            let ascii_len = rest
                .bytes()
                .position(|b| !b.is_ascii())
                .unwrap_or(rest.len());
            let (ascii, tail) = rest.split_at(ascii_len);
            out.extend(ascii.bytes().map(|b| LOWERCASE_TABLE[b as usize] as char));

            let mut chars = tail.chars();
            if let Some(ch) = chars.next() {
                out.extend(ch.to_lowercase());
            }
            rest = chars.as_str();
        }
    }

    /// Lowercases `input` and returns a new `String`.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::new().normalize(input)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("123 ABC!"), "123 abc!");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(norm(&upper), lower);
    }

    #[test]
    fn table_matches_std_for_every_byte() {
        for b in 0u8..=255 {
            assert_eq!(LOWERCASE_TABLE[b as usize], b.to_ascii_lowercase());
        }
    }

    #[test]
    fn punctuation_and_whitespace_preserved() {
        assert_eq!(norm("Coding is fun.  Really!"), "coding is fun.  really!");
        assert_eq!(norm("foo-bar_BAZ\tQux\n"), "foo-bar_baz\tqux\n");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn unicode_basic_lowercase() {
        assert_eq!(norm("ПРИВЕТ"), "привет");
        assert_eq!(norm("ÜNITED"), "ünited");
        assert_eq!(norm("ΆΈΉ"), "άέή");
    }

    #[test]
    fn mixed_ascii_and_unicode() {
        assert_eq!(norm("Hello São WORLD"), "hello são world");
        assert_eq!(norm("ABCDEFGHIJKLMNOP CAFÉ"), "abcdefghijklmnop café");
    }

    #[test]
    fn sigma_is_mapped_per_char() {
        // No final-sigma special case.
        assert_eq!(norm("ΟΔΟΣ"), "οδοσ");
    }

    #[test]
    fn expanding_lowercase() {
        assert_eq!(norm("İ"), "i\u{307}");
        assert_eq!(norm("İİİİ").chars().count(), 8);
    }

    #[test]
    fn caseless_scripts_unchanged() {
        assert_eq!(norm("你好世界"), "你好世界");
        assert_eq!(norm("مرحبا"), "مرحبا");
        assert_eq!(norm("Hello 🌍"), "hello 🌍");
    }

    #[test]
    fn control_chars_passthrough() {
        assert_eq!(norm("A\0B\x01C"), "a\0b\x01c");
    }

    #[test]
    fn idempotent() {
        let n = TextNormalizer::new();
        for s in ["Coding CODING coding", "ÜBER Café", "İstanbul"] {
            let once = n.normalize(s);
            assert_eq!(n.normalize(&once), once);
        }
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::new();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn buffer_grows_when_needed() {
        let normalizer = TextNormalizer::new();
        let mut buf = String::new();
        normalizer.normalize_into(&"A".repeat(1024), &mut buf);
        assert_eq!(buf.len(), 1024);
        assert!(buf.chars().all(|c| c == 'a'));
    }
}
