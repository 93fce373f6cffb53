// Word normalization and end-of-word lookahead

use crate::character::is_vowel;

/// A word prepared for estimation: lowercased, surrounding whitespace removed.
///
/// Lengths and positions are measured in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWord {
    text: String,
    char_len: usize,
}

impl NormalizedWord {
    /// Lowercase and trim `raw`.
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        let char_len = text.chars().count();
        Self { text, char_len }
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters in the normalized text.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Words shorter than two characters are never analyzed.
    pub fn is_short(&self) -> bool {
        self.char_len < 2
    }

    /// The `n`th character counted from the end (1 = last character).
    /// Returns `None` for `n == 0` or when the word is shorter than `n`.
    pub fn nth_from_end(&self, n: usize) -> Option<char> {
        if n == 0 {
            return None;
        }
        self.text.chars().rev().nth(n - 1)
    }

    /// Whether the `n`th character from the end is a vowel.
    /// Positions outside the word are not vowels.
    pub fn is_vowel_from_end(&self, n: usize) -> bool {
        self.nth_from_end(n).is_some_and(is_vowel)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.text.contains(pattern)
    }
}
