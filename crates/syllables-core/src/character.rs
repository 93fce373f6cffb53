// Character classification for syllable estimation

// ---------------------------------------------------------------------------
// Vowel set
// ---------------------------------------------------------------------------

/// Vowels used for clustering (lowercase): a e i o u y.
///
/// `y` always counts as a vowel here, whether or not it is pronounced as one.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Check whether a character belongs to the vowel set (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&simple_lower(c))
}

/// Check whether a character ends a vowel cluster.
///
/// Every character outside the vowel set separates clusters: consonants,
/// whitespace, digits, apostrophes, hyphens and letters of other scripts.
pub fn is_cluster_separator(c: char) -> bool {
    !is_vowel(c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase produces an iterator because some
// characters map to several characters. For classification we only need a
// one-to-one mapping and take the first character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}
