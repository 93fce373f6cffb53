// English spelling tables used by the syllable estimator.
//
// Every table is an ordered slice scanned first-match. Order is part of the
// rule definition, so these are slices rather than sets.

/// Endings that add one syllable and end evaluation.
///
/// `ying`/`oing`: the `i` starts a new syllable after a vowel ("flying", "going").
/// `n't`/`'ve`: contractions hide a syllable behind the apostrophe.
/// `ier`: comparative of a `-y` adjective ("happier").
pub const ADDITIVE_SUFFIXES: &[&str] = &["ying", "oing", "n't", "'ve", "ier"];

/// Endings that remove one syllable and end evaluation.
pub const SUBTRACTIVE_SUFFIXES: &[&str] = &["ement", "ewise", "ely", "e's", "gue"];

/// Vowel clusters of three or more letters that still form a single syllable.
pub const SINGLE_SYLLABLE_CLUSTERS: &[&str] = &["eau", "eye", "oye", "you", "yea", "uai", "ueue"];

/// Suffixes that hide a silent `e`, even when more suffixes follow
/// ("hopelessly", "carefulness").
pub const EMBEDDED_SILENT_E: &[&str] = &["eness", "eful", "eless"];

/// Past-tense endings whose `e` is pronounced ("tickled", "gargled", "troubled").
pub const PRONOUNCED_ED: &[&str] = &["kled", "gled", "bled"];
