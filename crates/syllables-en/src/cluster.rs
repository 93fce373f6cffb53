// Syllable value of a vowel cluster

use crate::english::constants::SINGLE_SYLLABLE_CLUSTERS;

/// Number of syllables a single vowel cluster contributes.
///
/// Runs of three or more vowels usually hold two syllable nuclei ("quiet",
/// "beyond") and count 2, unless the run is one of the known single-syllable
/// clusters ("eau", "you", "ueue", ...). Shorter runs count 1.
///
/// `cluster` is expected in lowercase.
pub fn cluster_value(cluster: &str) -> u32 {
    if cluster.chars().count() >= 3 && !SINGLE_SYLLABLE_CLUSTERS.contains(&cluster) {
        return 2;
    }
    1
}
