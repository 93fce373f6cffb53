// Vowel-cluster segmentation

use crate::character::is_cluster_separator;

/// Split `text` into its vowel clusters, left to right.
///
/// A cluster is a maximal run of vowel-set characters. Every other character
/// acts as a separator and empty runs are dropped, so `"queue"` yields
/// `["ueue"]` and `"strength"` yields `["e"]`.
pub fn vowel_clusters(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_cluster_separator).filter(|run| !run.is_empty())
}
