//! Shared building blocks for orthographic syllable estimation.
//!
//! - [`character`] -- Vowel set and character classification
//! - [`word`] -- Word normalization and end-of-word lookahead
//! - [`cluster`] -- Vowel-cluster segmentation

pub mod character;
pub mod cluster;
pub mod word;

pub use cluster::vowel_clusters;
pub use word::NormalizedWord;
