//! English syllable estimation from spelling alone.
//!
//! No dictionary or phoneme data is consulted. A word is split into vowel
//! clusters, each cluster contributes one or two syllables, and a fixed,
//! ordered set of orthographic corrections (silent e, suffixes, vowel-cluster
//! exceptions) adjusts the total. The result is always at least 1.
//!
//! ```
//! use syllables_en::count_syllables;
//!
//! assert_eq!(count_syllables("hello"), 2);
//! assert_eq!(count_syllables("bundles"), 2);
//! assert_eq!(count_syllables(""), 1);
//! ```
//!
//! # Architecture
//!
//! - [`english`] -- Exception tables (suffix lists, single-syllable clusters)
//! - [`cluster`] -- Syllable value of one vowel cluster
//! - [`estimator`] -- The ordered rule engine, [`SyllableEstimator`] trait and
//!   the [`Estimate`] explanation record

pub mod cluster;
pub mod english;
pub mod estimator;

pub use estimator::{
    Cluster, EnglishEstimator, Estimate, Rule, RuleObserver, SyllableEstimator, count_syllables,
};
