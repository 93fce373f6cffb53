// Syllable estimator -- vowel clusters plus ordered spelling corrections
//
// The estimator works by:
// 1. Normalizing the word (lowercase, trim) and short-circuiting short words
// 2. Summing the value of every vowel cluster
// 3. Removing a syllable for a silent e hidden inside "eness"/"eful"/"eless"
// 4. Applying the first matching end-of-word rule, which ends evaluation
// 5. Flooring the result at 1

mod rule;
mod trace;

pub use rule::{Rule, RuleObserver};
pub use trace::{Cluster, Estimate};

use syllables_core::{NormalizedWord, vowel_clusters};

use crate::cluster::cluster_value;
use crate::english::constants::{
    ADDITIVE_SUFFIXES, EMBEDDED_SILENT_E, PRONOUNCED_ED, SUBTRACTIVE_SUFFIXES,
};

// ---------------------------------------------------------------------------
// SyllableEstimator trait
// ---------------------------------------------------------------------------

/// Trait for syllable estimation backends.
///
/// Implementations never fail: every input, including the empty string,
/// produces a count of at least 1.
pub trait SyllableEstimator {
    /// Estimate the number of spoken syllables in `word`.
    fn estimate(&self, word: &str) -> u32;

    /// Estimate `word` and report how the count was reached.
    ///
    /// `explain(word).syllables` always equals `estimate(word)`.
    fn explain(&self, word: &str) -> Estimate;
}

// ---------------------------------------------------------------------------
// EnglishEstimator
// ---------------------------------------------------------------------------

/// Rule-based estimator for English spelling.
///
/// Holds no state; a single value can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishEstimator;

impl SyllableEstimator for EnglishEstimator {
    fn estimate(&self, word: &str) -> u32 {
        let word = NormalizedWord::new(word);
        floor(evaluate(&word, &mut ()))
    }

    fn explain(&self, word: &str) -> Estimate {
        let word = NormalizedWord::new(word);
        let mut estimate = Estimate::default();
        let raw_total = evaluate(&word, &mut estimate);
        estimate.word = word.as_str().to_string();
        estimate.raw_total = raw_total;
        estimate.syllables = floor(raw_total);
        estimate
    }
}

/// Estimate the number of syllables in `word` with [`EnglishEstimator`].
pub fn count_syllables(word: &str) -> u32 {
    EnglishEstimator.estimate(word)
}

// ---------------------------------------------------------------------------
// Rule evaluation
// ---------------------------------------------------------------------------

/// Run the rules over a normalized word and return the unfloored total.
///
/// Rule order is significant. The embedded silent-e correction is the only
/// one that lets evaluation continue; every later rule returns as soon as it
/// matches, in this order:
///   additive endings, subtractive endings, plural "-es", final "-e", "-ed".
fn evaluate<O: RuleObserver>(word: &NormalizedWord, observer: &mut O) -> i32 {
    if word.is_short() {
        observer.rule(Rule::ShortWord, 1);
        log::trace!("{:?}: {} -> 1", word.as_str(), Rule::ShortWord);
        return 1;
    }

    let second_is_vowel = word.is_vowel_from_end(2);
    let third_is_vowel = word.is_vowel_from_end(3);
    let fourth_is_vowel = word.is_vowel_from_end(4);

    let mut syllables: i32 = 0;
    for cluster in vowel_clusters(word.as_str()) {
        let value = cluster_value(cluster);
        observer.cluster(cluster, value);
        syllables += value as i32;
    }

    if let Some(&pattern) = EMBEDDED_SILENT_E.iter().find(|p| word.contains(p)) {
        let rule = Rule::EmbeddedSilentE(pattern);
        syllables += rule.delta();
        observer.rule(rule, syllables);
    }

    if let Some(&ending) = ADDITIVE_SUFFIXES.iter().find(|e| word.ends_with(e)) {
        return settle(word, observer, Rule::AdditiveSuffix(ending), syllables);
    }

    if let Some(&ending) = SUBTRACTIVE_SUFFIXES.iter().find(|e| word.ends_with(e)) {
        return settle(word, observer, Rule::SubtractiveSuffix(ending), syllables);
    }

    if word.ends_with("es") && !third_is_vowel {
        if word.ends_with("les") && !fourth_is_vowel {
            return settle(word, observer, Rule::SyllabicLes, syllables);
        }
        return settle(word, observer, Rule::PluralSilentE, syllables);
    }

    if word.ends_with("e") && !second_is_vowel {
        if word.ends_with("le") && !third_is_vowel {
            return settle(word, observer, Rule::SyllabicLe, syllables);
        }
        return settle(word, observer, Rule::SingularSilentE, syllables);
    }

    if word.ends_with("ed") && !third_is_vowel {
        if let Some(&ending) = PRONOUNCED_ED.iter().find(|e| word.ends_with(e)) {
            return settle(word, observer, Rule::PronouncedEd(ending), syllables);
        }
        return settle(word, observer, Rule::PastTenseSilentE, syllables);
    }

    syllables
}

/// Apply a final rule and report it.
fn settle<O: RuleObserver>(
    word: &NormalizedWord,
    observer: &mut O,
    rule: Rule,
    total: i32,
) -> i32 {
    let total = total + rule.delta();
    observer.rule(rule, total);
    log::trace!("{:?}: {rule} -> {total}", word.as_str());
    total
}

/// The reported count is never below 1.
fn floor(total: i32) -> u32 {
    total.max(1).unsigned_abs()
}
