//! Property-based tests for the syllable estimator using proptest
//!
//! These cover the invariants that must hold for every input: the floor of 1,
//! short words, case and whitespace insensitivity, non-letter separators, and
//! the bounds the correction rules place on the cluster count.

use proptest::prelude::*;
use syllables_en::{EnglishEstimator, Rule, SyllableEstimator, count_syllables};

// Strategy for word-like ASCII strings, including apostrophes
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z']{0,14}"
}

// Strategy for lowercase words long enough to reach the rules
fn lowercase_word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,14}"
}

// Non-letter characters that split vowel clusters
fn separator_strategy() -> impl Strategy<Value = String> {
    "[0-9-]"
}

proptest! {
    #[test]
    fn result_is_at_least_one(word in any::<String>()) {
        prop_assert!(count_syllables(&word) >= 1);
    }

    #[test]
    fn single_characters_count_one(c in any::<char>()) {
        prop_assert_eq!(count_syllables(&c.to_string()), 1);
    }

    #[test]
    fn case_insensitive(word in word_strategy()) {
        let expected = count_syllables(&word);
        prop_assert_eq!(count_syllables(&word.to_uppercase()), expected);
        prop_assert_eq!(count_syllables(&word.to_lowercase()), expected);
    }

    #[test]
    fn surrounding_whitespace_is_ignored(word in word_strategy(), pad in "[ \t\n]{1,3}") {
        let expected = count_syllables(&word);
        prop_assert_eq!(count_syllables(&format!(" {word} ")), expected);
        prop_assert_eq!(count_syllables(&format!("{pad}{word}{pad}")), expected);
    }

    #[test]
    fn explain_agrees_with_estimate(word in any::<String>()) {
        let estimator = EnglishEstimator;
        prop_assert_eq!(estimator.explain(&word).syllables, estimator.estimate(&word));
    }

    #[test]
    fn at_most_one_final_rule(word in word_strategy()) {
        let estimate = EnglishEstimator.explain(&word);
        let finals = estimate.rules.iter().filter(|r| r.is_final()).count();
        prop_assert!(finals <= 1, "{:?}", estimate.rules);
    }

    #[test]
    fn corrections_stay_close_to_cluster_count(word in lowercase_word_strategy()) {
        // At most one embedded silent-e and one ending correction
        let estimate = EnglishEstimator.explain(&word);
        let base = estimate.base_count() as i32;
        prop_assert!(estimate.raw_total >= base - 2);
        prop_assert!(estimate.raw_total <= base + 1);
    }

    #[test]
    fn raw_total_is_base_plus_rule_deltas(word in lowercase_word_strategy()) {
        let estimate = EnglishEstimator.explain(&word);
        let deltas: i32 = estimate.rules.iter().map(|r| r.delta()).sum();
        prop_assert_eq!(estimate.raw_total, estimate.base_count() as i32 + deltas);
    }

    #[test]
    fn short_word_rule_only_for_short_words(word in word_strategy()) {
        let estimate = EnglishEstimator.explain(&word);
        let short = estimate.word.chars().count() < 2;
        prop_assert_eq!(estimate.rules.contains(&Rule::ShortWord), short);
    }

    #[test]
    fn non_letters_separate_like_consonants(
        head in "[a-z]{0,6}",
        tail in "[a-z]{5,8}",
        sep in separator_strategy(),
    ) {
        // The replaced character sits before the longest ending any rule inspects
        let with_consonant = format!("{head}x{tail}");
        let with_separator = format!("{head}{sep}{tail}");
        prop_assert_eq!(
            count_syllables(&with_separator),
            count_syllables(&with_consonant),
            "{} vs {}", with_separator, with_consonant
        );
    }
}
