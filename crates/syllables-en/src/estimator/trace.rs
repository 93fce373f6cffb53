// Explanation record for a single estimate

use super::rule::{Rule, RuleObserver};

/// One vowel cluster and the syllables it contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub text: String,
    pub value: u32,
}

/// How a syllable count was reached.
///
/// Produced by [`SyllableEstimator::explain`](super::SyllableEstimator::explain).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Estimate {
    /// The normalized (lowercased, trimmed) word.
    pub word: String,
    /// Vowel clusters in left-to-right order.
    pub clusters: Vec<Cluster>,
    /// Rules in the order they fired. At most one of them is final.
    pub rules: Vec<Rule>,
    /// Total before the floor of 1 was applied. May be zero or negative.
    pub raw_total: i32,
    /// The estimated syllable count, always at least 1.
    pub syllables: u32,
}

impl Estimate {
    /// Sum of cluster values, before any correction rule.
    pub fn base_count(&self) -> u32 {
        self.clusters.iter().map(|c| c.value).sum()
    }

    /// Whether the floor of 1 raised the result.
    pub fn was_floored(&self) -> bool {
        self.raw_total < 1
    }

    /// The rule that ended evaluation, if any did.
    pub fn deciding_rule(&self) -> Option<Rule> {
        self.rules.iter().copied().find(|r| r.is_final())
    }
}

impl RuleObserver for Estimate {
    fn cluster(&mut self, cluster: &str, value: u32) {
        self.clusters.push(Cluster {
            text: cluster.to_string(),
            value,
        });
    }

    fn rule(&mut self, rule: Rule, _total: i32) {
        self.rules.push(rule);
    }
}
