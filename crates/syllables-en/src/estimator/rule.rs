// Orthographic correction rules and the observer hook into rule evaluation

use std::fmt;

/// A correction rule that fired while estimating one word.
///
/// Every rule except [`Rule::EmbeddedSilentE`] ends evaluation; see
/// [`Rule::is_final`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Fewer than two characters after normalization: the count is 1.
    ShortWord,
    /// A suffix such as "eness" hides a silent `e` somewhere in the word.
    EmbeddedSilentE(&'static str),
    /// The word ends with an ending that adds a syllable.
    AdditiveSuffix(&'static str),
    /// The word ends with an ending that removes a syllable.
    SubtractiveSuffix(&'static str),
    /// Plural "-es" after a consonant: the `e` is silent.
    PluralSilentE,
    /// Consonant + "les": the `e` is silent but "le" is syllabic ("bundles").
    SyllabicLes,
    /// Final `e` after a consonant is silent.
    SingularSilentE,
    /// Consonant + "le": the `e` is silent but "le" is syllabic ("table").
    SyllabicLe,
    /// Past tense "-ed" after a consonant: the `e` is silent.
    PastTenseSilentE,
    /// Past tense ending in which the `e` is pronounced ("tickled").
    PronouncedEd(&'static str),
}

impl Rule {
    /// Change this rule makes to the running syllable total.
    ///
    /// [`Rule::ShortWord`] replaces the total with 1 instead and reports 0.
    pub fn delta(self) -> i32 {
        match self {
            Rule::AdditiveSuffix(_) => 1,
            Rule::EmbeddedSilentE(_)
            | Rule::SubtractiveSuffix(_)
            | Rule::PluralSilentE
            | Rule::SingularSilentE
            | Rule::PastTenseSilentE => -1,
            Rule::ShortWord | Rule::SyllabicLes | Rule::SyllabicLe | Rule::PronouncedEd(_) => 0,
        }
    }

    /// Whether evaluation stops once this rule has fired.
    pub fn is_final(self) -> bool {
        !matches!(self, Rule::EmbeddedSilentE(_))
    }

    /// Stable snake_case identifier, independent of the matched pattern.
    pub fn name(self) -> &'static str {
        match self {
            Rule::ShortWord => "short_word",
            Rule::EmbeddedSilentE(_) => "embedded_silent_e",
            Rule::AdditiveSuffix(_) => "additive_suffix",
            Rule::SubtractiveSuffix(_) => "subtractive_suffix",
            Rule::PluralSilentE => "plural_silent_e",
            Rule::SyllabicLes => "syllabic_les",
            Rule::SingularSilentE => "singular_silent_e",
            Rule::SyllabicLe => "syllabic_le",
            Rule::PastTenseSilentE => "past_tense_silent_e",
            Rule::PronouncedEd(_) => "pronounced_ed",
        }
    }

    /// The table entry that matched, for rules driven by a table.
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            Rule::EmbeddedSilentE(p)
            | Rule::AdditiveSuffix(p)
            | Rule::SubtractiveSuffix(p)
            | Rule::PronouncedEd(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ShortWord => write!(f, "short word"),
            Rule::EmbeddedSilentE(p) => write!(f, "silent e inside \"{p}\""),
            Rule::AdditiveSuffix(p) => write!(f, "ending \"{p}\" adds a syllable"),
            Rule::SubtractiveSuffix(p) => write!(f, "ending \"{p}\" drops a syllable"),
            Rule::PluralSilentE => write!(f, "silent e in plural \"-es\""),
            Rule::SyllabicLes => write!(f, "syllabic \"-les\" after a consonant"),
            Rule::SingularSilentE => write!(f, "silent final e"),
            Rule::SyllabicLe => write!(f, "syllabic \"-le\" after a consonant"),
            Rule::PastTenseSilentE => write!(f, "silent e in past tense \"-ed\""),
            Rule::PronouncedEd(p) => write!(f, "pronounced e in \"{p}\""),
        }
    }
}

// ---------------------------------------------------------------------------
// RuleObserver
// ---------------------------------------------------------------------------

/// Hook into rule evaluation.
///
/// The engine reports every vowel cluster with its value, then every rule
/// that fires together with the running total after that rule. Both methods
/// default to doing nothing; `()` is the observer used when only the count
/// is wanted.
pub trait RuleObserver {
    fn cluster(&mut self, _cluster: &str, _value: u32) {}

    fn rule(&mut self, _rule: Rule, _total: i32) {}
}

impl RuleObserver for () {}
