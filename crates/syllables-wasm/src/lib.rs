// WASM bindings for English syllable estimation.
//
// Exports free functions via wasm-bindgen. The explanation record is
// serialized to a plain JavaScript object using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   countSyllables("beautiful");   // => 3
//   explainSyllables("bundles");   // => { word: "bundles", syllables: 2,
//                                  //      rawTotal: 2, baseCount: 2,
//                                  //      clusters: [{ text: "u", value: 1 }, ...],
//                                  //      rules: [{ name: "syllabic_les", ... }] }
//   getVersion();                  // => "0.1.0"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use syllables_en::{EnglishEstimator, Estimate, Rule, SyllableEstimator};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a vowel cluster.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCluster {
    text: String,
    value: u32,
}

/// Serializable representation of a fired rule.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRule {
    name: &'static str,
    pattern: Option<&'static str>,
    delta: i32,
    description: String,
}

/// Serializable representation of an estimate with its explanation.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsEstimate {
    word: String,
    syllables: u32,
    raw_total: i32,
    base_count: u32,
    clusters: Vec<JsCluster>,
    rules: Vec<JsRule>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn rule_to_js(rule: Rule) -> JsRule {
    JsRule {
        name: rule.name(),
        pattern: rule.pattern(),
        delta: rule.delta(),
        description: rule.to_string(),
    }
}

fn estimate_to_js(estimate: Estimate) -> JsEstimate {
    let base_count = estimate.base_count();
    JsEstimate {
        word: estimate.word,
        syllables: estimate.syllables,
        raw_total: estimate.raw_total,
        base_count,
        clusters: estimate
            .clusters
            .into_iter()
            .map(|c| JsCluster {
                text: c.text,
                value: c.value,
            })
            .collect(),
        rules: estimate.rules.into_iter().map(rule_to_js).collect(),
    }
}

// ============================================================================
// Exported functions
// ============================================================================

/// Estimate the number of syllables in a word. Always at least 1.
#[wasm_bindgen(js_name = "countSyllables")]
pub fn count_syllables(word: &str) -> u32 {
    EnglishEstimator.estimate(word)
}

/// Estimate a word and return the clusters and rules behind the count.
#[wasm_bindgen(js_name = "explainSyllables")]
pub fn explain_syllables(word: &str) -> Result<JsValue, JsError> {
    let estimate = estimate_to_js(EnglishEstimator.explain(word));
    serde_wasm_bindgen::to_value(&estimate).map_err(|e| JsError::new(&e.to_string()))
}

/// Library version.
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_delegates_to_estimator() {
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables(""), 1);
    }

    #[test]
    fn estimate_conversion() {
        let js = estimate_to_js(EnglishEstimator.explain("Bundles"));
        assert_eq!(js.word, "bundles");
        assert_eq!(js.syllables, 2);
        assert_eq!(js.base_count, 2);
        assert_eq!(js.clusters.len(), 2);
        assert_eq!(js.clusters[0].text, "u");
        assert_eq!(js.rules.len(), 1);
        assert_eq!(js.rules[0].name, "syllabic_les");
        assert_eq!(js.rules[0].delta, 0);
    }

    #[test]
    fn rule_conversion_keeps_pattern() {
        let js = rule_to_js(Rule::SubtractiveSuffix("gue"));
        assert_eq!(js.name, "subtractive_suffix");
        assert_eq!(js.pattern, Some("gue"));
        assert_eq!(js.delta, -1);
        assert_eq!(js.description, "ending \"gue\" drops a syllable");
    }

    #[test]
    fn version_is_package_version() {
        assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
    }
}
