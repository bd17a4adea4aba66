//! JSON output formatting

use crate::error::StyleLensError;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{ReportRenderer, RuleListRenderer};
use crate::rules::{CheckResults, GrammarRule, Rule, RuleMatch};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    version: &'static str,
    summary: ReportSummary<'a>,
    matches: &'a [RuleMatch],
}

#[derive(Serialize)]
struct ReportSummary<'a> {
    total: usize,
    by_rule: BTreeMap<&'a str, usize>,
}

#[derive(Serialize)]
struct RuleSummary<'a> {
    id: &'a str,
    kind: &'static str,
    language: Option<&'a str>,
    false_positives: f64,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    case_sensitive: Option<bool>,
}

impl<'a> From<&'a Rule> for RuleSummary<'a> {
    fn from(rule: &'a Rule) -> Self {
        let pattern = rule.as_pattern();
        Self {
            id: rule.id(),
            kind: match rule {
                Rule::Pattern(_) => "pattern",
                Rule::SentenceLength(_) => "sentence_length",
            },
            language: rule.language(),
            false_positives: rule.false_positives(),
            message: rule.message(),
            pattern: pattern.map(|p| p.pattern()),
            marker: pattern.map(|p| p.marker()),
            case_sensitive: pattern.map(|p| p.is_case_sensitive()),
        }
    }
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, results: &CheckResults) -> Result<String, StyleLensError> {
        let output = ReportOutput {
            version: env!("CARGO_PKG_VERSION"),
            summary: ReportSummary {
                total: results.len(),
                by_rule: results.count_by_rule(),
            },
            matches: results.matches(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

impl RuleListRenderer for JsonOutput {
    fn render_rules(&self, rules: &[&Rule]) -> Result<String, StyleLensError> {
        let summaries: Vec<RuleSummary> = rules.iter().map(|r| RuleSummary::from(*r)).collect();
        Ok(serde_json::to_string_pretty(&summaries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{PatternRule, SentenceLengthRule};

    fn create_test_results() -> CheckResults {
        let mut results = CheckResults::new();
        results.add_match(RuleMatch::new("THE_THE", 4, 7, 2, 3, "Double article."));
        results.add_match(RuleMatch::new("THE_THE", 20, 23, 9, 10, "Double article."));
        results.add_match(RuleMatch::new("A_AN", 30, 31, 12, 12, "Use 'an'."));
        results
    }

    #[test]
    fn test_render_report() {
        let rendered = JsonOutput::new()
            .render_report(&create_test_results())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["summary"]["total"], 3);
        assert_eq!(json["summary"]["by_rule"]["THE_THE"], 2);
        assert_eq!(json["summary"]["by_rule"]["A_AN"], 1);
        assert_eq!(json["matches"][0]["rule_id"], "THE_THE");
        assert_eq!(json["matches"][0]["from_offset"], 4);
        assert_eq!(json["matches"][2]["word_index_to"], 12);
    }

    #[test]
    fn test_render_empty_report() {
        let rendered = JsonOutput.render_report(&CheckResults::new()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["summary"]["total"], 0);
        assert!(json["matches"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_rules() {
        let pattern: Rule = PatternRule::builder("THE_THE", "\"the\" \"the\"")
            .message("Double article.")
            .marker(1)
            .language("en")
            .false_positives(1.5)
            .build()
            .unwrap()
            .into();
        let length: Rule = SentenceLengthRule::default().into();

        let rendered = JsonOutput.render_rules(&[&length, &pattern]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json[0]["id"], "SENTENCE_LENGTH");
        assert_eq!(json[0]["kind"], "sentence_length");
        assert!(json[0]["language"].is_null());
        assert!(json[0].get("pattern").is_none());

        assert_eq!(json[1]["kind"], "pattern");
        assert_eq!(json[1]["pattern"], "\"the\" \"the\"");
        assert_eq!(json[1]["marker"], 1);
        assert_eq!(json[1]["language"], "en");
        assert_eq!(json[1]["false_positives"], 1.5);
    }
}
