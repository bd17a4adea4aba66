//! Terminal output formatting with colors

use crate::error::StyleLensError;
use colored::Colorize;

use super::{ReportRenderer, RuleListRenderer};
use crate::rules::{CheckResults, GrammarRule, Rule, RuleMatch};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, title: &str) -> String {
        format!(
            "\n{} v{}\n\n{}\n{}\n\n",
            "stylelens".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "━".repeat(50).dimmed(),
            format!("  {title}").bold()
        )
    }

    fn format_match(&self, rule_match: &RuleMatch) -> String {
        format!(
            "  {} [{}] {}\n    {} chars {}-{}, words {}-{}\n",
            "•".dimmed(),
            rule_match.rule_id.cyan(),
            rule_match.message,
            "└─".dimmed(),
            rule_match.from_offset,
            rule_match.to_offset,
            rule_match.word_index_from,
            rule_match.word_index_to
        )
    }

    fn format_summary(&self, results: &CheckResults) -> String {
        let mut output = format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SUMMARY".bold()
        );

        if results.is_empty() {
            output.push_str(&format!("  {}\n", "No matches.".green()));
            return output;
        }

        output.push_str(&format!(
            "Matches: {}\n",
            results.len().to_string().yellow().bold()
        ));
        for (rule_id, count) in results.count_by_rule() {
            output.push_str(&format!("  {} {}\n", rule_id.cyan(), count));
        }

        output
    }

    fn format_rule(&self, rule: &Rule) -> String {
        let language = rule.language().unwrap_or("*");
        let mut output = format!(
            "  {} [{}] {} {}\n",
            "•".dimmed(),
            rule.id().cyan(),
            language.yellow(),
            format!("({}% false positives)", rule.false_positives()).dimmed()
        );

        match rule.as_pattern() {
            Some(pattern) => output.push_str(&format!(
                "    {} {} (marker {})\n",
                "└─".dimmed(),
                pattern.pattern(),
                pattern.marker()
            )),
            None => output.push_str(&format!("    {} {}\n", "└─".dimmed(), rule.message())),
        }

        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, results: &CheckResults) -> Result<String, StyleLensError> {
        let mut output = self.format_header("CHECK RESULTS");

        for rule_match in results.matches() {
            output.push_str(&self.format_match(rule_match));
        }
        output.push_str(&self.format_summary(results));

        Ok(output)
    }
}

impl RuleListRenderer for TerminalOutput {
    fn render_rules(&self, rules: &[&Rule]) -> Result<String, StyleLensError> {
        let mut output = self.format_header("RULES");

        for rule in rules {
            output.push_str(&self.format_rule(rule));
        }
        output.push_str(&format!("\n{} rule(s)\n", rules.len()));

        Ok(output)
    }
}
