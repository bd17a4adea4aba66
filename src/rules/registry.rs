//! Rule selection
//!
//! A [`RuleSet`] owns the rules of one checking pass: the sentence length
//! rule first, then the pattern rules in the order they were loaded.

use tracing::debug;

use super::engine::{GrammarRule, Rule};
use super::pattern::PatternRule;
use super::sentence_length::SentenceLengthRule;

/// Ordered collection of rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// An empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the rules for a checking pass.
    ///
    /// The sentence length rule is always present; `max_sentence_length`
    /// overrides its default limit. When `grammar_rules` is given, only
    /// pattern rules whose id is listed are kept.
    pub fn build(
        max_sentence_length: Option<usize>,
        grammar_rules: Option<&[String]>,
        pattern_rules: impl IntoIterator<Item = PatternRule>,
    ) -> Self {
        let mut length_rule = SentenceLengthRule::default();
        if let Some(max_length) = max_sentence_length {
            length_rule.set_max_length(max_length);
        }

        let mut set = Self::new();
        set.push(length_rule);

        for rule in pattern_rules {
            let selected = grammar_rules.map_or(true, |ids| ids.iter().any(|id| id == rule.id()));
            if selected {
                set.push(rule);
            } else {
                debug!(rule_id = rule.id(), "Rule not selected");
            }
        }

        set
    }

    pub fn push(&mut self, rule: impl Into<Rule>) {
        self.rules.push(rule.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look a rule up by id
    pub fn get(&self, rule_id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id() == rule_id)
    }

    /// Rules without a language restriction or restricted to `language`
    pub fn for_language(&self, language: &str) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.applies_to(language)).collect()
    }

    /// Drop every rule the predicate rejects
    pub fn retain(&mut self, mut keep: impl FnMut(&Rule) -> bool) {
        self.rules.retain(|r| keep(r));
    }

    /// The sentence length rule, if present
    pub fn sentence_length_rule_mut(&mut self) -> Option<&mut SentenceLengthRule> {
        self.rules.iter_mut().find_map(|r| match r {
            Rule::SentenceLength(rule) => Some(rule),
            Rule::Pattern(_) => None,
        })
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
