//! Rules evaluation engine

use rayon::prelude::*;
use tracing::{debug, info, span, Level};

use super::pattern::PatternRule;
use super::registry::RuleSet;
use super::results::{CheckResults, RuleMatch};
use super::sentence_length::{taggable_word_count, SentenceLengthRule};
use crate::sentence::TaggedSentence;

/// Capability shared by every rule kind
pub trait GrammarRule: Send + Sync {
    /// Rule identifier, copied into every match
    fn id(&self) -> &str;

    /// Message template
    fn message(&self) -> &str;

    /// Estimated share of sentences wrongly flagged, in percent
    fn false_positives(&self) -> f64;

    /// Language code the rule is restricted to; `None` applies everywhere
    fn language(&self) -> Option<&str>;

    /// Match one tagged sentence.
    ///
    /// `position_fix` is added to every character offset so that matches
    /// land at their place in the whole document.
    fn matches(&self, sentence: &TaggedSentence, position_fix: usize) -> Vec<RuleMatch>;

    /// Whether the rule applies to text in `language`
    fn applies_to(&self, language: &str) -> bool {
        self.language().map_or(true, |l| l == language)
    }
}

/// The closed set of rule kinds
#[derive(Debug, Clone)]
pub enum Rule {
    Pattern(PatternRule),
    SentenceLength(SentenceLengthRule),
}

impl Rule {
    fn inner(&self) -> &dyn GrammarRule {
        match self {
            Rule::Pattern(rule) => rule,
            Rule::SentenceLength(rule) => rule,
        }
    }

    pub fn as_pattern(&self) -> Option<&PatternRule> {
        match self {
            Rule::Pattern(rule) => Some(rule),
            Rule::SentenceLength(_) => None,
        }
    }
}

impl GrammarRule for Rule {
    fn id(&self) -> &str {
        self.inner().id()
    }

    fn message(&self) -> &str {
        self.inner().message()
    }

    fn false_positives(&self) -> f64 {
        self.inner().false_positives()
    }

    fn language(&self) -> Option<&str> {
        self.inner().language()
    }

    fn matches(&self, sentence: &TaggedSentence, position_fix: usize) -> Vec<RuleMatch> {
        self.inner().matches(sentence, position_fix)
    }
}

impl From<PatternRule> for Rule {
    fn from(rule: PatternRule) -> Self {
        Rule::Pattern(rule)
    }
}

impl From<SentenceLengthRule> for Rule {
    fn from(rule: SentenceLengthRule) -> Self {
        Rule::SentenceLength(rule)
    }
}

/// Runs a rule set against tagged sentences and pools the matches
pub struct Checker {
    rules: RuleSet,
    language: Option<String>,
}

impl Checker {
    /// Create a checker that runs every rule in the set
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            language: None,
        }
    }

    /// Only run rules that apply to `language`
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rules that will run, in rule-set order
    pub fn active_rules(&self) -> Vec<&Rule> {
        match &self.language {
            Some(language) => self.rules.for_language(language),
            None => self.rules.iter().collect(),
        }
    }

    /// Check one sentence. Matches are sorted by span start; ties keep
    /// rule order.
    pub fn check_sentence(&self, sentence: &TaggedSentence, position_fix: usize) -> Vec<RuleMatch> {
        let span = span!(Level::DEBUG, "sentence", position_fix, words = sentence.len());
        let _guard = span.enter();

        let rules = self.active_rules();
        let per_rule: Vec<Vec<RuleMatch>> = rules
            .par_iter()
            .map(|rule| rule.matches(sentence, position_fix))
            .collect();

        let mut matches = Vec::new();
        for (rule, found) in rules.iter().zip(per_rule) {
            if !found.is_empty() {
                debug!(rule_id = rule.id(), matches = found.len(), "Rule matched");
            }
            matches.extend(found);
        }

        matches.sort_by_key(|m| m.from_offset);
        matches
    }

    /// Check consecutive sentences of one document.
    ///
    /// Each sentence is offset by the character length of all sentences
    /// before it.
    pub fn check_text<'a>(
        &self,
        sentences: impl IntoIterator<Item = &'a TaggedSentence>,
    ) -> CheckResults {
        let mut results = CheckResults::new();
        let mut position_fix = 0;
        let mut sentence_count = 0;
        let mut word_count = 0;

        for sentence in sentences {
            results.add_matches(self.check_sentence(sentence, position_fix));
            position_fix += sentence.char_len();
            sentence_count += 1;
            word_count += taggable_word_count(sentence);
        }
        results.sort();

        info!(
            sentences = sentence_count,
            words = word_count,
            rules = self.active_rules().len(),
            matches = results.len(),
            "Check complete"
        );

        results
    }
}
