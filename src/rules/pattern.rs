//! Pattern rules
//!
//! A pattern rule is a whitespace-separated sequence of [`Token`]s matched
//! token by token against a tagged sentence. Filler entries such as
//! whitespace are stepped over without consuming a token, and every entry
//! stepped over also moves the next start position forward. The marker
//! picks which matched token gets highlighted.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::engine::GrammarRule;
use super::results::RuleMatch;
use super::token::Token;
use crate::error::RuleError;
use crate::sentence::{Tag, TaggedSentence, TaggedWord};

/// A rule that can be written down as a token pattern
#[derive(Debug, Clone)]
pub struct PatternRule {
    id: String,
    tokens: Vec<Token>,
    matchers: Vec<Regex>,
    marker: usize,
    case_sensitive: bool,
    message: String,
    language: Option<String>,
    false_positives: f64,
    example_good: String,
    example_bad: String,
}

/// Builder for [`PatternRule`]; compiles the token expressions on `build`
#[derive(Debug, Clone, Default)]
pub struct PatternRuleBuilder {
    id: String,
    pattern: String,
    marker: usize,
    case_sensitive: bool,
    message: String,
    language: Option<String>,
    false_positives: f64,
    example_good: String,
    example_bad: String,
}

impl PatternRuleBuilder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Index of the matched token to highlight
    pub fn marker(mut self, marker: usize) -> Self {
        self.marker = marker;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Restrict the rule to one language code; empty means all languages
    pub fn language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.language = (!language.is_empty()).then_some(language);
        self
    }

    /// Estimated share of sentences wrongly flagged, in percent
    pub fn false_positives(mut self, false_positives: f64) -> Self {
        self.false_positives = false_positives;
        self
    }

    pub fn examples(mut self, good: impl Into<String>, bad: impl Into<String>) -> Self {
        self.example_good = good.into();
        self.example_bad = bad.into();
        self
    }

    pub fn build(self) -> Result<PatternRule, RuleError> {
        let tokens = self
            .pattern
            .split_whitespace()
            .map(Token::parse)
            .collect::<Result<Vec<_>, _>>()?;

        if tokens.is_empty() {
            return Err(RuleError::EmptyPattern { rule_id: self.id });
        }
        if self.marker > tokens.len() {
            return Err(RuleError::MarkerOutOfRange {
                rule_id: self.id,
                marker: self.marker,
                tokens: tokens.len(),
            });
        }

        let matchers = tokens
            .iter()
            .map(|token| compile(&self.id, token, self.case_sensitive))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            rule_id = %self.id,
            tokens = tokens.len(),
            marker = self.marker,
            case_sensitive = self.case_sensitive,
            "Built pattern rule"
        );

        Ok(PatternRule {
            id: self.id,
            tokens,
            matchers,
            marker: self.marker,
            case_sensitive: self.case_sensitive,
            message: self.message,
            language: self.language,
            false_positives: self.false_positives,
            example_good: self.example_good,
            example_bad: self.example_bad,
        })
    }
}

/// Compile a token into an expression anchored at the head, with the end
/// anchor appended to the expression as written.
///
/// A bare alternation such as `VB|TST` only ties its last branch to the end,
/// so `VB|TST` accepts `VBX`.
fn compile(rule_id: &str, token: &Token, case_sensitive: bool) -> Result<Regex, RuleError> {
    RegexBuilder::new(&format!("^(?:{}$)", token.pattern()))
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| RuleError::InvalidRegex {
            rule_id: rule_id.to_string(),
            token: token.to_string(),
            message: e.to_string(),
        })
}

/// Result of one matching attempt
struct Attempt {
    /// Index of the entry consumed by each token, when all of them matched
    consumed: Option<Vec<usize>>,
    /// Filler entries stepped over, whether or not the attempt succeeded
    skipped: usize,
}

/// The string a token is compared against, if the entry has one.
///
/// Sentinels compare by name whatever the token kind.
fn comparison_target<'a>(word: &'a TaggedWord, token: &Token) -> Option<&'a str> {
    match word.tag() {
        Some(tag) if tag.is_sentinel() => Some(tag.as_str()),
        _ if token.is_word() => word.normalized(),
        tag => tag.map(Tag::as_str),
    }
}

impl PatternRule {
    /// Start building a rule from an id and a token pattern string
    pub fn builder(id: impl Into<String>, pattern: impl Into<String>) -> PatternRuleBuilder {
        PatternRuleBuilder {
            id: id.into(),
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive rule with no language restriction
    pub fn new(
        id: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
        marker: usize,
    ) -> Result<Self, RuleError> {
        Self::builder(id, pattern).message(message).marker(marker).build()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn marker(&self) -> usize {
        self.marker
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn example_good(&self) -> &str {
        &self.example_good
    }

    pub fn example_bad(&self) -> &str {
        &self.example_bad
    }

    /// The token pattern in its written form
    pub fn pattern(&self) -> String {
        self.tokens
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Try to match every token starting at `start`.
    ///
    /// Filler is stepped over before, between and after the consumed
    /// entries until the next non-filler entry or the end of the sentence.
    fn attempt(&self, words: &[TaggedWord], start: usize) -> Attempt {
        let mut consumed = Vec::with_capacity(self.tokens.len());
        let mut skipped = 0;
        let mut i = start;

        while let Some(word) = words.get(i) {
            if word.is_filler() {
                i += 1;
                skipped += 1;
                continue;
            }

            let p = consumed.len();
            if p == self.tokens.len() {
                break;
            }

            let accepted = comparison_target(word, &self.tokens[p])
                .filter(|found| !found.is_empty())
                .is_some_and(|found| {
                    self.matchers[p].is_match(found) != self.tokens[p].is_negated()
                });
            if !accepted {
                return Attempt {
                    consumed: None,
                    skipped,
                };
            }

            consumed.push(i);
            i += 1;
        }

        let complete = consumed.len() == self.tokens.len();
        Attempt {
            consumed: complete.then_some(consumed),
            skipped,
        }
    }

    /// Build the match for a successful attempt, highlighting the marked token
    fn build_match(
        &self,
        words: &[TaggedWord],
        start: usize,
        consumed: &[usize],
        position_fix: usize,
    ) -> RuleMatch {
        // `consumed` holds one index per token and tokens are never empty
        let last = consumed[consumed.len() - 1];
        let highlighted = consumed.get(self.marker).copied();
        let target = highlighted.unwrap_or(last);

        let before: usize = words[..target].iter().map(TaggedWord::char_len).sum();
        let end = before + words[target].char_len();
        let (from, to) = match highlighted {
            Some(_) => (before, end),
            None => (end, end),
        };

        RuleMatch::new(
            self.id.clone(),
            from + position_fix,
            to + position_fix,
            start + 1,
            target + 1,
            self.message.clone(),
        )
    }
}

impl GrammarRule for PatternRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn false_positives(&self) -> f64 {
        self.false_positives
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn matches(&self, sentence: &TaggedSentence, position_fix: usize) -> Vec<RuleMatch> {
        let words = sentence.words();
        let mut matches = Vec::new();
        let mut start = 0;

        while start < words.len() {
            let attempt = self.attempt(words, start);
            if let Some(consumed) = attempt.consumed {
                matches.push(self.build_match(words, start, &consumed, position_fix));
            }
            // filler stepped over by the attempt moves the start cursor with it
            start += attempt.skipped + 1;
        }

        matches
    }
}
