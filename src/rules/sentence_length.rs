//! Sentence length rule

use super::engine::GrammarRule;
use super::results::RuleMatch;
use crate::sentence::TaggedSentence;

/// Identifier shared by the rule and its matches
pub const SENTENCE_LENGTH_ID: &str = "SENTENCE_LENGTH";

/// Default number of words a sentence may have
pub const DEFAULT_MAX_LENGTH: usize = 30;

/// Flags a sentence with more taggable words than the configured limit.
///
/// The match is put on the first word above the limit. A limit of 0
/// disables the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceLengthRule {
    max_length: usize,
}

impl SentenceLengthRule {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Set the limit; 0 means no limit
    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
    }
}

impl Default for SentenceLengthRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl GrammarRule for SentenceLengthRule {
    fn id(&self) -> &str {
        SENTENCE_LENGTH_ID
    }

    fn message(&self) -> &str {
        "This sentence is too long."
    }

    fn false_positives(&self) -> f64 {
        0.0
    }

    fn language(&self) -> Option<&str> {
        None
    }

    fn matches(&self, sentence: &TaggedSentence, position_fix: usize) -> Vec<RuleMatch> {
        if self.max_length == 0 {
            return Vec::new();
        }

        let mut text_length = 0;
        let mut count = 0;
        let mut first_over: Option<(usize, usize)> = None;

        for word in sentence {
            text_length += word.char_len();
            if !word.is_taggable() {
                continue;
            }
            count += 1;
            if count > self.max_length && first_over.is_none() {
                first_over = Some((text_length - word.char_len(), text_length));
            }
        }

        let Some((from, to)) = first_over else {
            return Vec::new();
        };

        vec![RuleMatch::new(
            SENTENCE_LENGTH_ID,
            from + position_fix,
            to + position_fix,
            self.max_length,
            self.max_length + 1,
            format!(
                "This sentence is {} words long, which exceeds the configured limit of {} words.",
                count, self.max_length
            ),
        )]
    }
}

/// Count the entries that carry both a normalized form and a tag
pub fn taggable_word_count(sentence: &TaggedSentence) -> usize {
    sentence
        .words()
        .iter()
        .filter(|w| w.is_taggable())
        .count()
}
