//! Pattern tokens
//!
//! A token is one element of a pattern rule. It is written as:
//!
//! - `"word"` - compare against the normalized word, as a regular expression
//! - `(VB|VBP)` - compare against the part-of-speech tag
//! - a leading `^` negates either form: `^"has"`, `^(NN|NNS)`

use crate::error::RuleError;
use std::fmt;
use tracing::warn;

/// What a token is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The entry's normalized form
    Word,
    /// The entry's part-of-speech tag
    Tag,
}

/// A word or tag token, negated or not
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pattern: String,
    negated: bool,
    kind: TokenKind,
}

impl Token {
    /// Parse a token from its pattern-string form.
    ///
    /// Returns [`RuleError::EmptyTokenPattern`] when nothing is left once the
    /// negation and quotes are stripped.
    pub fn parse(raw: &str) -> Result<Self, RuleError> {
        let (negated, rest) = match raw.strip_prefix('^') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (kind, pattern) = match rest.strip_prefix('"') {
            Some(quoted) => match quoted.strip_suffix('"') {
                Some(inner) => (TokenKind::Word, inner),
                None => {
                    warn!(token = raw, "Token starts with a quote but does not end with one");
                    (TokenKind::Word, quoted)
                }
            },
            None => (TokenKind::Tag, rest),
        };

        if pattern.is_empty() {
            return Err(RuleError::EmptyTokenPattern {
                token: raw.to_string(),
            });
        }

        Ok(Self {
            pattern: pattern.to_string(),
            negated,
            kind,
        })
    }

    /// The bare expression, without negation marker or quotes
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_tag(&self) -> bool {
        self.kind == TokenKind::Tag
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("^")?;
        }
        match self.kind {
            TokenKind::Word => write!(f, "\"{}\"", self.pattern),
            TokenKind::Tag => f.write_str(&self.pattern),
        }
    }
}

impl std::str::FromStr for Token {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
