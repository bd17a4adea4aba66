//! Rules module - Grammar rules and the matching engine

pub mod engine;
pub mod pattern;
pub mod registry;
pub mod results;
pub mod sentence_length;
pub mod token;

pub use engine::{Checker, GrammarRule, Rule};
pub use pattern::{PatternRule, PatternRuleBuilder};
pub use registry::RuleSet;
pub use results::{CheckResults, RuleMatch};
pub use sentence_length::SentenceLengthRule;
pub use token::{Token, TokenKind};
