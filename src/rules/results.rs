//! # Match Results
//!
//! This module defines the data structures for representing rule matches
//! and the results of checking a text.
//!
//! ## Overview
//!
//! - [`RuleMatch`] - A single match with its character and word-index spans
//! - [`CheckResults`] - Collection of matches from a checking run
//!
//! ## Examples
//!
//! ```rust
//! use stylelens::rules::RuleMatch;
//!
//! let m = RuleMatch::new("THE_THE", 4, 7, 2, 3, "Double article.");
//! assert_eq!(m.to_xml(), r#"<error from="4" to="7">Double article.</error>"#);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A match of one rule against one sentence.
///
/// Offsets are character positions in the checked document; word indexes
/// are 1-based positions in the tagged sentence.
///
/// Matches are ordered by `from_offset` alone, so two matches that compare
/// as `Ordering::Equal` need not be equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Identifier of the rule that produced this match
    pub rule_id: String,

    /// Start of the highlighted span (inclusive)
    pub from_offset: usize,

    /// End of the highlighted span (exclusive)
    pub to_offset: usize,

    /// First word of the match (1-based)
    pub word_index_from: usize,

    /// Last highlighted word (1-based)
    pub word_index_to: usize,

    /// Human-readable message
    pub message: String,
}

impl RuleMatch {
    /// Create a new match
    pub fn new(
        rule_id: impl Into<String>,
        from_offset: usize,
        to_offset: usize,
        word_index_from: usize,
        word_index_to: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            from_offset,
            to_offset,
            word_index_from,
            word_index_to,
            message: message.into(),
        }
    }

    /// Number of highlighted characters
    pub fn len(&self) -> usize {
        self.to_offset - self.from_offset
    }

    pub fn is_empty(&self) -> bool {
        self.from_offset == self.to_offset
    }

    /// Render as `<error from="F" to="T">message</error>`.
    ///
    /// The message is written verbatim: rule messages may carry their own
    /// inline markup.
    pub fn to_xml(&self) -> String {
        format!(
            "<error from=\"{}\" to=\"{}\">{}</error>",
            self.from_offset, self.to_offset, self.message
        )
    }
}

impl fmt::Display for RuleMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

impl PartialOrd for RuleMatch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RuleMatch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.from_offset.cmp(&other.from_offset)
    }
}

/// Collection of matches from a checking run.
///
/// # Examples
///
/// ```rust
/// use stylelens::rules::{CheckResults, RuleMatch};
///
/// let mut results = CheckResults::new();
/// results.add_matches(vec![
///     RuleMatch::new("B", 10, 12, 3, 3, "Second."),
///     RuleMatch::new("A", 0, 3, 1, 1, "First."),
/// ]);
/// results.sort();
///
/// assert_eq!(results.matches()[0].rule_id, "A");
/// assert_eq!(results.count_by_rule()["B"], 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResults {
    matches: Vec<RuleMatch>,
}

impl CheckResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a match
    pub fn add_match(&mut self, rule_match: RuleMatch) {
        self.matches.push(rule_match);
    }

    /// Add multiple matches
    pub fn add_matches(&mut self, matches: impl IntoIterator<Item = RuleMatch>) {
        self.matches.extend(matches);
    }

    /// Stable sort by span start; ties keep insertion order
    pub fn sort(&mut self) {
        self.matches.sort_by_key(|m| m.from_offset);
    }

    /// Get all matches
    pub fn matches(&self) -> &[RuleMatch] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<RuleMatch> {
        self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Get matches produced by one rule
    pub fn matches_for_rule<'a>(
        &'a self,
        rule_id: &'a str,
    ) -> impl Iterator<Item = &'a RuleMatch> {
        self.matches.iter().filter(move |m| m.rule_id == rule_id)
    }

    /// Count matches per rule id
    pub fn count_by_rule(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for m in &self.matches {
            *counts.entry(m.rule_id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// One `<error>` element per line
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        for m in &self.matches {
            out.push_str(&m.to_xml());
            out.push('\n');
        }
        out
    }
}

impl IntoIterator for CheckResults {
    type Item = RuleMatch;
    type IntoIter = std::vec::IntoIter<RuleMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}
