//! # Tagged Sentences
//!
//! Input data model for the matching engine. A tagger outside this crate
//! splits text into sentences and annotates each slice with a normalized
//! form and a part-of-speech tag; the engine only consumes the result.
//!
//! - [`Tag`] - A part-of-speech label or one of the two boundary sentinels
//! - [`TaggedWord`] - One `(surface, normalized, tag)` entry
//! - [`TaggedSentence`] - An ordered sequence of entries for one sentence
//!
//! ## Examples
//!
//! ```rust
//! use stylelens::sentence::{TaggedSentence, TaggedWord};
//!
//! let sentence = TaggedSentence::with_boundaries(vec![
//!     TaggedWord::word("This", "this", "DT"),
//!     TaggedWord::filler(" "),
//!     TaggedWord::word("works", "works", "VBZ"),
//! ]);
//!
//! assert_eq!(sentence.len(), 5);
//! assert_eq!(sentence.char_len(), 10);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

const SENT_START: &str = "SENT_START";
const SENT_END: &str = "SENT_END";

/// Tag attached to a tagged entry.
///
/// The sentence boundary sentinels are separate variants so that no real
/// part-of-speech label can collide with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    /// Sentence start sentinel
    SentStart,
    /// Sentence end sentinel
    SentEnd,
    /// Ordinary part-of-speech label
    Pos(String),
}

impl Tag {
    /// Parse a tag label, mapping the sentinel names to their variants
    pub fn parse(label: &str) -> Self {
        match label {
            SENT_START => Self::SentStart,
            SENT_END => Self::SentEnd,
            other => Self::Pos(other.to_string()),
        }
    }

    /// The label as written in tagger output
    pub fn as_str(&self) -> &str {
        match self {
            Self::SentStart => SENT_START,
            Self::SentEnd => SENT_END,
            Self::Pos(label) => label,
        }
    }

    /// Whether this is one of the boundary sentinels
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::SentStart | Self::SentEnd)
    }
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        match label.as_str() {
            SENT_START => Self::SentStart,
            SENT_END => Self::SentEnd,
            _ => Self::Pos(label),
        }
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Pos(label) => label,
            sentinel => sentinel.as_str().to_string(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a tagged sentence.
///
/// Serialized as a three-element array `[surface, normalized, tag]` with
/// `null` for absent values, matching the tagger's JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord(
    /// Exact original text slice
    pub String,
    /// Normalized form, present for taggable words
    pub Option<String>,
    /// Part-of-speech tag or sentinel
    pub Option<Tag>,
);

impl TaggedWord {
    /// Create an entry from its raw parts
    pub fn new(surface: &str, normalized: Option<&str>, tag: Option<&str>) -> Self {
        Self(
            surface.to_string(),
            normalized.map(str::to_string),
            tag.map(Tag::parse),
        )
    }

    /// Create a taggable word
    pub fn word(surface: impl Into<String>, normalized: impl Into<String>, tag: &str) -> Self {
        Self(surface.into(), Some(normalized.into()), Some(Tag::parse(tag)))
    }

    /// Create an untaggable filler entry such as whitespace
    pub fn filler(surface: impl Into<String>) -> Self {
        Self(surface.into(), None, None)
    }

    /// Sentence start sentinel with an empty surface
    pub fn sent_start() -> Self {
        Self(String::new(), None, Some(Tag::SentStart))
    }

    /// Sentence end sentinel with an empty surface
    pub fn sent_end() -> Self {
        Self(String::new(), None, Some(Tag::SentEnd))
    }

    pub fn surface(&self) -> &str {
        &self.0
    }

    pub fn normalized(&self) -> Option<&str> {
        self.1.as_deref()
    }

    pub fn tag(&self) -> Option<&Tag> {
        self.2.as_ref()
    }

    /// Length of the surface in characters
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the entry is a sentence boundary sentinel
    pub fn is_sentinel(&self) -> bool {
        self.2.as_ref().is_some_and(Tag::is_sentinel)
    }

    /// Filler carries no normalized form and is not a sentinel.
    ///
    /// Pattern matching steps over filler without consuming a token.
    pub fn is_filler(&self) -> bool {
        self.normalized().map_or(true, str::is_empty) && !self.is_sentinel()
    }

    /// Both a normalized form and a tag are present
    pub fn is_taggable(&self) -> bool {
        self.normalized().is_some_and(|n| !n.is_empty()) && self.2.is_some()
    }
}

/// An ordered sequence of tagged entries representing one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaggedSentence {
    words: Vec<TaggedWord>,
}

impl TaggedSentence {
    /// Wrap entries as-is, without adding sentinels
    pub fn new(words: Vec<TaggedWord>) -> Self {
        Self { words }
    }

    /// Wrap entries between a `SENT_START` and a `SENT_END` sentinel
    pub fn with_boundaries(words: Vec<TaggedWord>) -> Self {
        let mut bounded = Vec::with_capacity(words.len() + 2);
        bounded.push(TaggedWord::sent_start());
        bounded.extend(words);
        bounded.push(TaggedWord::sent_end());
        Self { words: bounded }
    }

    /// Add missing boundary sentinels, leaving existing ones in place
    pub fn ensure_boundaries(mut self) -> Self {
        let has_start = self
            .words
            .first()
            .is_some_and(|w| w.tag() == Some(&Tag::SentStart));
        if !has_start {
            self.words.insert(0, TaggedWord::sent_start());
        }
        let has_end = self
            .words
            .last()
            .is_some_and(|w| w.tag() == Some(&Tag::SentEnd));
        if !has_end {
            self.words.push(TaggedWord::sent_end());
        }
        self
    }

    pub fn words(&self) -> &[TaggedWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total surface length in characters
    pub fn char_len(&self) -> usize {
        self.words.iter().map(TaggedWord::char_len).sum()
    }

    /// Reassemble the original text of the sentence
    pub fn text(&self) -> String {
        self.words.iter().map(TaggedWord::surface).collect()
    }
}

impl From<Vec<TaggedWord>> for TaggedSentence {
    fn from(words: Vec<TaggedWord>) -> Self {
        Self::new(words)
    }
}

impl<'a> IntoIterator for &'a TaggedSentence {
    type Item = &'a TaggedWord;
    type IntoIter = std::slice::Iter<'a, TaggedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parse_sentinels() {
        assert_eq!(Tag::parse("SENT_START"), Tag::SentStart);
        assert_eq!(Tag::parse("SENT_END"), Tag::SentEnd);
        assert_eq!(Tag::parse("NN"), Tag::Pos("NN".to_string()));
        assert!(Tag::SentEnd.is_sentinel());
        assert!(!Tag::Pos("VB".to_string()).is_sentinel());
    }

    #[test]
    fn test_filler_classification() {
        assert!(TaggedWord::filler(" ").is_filler());
        assert!(TaggedWord::new("", Some(""), None).is_filler());
        assert!(!TaggedWord::word("dog", "dog", "NN").is_filler());
        assert!(!TaggedWord::sent_start().is_filler());
        assert!(!TaggedWord::sent_end().is_filler());
    }

    #[test]
    fn test_taggable_requires_form_and_tag() {
        assert!(TaggedWord::word("x", "x", "T").is_taggable());
        assert!(!TaggedWord::new("x", Some("x"), None).is_taggable());
        assert!(!TaggedWord::filler("  ").is_taggable());
        assert!(!TaggedWord::sent_start().is_taggable());
    }

    #[test]
    fn test_char_len_counts_characters() {
        let word = TaggedWord::word("\u{00E4}iti", "\u{00E4}iti", "NN");
        assert_eq!(word.char_len(), 4);
    }

    #[test]
    fn test_with_boundaries() {
        let sentence = TaggedSentence::with_boundaries(vec![TaggedWord::word("a", "a", "DT")]);
        assert_eq!(sentence.len(), 3);
        assert_eq!(sentence.words()[0].tag(), Some(&Tag::SentStart));
        assert_eq!(sentence.words()[2].tag(), Some(&Tag::SentEnd));
        assert_eq!(sentence.text(), "a");
    }

    #[test]
    fn test_ensure_boundaries_is_idempotent() {
        let sentence = TaggedSentence::with_boundaries(vec![TaggedWord::word("a", "a", "DT")]);
        let again = sentence.clone().ensure_boundaries();
        assert_eq!(sentence, again);

        let bare = TaggedSentence::new(vec![TaggedWord::word("a", "a", "DT")]).ensure_boundaries();
        assert_eq!(bare.len(), 3);
    }

    #[test]
    fn test_json_shape() {
        let word: TaggedWord = serde_json::from_str(r#"["Dogs", "dog", "NNS"]"#).unwrap();
        assert_eq!(word, TaggedWord::word("Dogs", "dog", "NNS"));

        let filler: TaggedWord = serde_json::from_str(r#"[" ", null, null]"#).unwrap();
        assert!(filler.is_filler());

        let start: TaggedWord = serde_json::from_str(r#"["", null, "SENT_START"]"#).unwrap();
        assert!(start.is_sentinel());

        let json = serde_json::to_string(&TaggedWord::sent_end()).unwrap();
        assert_eq!(json, r#"["",null,"SENT_END"]"#);
    }
}
