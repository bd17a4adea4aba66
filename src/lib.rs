//! StyleLens Library
//!
//! Rule-based grammar and style checking of part-of-speech tagged text.
//! Pattern rules are loaded from an XML grammar file and matched token by
//! token against tagged sentences; every hit is reported as a character
//! span with a message.
//!
//! ```rust
//! use stylelens::loader::load_rules_from_str;
//! use stylelens::rules::{Checker, RuleSet};
//! use stylelens::sentence::{TaggedSentence, TaggedWord};
//!
//! let rules = load_rules_from_str(
//!     r#"<rules><rule id="THE_THE"><pattern>"the" "the"</pattern>
//!        <message>Double article.</message><marker>1</marker>
//!        <error_rate>0</error_rate></rule></rules>"#,
//! )?;
//! let checker = Checker::new(RuleSet::build(None, None, rules));
//!
//! let sentence = TaggedSentence::with_boundaries(vec![
//!     TaggedWord::word("the", "the", "DT"),
//!     TaggedWord::filler(" "),
//!     TaggedWord::word("the", "the", "DT"),
//! ]);
//! let results = checker.check_text([&sentence]);
//! assert_eq!(results.to_xml(), "<error from=\"4\" to=\"7\">Double article.</error>\n");
//! # Ok::<(), stylelens::StyleLensError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod rules;
pub mod sentence;

pub use error::StyleLensError;
