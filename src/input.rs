//! Tagged sentence input
//!
//! Tagger output is a JSON array of sentences, each an array of
//! `[surface, normalized, tag]` entries:
//!
//! ```json
//! [[["", null, "SENT_START"], ["The", "the", "DT"], [" ", null, null], ["end", "end", "NN"]]]
//! ```
//!
//! Missing boundary sentinels are added.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use crate::error::InputError;
use crate::sentence::TaggedSentence;

/// Parse tagged sentences from JSON text
pub fn parse_sentences(json: &str) -> Result<Vec<TaggedSentence>, InputError> {
    let sentences: Vec<TaggedSentence> = serde_json::from_str(json)?;
    Ok(sentences
        .into_iter()
        .map(TaggedSentence::ensure_boundaries)
        .collect())
}

/// Read tagged sentences from a file, or from stdin when `path` is `None`
/// or `-`
pub fn read_sentences(path: Option<&Path>) -> Result<Vec<TaggedSentence>, InputError> {
    let content = match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).map_err(|e| InputError::Read {
                path: p.display().to_string(),
                source: e,
            })?
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| InputError::Read {
                    path: "-".to_string(),
                    source: e,
                })?;
            buffer
        }
    };

    let sentences = parse_sentences(&content)?;
    debug!(sentences = sentences.len(), "Read tagged input");
    Ok(sentences)
}
