//! Rule definition loader
//!
//! Reads pattern rules from the XML grammar file format:
//!
//! ```xml
//! <rules>
//!   <rulegroup>
//!     <message>Did you mean <em>an</em>?</message>
//!     <rule id="EN_A_VS_AN">
//!       <pattern lang="en">"a" "(apple|egg)"</pattern>
//!       <marker>0</marker>
//!       <example type="correct">An apple.</example>
//!       <example type="incorrect">A apple.</example>
//!       <error_rate>2</error_rate>
//!     </rule>
//!   </rulegroup>
//! </rules>
//! ```
//!
//! A rule without its own `<message>` takes the one of its enclosing group.
//! The file is always named explicitly; nothing is resolved against the
//! current directory.

use lazy_static::lazy_static;
use regex::Regex;
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::rules::PatternRule;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Load every rule of a rule file, in document order
pub fn load_rules(path: &Path) -> Result<Vec<PatternRule>, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;

    let rules = load_rules_from_str(&content)?;
    info!(path = %path.display(), rules = rules.len(), "Loaded rule file");
    Ok(rules)
}

/// Parse rules from an XML document
pub fn load_rules_from_str(xml: &str) -> Result<Vec<PatternRule>, LoadError> {
    let doc = Document::parse(xml).map_err(|e| LoadError::Parse {
        message: e.to_string(),
    })?;

    doc.descendants()
        .filter(|n| n.has_tag_name("rule"))
        .map(|n| parse_rule(&doc, n))
        .collect()
}

fn parse_rule(doc: &Document, node: Node) -> Result<PatternRule, LoadError> {
    let rule_id = node
        .attribute("id")
        .ok_or_else(|| LoadError::MissingId {
            line: doc.text_pos_at(node.range().start).row,
        })?
        .to_string();

    let missing = |element: &'static str| LoadError::MissingElement {
        rule_id: rule_id.clone(),
        element,
    };

    let pattern_node = child(node, "pattern").ok_or_else(|| missing("pattern"))?;
    let pattern = pattern_node.text().unwrap_or_default();
    let language = pattern_node.attribute("lang").unwrap_or_default();
    let case_sensitive = pattern_node.attribute("case_sensitive") == Some("yes");

    let message_node = child(node, "message")
        .or_else(|| node.ancestors().skip(1).find_map(|a| child(a, "message")))
        .ok_or_else(|| missing("message"))?;

    let marker_text = child(node, "marker")
        .and_then(|m| m.text())
        .ok_or_else(|| missing("marker"))?;
    let marker = marker_text
        .trim()
        .parse::<usize>()
        .map_err(|_| LoadError::InvalidValue {
            rule_id: rule_id.clone(),
            element: "marker",
            value: marker_text.to_string(),
        })?;

    let error_rate_text = child(node, "error_rate")
        .and_then(|e| e.text())
        .ok_or_else(|| missing("error_rate"))?;
    let false_positives = error_rate_text
        .trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidValue {
            rule_id: rule_id.clone(),
            element: "error_rate",
            value: error_rate_text.to_string(),
        })?;

    let mut example_good = String::new();
    let mut example_bad = String::new();
    for example in node.children().filter(|n| n.has_tag_name("example")) {
        if example.attribute("type") == Some("correct") {
            example_good = inner_markup(doc, example);
        } else {
            example_bad = inner_markup(doc, example);
        }
    }

    debug!(rule_id = %rule_id, pattern = pattern.trim(), "Parsed rule definition");

    let rule = PatternRule::builder(rule_id, pattern)
        .message(inner_markup(doc, message_node))
        .marker(marker)
        .case_sensitive(case_sensitive)
        .language(language)
        .false_positives(false_positives)
        .examples(example_good, example_bad)
        .build()?;
    Ok(rule)
}

/// First child element with the given name
fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// Content of an element as written, inline markup included, with runs of
/// whitespace collapsed
fn inner_markup(doc: &Document, node: Node) -> String {
    let (Some(first), Some(last)) = (node.first_child(), node.last_child()) else {
        return String::new();
    };
    let raw = &doc.input_text()[first.range().start..last.range().end];
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}
