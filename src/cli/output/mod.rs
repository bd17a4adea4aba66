//! Output formatting module for CLI

pub mod json;
mod terminal;
mod xml;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;
pub use xml::XmlOutput;

use crate::error::StyleLensError;
use crate::rules::{CheckResults, Rule};

/// Trait for rendering check results
pub trait ReportRenderer {
    fn render_report(&self, results: &CheckResults) -> Result<String, StyleLensError>;
}

/// Trait for rendering a rule listing
pub trait RuleListRenderer {
    fn render_rules(&self, rules: &[&Rule]) -> Result<String, StyleLensError>;
}
