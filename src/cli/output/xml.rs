//! XML output formatting
//!
//! One `<error from="F" to="T">message</error>` element per line, ordered by
//! start offset.

use super::ReportRenderer;
use crate::error::StyleLensError;
use crate::rules::CheckResults;

pub struct XmlOutput;

impl XmlOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XmlOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for XmlOutput {
    fn render_report(&self, results: &CheckResults) -> Result<String, StyleLensError> {
        Ok(results.to_xml())
    }
}
