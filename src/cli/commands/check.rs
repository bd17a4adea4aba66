//! Check command - Run the rules against tagged sentences
//!
//! Settings are layered: command-line flags win over `.stylelens.toml`,
//! which wins over the built-in defaults.

use std::path::Path;
use tracing::{debug, info};

use super::{load_pattern_rules, write_output, CheckArgs, OutputFormat};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput, XmlOutput};
use crate::cli::Context;
use crate::error::StyleLensError;
use crate::input;
use crate::rules::{Checker, GrammarRule, RuleSet};

/// Execute the check command
///
/// # Returns
///
/// An exit code: 0 when nothing matched, 2 when at least one rule matched
pub fn execute(args: CheckArgs, ctx: &Context) -> Result<i32, StyleLensError> {
    let config = &ctx.config;

    let pattern_rules = load_pattern_rules(args.rules.as_deref(), ctx)?;
    let max_length = args.max_sentence_length.unwrap_or(config.max_sentence_length);
    let mut rules = RuleSet::build(Some(max_length), args.only.as_deref(), pattern_rules);
    rules.retain(|rule| config.is_rule_enabled(rule.id()));
    debug!(rules = rules.len(), "Rule set ready");

    let mut checker = Checker::new(rules);
    if let Some(language) = args.language.as_ref().or(config.language.as_ref()) {
        checker = checker.with_language(language.as_str());
    }

    let input_path = args
        .input
        .as_deref()
        .filter(|p| *p != Path::new("-"))
        .map(|p| ctx.resolve(p));
    let sentences = input::read_sentences(input_path.as_deref())?;
    let results = checker.check_text(&sentences);

    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Xml => Box::new(XmlOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
    };
    let rendered = renderer.render_report(&results)?;
    write_output(&rendered, args.output.as_deref(), ctx)?;

    info!(matches = results.len(), "Check finished");

    let exit_code = if results.is_empty() {
        exit_codes::SUCCESS
    } else {
        exit_codes::MATCHES_FOUND
    };

    Ok(exit_code)
}
