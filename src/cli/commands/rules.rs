//! Rules command - List the rules of a rule file

use super::{load_pattern_rules, write_output, ListFormat, RulesArgs};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, RuleListRenderer, TerminalOutput};
use crate::cli::Context;
use crate::error::StyleLensError;
use crate::rules::{Rule, RuleSet};

/// Execute the rules command
pub fn execute(args: RulesArgs, ctx: &Context) -> Result<i32, StyleLensError> {
    let pattern_rules = load_pattern_rules(args.rules.as_deref(), ctx)?;
    let rules = RuleSet::build(Some(ctx.config.max_sentence_length), None, pattern_rules);

    let listed: Vec<&Rule> = match args.language.as_ref().or(ctx.config.language.as_ref()) {
        Some(language) => rules.for_language(language),
        None => rules.iter().collect(),
    };

    let renderer: Box<dyn RuleListRenderer> = match args.format {
        ListFormat::Terminal => Box::new(TerminalOutput::new()),
        ListFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_rules(&listed)?;
    write_output(&rendered, None, ctx)?;

    Ok(exit_codes::SUCCESS)
}
