use crate::config::Config;
use anyhow::{Context, Result};
use cadastro_validation::RuleEngine;
use colored::Colorize;

pub fn execute(config: &Config) -> Result<()> {
    let engine = RuleEngine::with_messages(&config.messages)
        .context("Invalid rule configuration")?;

    for rule in engine.rules() {
        let field = rule.field();
        let marker = if config.messages.is_overridden(field) {
            " (custom message)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("{} {}{}", field.label().bold(), format!("[{}]", field).cyan(), marker);
        println!("    {}", rule.error_message());
    }

    Ok(())
}
