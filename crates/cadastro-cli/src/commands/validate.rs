use crate::config::{Config, OutputFormat};
use crate::submission;
use anyhow::{Context, Result};
use cadastro_types::{Registration, RegistrationError};
use cadastro_validation::{FormValidationOutcome, RuleEngine};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Returns whether the submission passed every rule
pub fn execute(file: &Path, format: Option<OutputFormat>, config: &Config) -> Result<bool> {
    let engine = RuleEngine::with_messages(&config.messages)
        .context("Invalid rule configuration")?;
    let values = submission::load(file)?;

    match format.unwrap_or(config.output.format) {
        OutputFormat::Json => {
            let outcome = engine.evaluate(&values);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(outcome.is_valid())
        }
        OutputFormat::Text => match Registration::parse(&engine, &values) {
            Ok(registration) => {
                info!(file = ?file, "submission accepted");
                println!("{}", config.output.success_message.green().bold());
                println!("{}", render_summary(&registration));
                Ok(true)
            }
            Err(RegistrationError::Invalid(outcome)) => {
                print!("{}", render_failures(&outcome));
                Ok(false)
            }
            Err(err) => Err(err.into()),
        },
    }
}

/// One block per invalid field, then a count
pub fn render_failures(outcome: &FormValidationOutcome) -> String {
    let mut out = String::new();
    for result in outcome.failures() {
        out.push_str(&format!(
            "{} {} ({})\n",
            "✗".red().bold(),
            result.field.label().bold(),
            result.field
        ));
        if let Some(message) = &result.message {
            out.push_str(&format!("    {}\n", message));
        }
    }
    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        format!(
            "{} of {} fields invalid",
            outcome.failure_count(),
            outcome.results().len()
        )
        .yellow()
    ));
    out
}

pub fn render_summary(registration: &Registration) -> String {
    format!(
        "Login: {}\nCPF: {}",
        registration.login.to_string().cyan(),
        registration.cpf.masked().cyan()
    )
}
