mod commands;
mod config;
mod submission;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use config::{Config, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cadastro")]
#[command(version, about = "cadastro CLI - validate registration form submissions", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "cadastro.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a submission file (JSON if it ends in .json, TOML otherwise, `-` for JSON on stdin)
    Validate {
        /// Submission file
        file: PathBuf,

        /// Output format (overrides the config file)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Check CPF numbers written as DDD.DDD.DDD-DD
    Cpf {
        /// CPF numbers to check
        #[arg(required_unless_present = "complete")]
        numbers: Vec<String>,

        /// Print the full CPF for a nine-digit base instead
        #[arg(long, value_name = "NINE_DIGITS", conflicts_with = "numbers")]
        complete: Option<String>,
    },

    /// List the form's fields and their error messages
    Rules,
}

fn main() -> ExitCode {
    init_tracing();

    // Parse CLI arguments
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}

/// Ok(false) means the input was read fine but did not validate
fn run(cli: Cli) -> Result<bool> {
    let config = Config::load(&cli.config)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    // Execute command
    match cli.command {
        Commands::Validate { file, format } => commands::validate::execute(&file, format, &config),
        Commands::Cpf { numbers, complete } => {
            commands::cpf::execute(&numbers, complete.as_deref())
        }
        Commands::Rules => {
            commands::rules::execute(&config)?;
            Ok(true)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
