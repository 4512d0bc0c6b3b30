// File: src/config.rs
// Purpose: Configuration parsing from cadastro.toml

use anyhow::{Context, Result};
use cadastro_validation::MessageCatalog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// CLI configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Per-field error message overrides, keyed by field
    #[serde(default)]
    pub messages: MessageCatalog,

    #[serde(default)]
    pub output: OutputConfig,
}

/// How results are printed
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_true")]
    pub color: bool,

    /// Printed after a submission passes every rule
    #[serde(default = "default_success_message")]
    pub success_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, one block per invalid field
    #[default]
    Text,
    /// The serialized outcome
    Json,
}

fn default_true() -> bool {
    true
}

fn default_success_message() -> String {
    "Cadastro realizado com sucesso!".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            success_message: default_success_message(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }
}
