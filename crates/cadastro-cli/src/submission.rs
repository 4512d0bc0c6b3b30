// File: src/submission.rs
// Purpose: Read form values from a submission file or stdin

use anyhow::{Context, Result};
use cadastro_validation::FormValues;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionFormat {
    Json,
    Toml,
}

impl SubmissionFormat {
    /// `.json` files are JSON, everything else is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SubmissionFormat::Json,
            _ => SubmissionFormat::Toml,
        }
    }
}

/// Load a submission; `-` reads JSON from stdin
pub fn load(path: &Path) -> Result<FormValues> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read submission from stdin")?;
        return parse(&content, SubmissionFormat::Json).context("Failed to parse submission from stdin");
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read submission file: {:?}", path))?;

    parse(&content, SubmissionFormat::from_path(path))
        .with_context(|| format!("Failed to parse submission file: {:?}", path))
}

pub fn parse(content: &str, format: SubmissionFormat) -> Result<FormValues> {
    let values = match format {
        SubmissionFormat::Json => serde_json::from_str(content)?,
        SubmissionFormat::Toml => toml::from_str(content)?,
    };
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_validation::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SubmissionFormat::from_path(Path::new("form.json")), SubmissionFormat::Json);
        assert_eq!(SubmissionFormat::from_path(Path::new("form.JSON")), SubmissionFormat::Json);
        assert_eq!(SubmissionFormat::from_path(Path::new("form.toml")), SubmissionFormat::Toml);
        assert_eq!(SubmissionFormat::from_path(Path::new("form")), SubmissionFormat::Toml);
    }

    #[test]
    fn test_parse_toml() {
        let values = parse(
            "full_name = \"Maria Silva\"\nlogin = \"MARIA\"\n",
            SubmissionFormat::Toml,
        )
        .unwrap();
        assert_eq!(values.get(Field::FullName), "Maria Silva");
        assert_eq!(values.get(Field::Login), "MARIA");
        assert_eq!(values.get(Field::Cpf), "");
    }

    #[test]
    fn test_parse_json() {
        let values = parse(r#"{"cpf": "123.456.789-09"}"#, SubmissionFormat::Json).unwrap();
        assert_eq!(values.get(Field::Cpf), "123.456.789-09");
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        assert!(parse(r#"{"apelido": "Mari"}"#, SubmissionFormat::Json).is_err());
        assert!(parse("apelido = \"Mari\"\n", SubmissionFormat::Toml).is_err());
    }

    #[test]
    fn test_non_string_value_is_an_error() {
        assert!(parse(r#"{"login": 12345}"#, SubmissionFormat::Json).is_err());
    }
}
