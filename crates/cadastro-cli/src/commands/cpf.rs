use anyhow::{bail, Result};
use cadastro_validation::{complete_document, is_valid_document};
use colored::Colorize;

/// Returns whether every number checked out
pub fn execute(numbers: &[String], complete: Option<&str>) -> Result<bool> {
    if let Some(base) = complete {
        let Some(cpf) = complete_document(base) else {
            bail!("{:?} is not a usable nine-digit CPF base", base);
        };
        println!("{}", cpf);
        return Ok(true);
    }

    let mut all_valid = true;
    for number in numbers {
        if is_valid_document(number) {
            println!("{} {}", "✓".green().bold(), number);
        } else {
            all_valid = false;
            println!("{} {}", "✗".red().bold(), number);
        }
    }

    Ok(all_valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_valid_numbers() {
        let numbers = vec!["123.456.789-09".to_string(), "529.982.247-25".to_string()];
        assert!(execute(&numbers, None).unwrap());
    }

    #[test]
    fn test_one_invalid_number() {
        let numbers = vec!["123.456.789-09".to_string(), "111.111.111-11".to_string()];
        assert!(!execute(&numbers, None).unwrap());
    }

    #[test]
    fn test_complete_rejects_bad_base() {
        assert!(execute(&[], Some("12345")).is_err());
        assert!(execute(&[], Some("123456789")).unwrap());
    }
}
