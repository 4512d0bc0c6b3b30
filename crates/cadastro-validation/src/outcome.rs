// File: src/outcome.rs
// Purpose: Per-field results and the aggregated outcome of one evaluation

use crate::field::Field;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Result of running one field's rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub field: Field,
    pub is_valid: bool,
    /// Error message, present only when the field is invalid
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid(field: Field) -> Self {
        Self {
            field,
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Results of one evaluation, in rule registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationOutcome {
    results: Vec<ValidationResult>,
}

impl FormValidationOutcome {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    /// True when every field passed
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.is_valid)
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationResult> {
        self.results.iter()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.is_valid)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationResult> {
        self.results.iter().find(|r| r.field == field)
    }

    /// Error message for a field, if it failed
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(|r| r.message.as_deref())
    }

    pub fn into_results(self) -> Vec<ValidationResult> {
        self.results
    }
}

impl<'a> IntoIterator for &'a FormValidationOutcome {
    type Item = &'a ValidationResult;
    type IntoIter = std::slice::Iter<'a, ValidationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

// Serialized as `{ "isValid": bool, "results": [...] }` so hosts get the
// overall verdict without recomputing it.
impl Serialize for FormValidationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormValidationOutcome", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("results", &self.results)?;
        state.end()
    }
}
