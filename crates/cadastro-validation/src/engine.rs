// File: src/engine.rs
// Purpose: Rule registration and form evaluation

use crate::field::{Field, UnknownField};
use crate::messages::MessageCatalog;
use crate::outcome::{FormValidationOutcome, ValidationResult};
use crate::rules::standard_rules;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// What a rule tests
#[derive(Clone, Copy)]
pub enum Check {
    /// Pure test over the field's own value
    Predicate(fn(&str) -> bool),
    /// Exact equality with another field's current value
    EqualsField(Field),
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Predicate(_) => f.write_str("Predicate(..)"),
            Check::EqualsField(target) => f.debug_tuple("EqualsField").field(target).finish(),
        }
    }
}

/// A field, the check it must pass, and the message shown when it doesn't
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: Field,
    check: Check,
    error_message: String,
}

impl FieldRule {
    pub fn predicate(field: Field, predicate: fn(&str) -> bool, message: impl Into<String>) -> Self {
        Self {
            field,
            check: Check::Predicate(predicate),
            error_message: message.into(),
        }
    }

    pub fn equals_field(field: Field, target: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            check: Check::EqualsField(target),
            error_message: message.into(),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn check(&self) -> Check {
        self.check
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    fn passes(&self, values: &FormValues) -> bool {
        let value = values.get(self.field);
        match self.check {
            Check::Predicate(predicate) => predicate(value),
            Check::EqualsField(target) => value == values.get(target),
        }
    }

    fn apply(&self, values: &FormValues) -> ValidationResult {
        if self.passes(values) {
            ValidationResult::valid(self.field)
        } else {
            debug!(field = %self.field, "field rejected");
            ValidationResult::invalid(self.field, self.error_message.clone())
        }
    }
}

/// Raw field values of one submission.
///
/// Fields without a value read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, String>")]
pub struct FormValues {
    values: HashMap<Field, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(f, v)| (f, v.into())).collect(),
        }
    }
}

impl TryFrom<HashMap<String, String>> for FormValues {
    type Error = UnknownField;

    fn try_from(raw: HashMap<String, String>) -> Result<Self, Self::Error> {
        let values = raw
            .into_iter()
            .map(|(key, value)| Ok((key.parse::<Field>()?, value)))
            .collect::<Result<_, UnknownField>>()?;
        Ok(Self { values })
    }
}

/// Rule set misconfiguration, detected when the engine is built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no rule registered for required field `{0}`")]
    MissingRule(Field),

    #[error("more than one rule registered for field `{0}`")]
    DuplicateRule(Field),

    #[error("rule for `{field}` compares against `{target}`, which has no rule")]
    UnknownReference { field: Field, target: Field },

    #[error("rule for `{0}` compares the field against itself")]
    SelfReference(Field),
}

/// Ordered set of field rules
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<FieldRule>,
}

impl RuleEngine {
    /// Build an engine that must cover every field of the form
    pub fn new(rules: Vec<FieldRule>) -> Result<Self, RegistryError> {
        Self::with_required(rules, &Field::ALL)
    }

    /// Build an engine over a subset of the form's fields
    pub fn partial(rules: Vec<FieldRule>) -> Result<Self, RegistryError> {
        Self::with_required(rules, &[])
    }

    /// Standard rules with the built-in messages
    pub fn standard() -> Result<Self, RegistryError> {
        Self::with_messages(&MessageCatalog::default())
    }

    /// Standard rules with messages taken from `catalog`
    pub fn with_messages(catalog: &MessageCatalog) -> Result<Self, RegistryError> {
        Self::new(standard_rules(catalog))
    }

    fn with_required(rules: Vec<FieldRule>, required: &[Field]) -> Result<Self, RegistryError> {
        let mut registered = HashSet::new();
        for rule in &rules {
            if !registered.insert(rule.field) {
                return Err(RegistryError::DuplicateRule(rule.field));
            }
        }

        if let Some(&missing) = required.iter().find(|f| !registered.contains(*f)) {
            return Err(RegistryError::MissingRule(missing));
        }

        for rule in &rules {
            if let Check::EqualsField(target) = rule.check {
                if target == rule.field {
                    return Err(RegistryError::SelfReference(rule.field));
                }
                if !registered.contains(&target) {
                    return Err(RegistryError::UnknownReference {
                        field: rule.field,
                        target,
                    });
                }
            }
        }

        debug!(rules = rules.len(), "rule engine ready");
        Ok(Self { rules })
    }

    /// Run every rule against `values`.
    ///
    /// Never short-circuits: each registered field gets a result, so a host
    /// can show all errors at once.
    pub fn evaluate(&self, values: &FormValues) -> FormValidationOutcome {
        let outcome =
            FormValidationOutcome::new(self.rules.iter().map(|rule| rule.apply(values)).collect());
        debug!(
            valid = outcome.is_valid(),
            failures = outcome.failure_count(),
            "form evaluated"
        );
        outcome
    }

    /// Run the rule for a single field, if one is registered
    pub fn validate_field(&self, field: Field, values: &FormValues) -> Option<ValidationResult> {
        self.rules
            .iter()
            .find(|rule| rule.field == field)
            .map(|rule| rule.apply(values))
    }

    pub fn rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }
}
