//! cadastro validation core
//!
//! Rule engine and field predicates for the registration form: full name,
//! CPF, password and its confirmation, login, maternal name, mobile and
//! landline phones, and address.
//!
//! The host reads the current field values into [`FormValues`], calls
//! [`RuleEngine::evaluate`] on every submission attempt and renders each
//! [`ValidationResult`] next to its field. Submission proceeds only when
//! [`FormValidationOutcome::is_valid`] is true.
//!
//! ```
//! use cadastro_validation::{Field, FormValues, RuleEngine};
//!
//! let engine = RuleEngine::standard().unwrap();
//! let values = FormValues::new()
//!     .with(Field::FullName, "Maria Silva")
//!     .with(Field::Login, "abcde");
//!
//! let outcome = engine.evaluate(&values);
//! assert!(!outcome.is_valid());
//! assert!(outcome.get(Field::FullName).unwrap().is_valid);
//! assert!(!outcome.get(Field::Login).unwrap().is_valid);
//! ```
//!
//! [`is_valid_document`] is usable on its own, for example to re-check a CPF
//! on the server side.

pub mod document;
pub mod engine;
pub mod field;
pub mod messages;
pub mod outcome;
pub mod patterns;
pub mod rules;

pub use document::{check_digits, complete_document, format_document, is_valid_document};
pub use engine::{Check, FieldRule, FormValues, RegistryError, RuleEngine};
pub use field::{Field, UnknownField};
pub use messages::MessageCatalog;
pub use outcome::{FormValidationOutcome, ValidationResult};
pub use rules::standard_rules;
