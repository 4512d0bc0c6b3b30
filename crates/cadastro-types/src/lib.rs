//! Validated field types for the cadastro registration form
//!
//! Each newtype wraps a raw field value and can only be constructed from a
//! value that passes the same predicate the rule engine uses. Once a
//! submission evaluates clean, [`Registration::parse`] turns the raw
//! [`FormValues`] into a typed record the host can act on.
//!
//! ```rust,ignore
//! use cadastro_types::{Cpf, Registration};
//! use cadastro_validation::RuleEngine;
//!
//! let cpf = Cpf::try_new("123.456.789-09".to_string())?;   // ✓
//! let bad = Cpf::try_new("123.456.789-00".to_string());    // ✗
//!
//! let engine = RuleEngine::standard()?;
//! let registration = Registration::parse(&engine, &values)?;
//! println!("{} ({})", registration.login, registration.cpf.masked());
//! ```

use cadastro_validation::patterns::{
    is_valid_address, is_valid_full_name, is_valid_landline_phone, is_valid_login,
    is_valid_mobile_phone, is_valid_password,
};
use cadastro_validation::{is_valid_document, Field, FormValidationOutcome, FormValues, RuleEngine};
use nutype::nutype;
use std::fmt;
use tracing::debug;

// =============================================================================
// Field types
// =============================================================================

/// Person name: capital ASCII first letter, 10+ letters and spaces.
///
/// Used for both the full name and the maternal name.
#[nutype(
    validate(predicate = is_valid_full_name),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct PersonName(String);

/// CPF in the `DDD.DDD.DDD-DD` layout with valid check digits
#[nutype(
    validate(predicate = is_valid_document),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct Cpf(String);

impl Cpf {
    /// The eleven digits without separators
    pub fn digits(&self) -> String {
        self.chars().filter(char::is_ascii_digit).collect()
    }

    /// Hides the first three and last two digits: `***.456.789-**`
    pub fn masked(&self) -> String {
        self.char_indices()
            .map(|(i, c)| match i {
                0..=2 | 12..=13 => '*',
                _ => c,
            })
            .collect()
    }
}

/// Password: 7+ ASCII letters and digits.
///
/// Deliberately has no `Display` and a redacting `Debug`.
#[nutype(
    validate(predicate = is_valid_password),
    derive(Clone, PartialEq, Eq, AsRef, Deref)
)]
pub struct Password(String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Login: exactly five uppercase ASCII letters
#[nutype(
    validate(predicate = is_valid_login),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct Login(String);

/// Mobile phone, `+55(DD)DDDDD-DDDD`
#[nutype(
    validate(predicate = is_valid_mobile_phone),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct MobilePhone(String);

/// Landline phone, `+55(DD)NDDDD-DDDD` with N in 2..=5
#[nutype(
    validate(predicate = is_valid_landline_phone),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct LandlinePhone(String);

/// Street address starting with Rua, Avenida, Av. or Travessa
#[nutype(
    validate(predicate = is_valid_address),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct Address(String);

// =============================================================================
// Registration record
// =============================================================================

/// Why a submission could not become a [`Registration`]
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// One or more fields failed their rules; the outcome carries the messages
    #[error("{} field(s) failed validation", .0.failure_count())]
    Invalid(FormValidationOutcome),

    /// The engine accepted a value its field type rejects (custom rule set)
    #[error("field `{field}` passed the rule engine but {reason}")]
    Field { field: Field, reason: &'static str },
}

/// A submission that passed every rule, with typed values.
///
/// The password confirmation is not kept: it equals `password`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub full_name: PersonName,
    pub cpf: Cpf,
    pub password: Password,
    pub login: Login,
    pub maternal_name: PersonName,
    pub mobile_phone: MobilePhone,
    pub landline_phone: LandlinePhone,
    pub address: Address,
}

impl Registration {
    /// Evaluate `values` with `engine` and, if every field passes, build the
    /// typed record.
    pub fn parse(engine: &RuleEngine, values: &FormValues) -> Result<Self, RegistrationError> {
        let outcome = engine.evaluate(values);
        if !outcome.is_valid() {
            return Err(RegistrationError::Invalid(outcome));
        }

        let registration = Self {
            full_name: typed(Field::FullName, values, |v| PersonName::try_new(v).ok())?,
            cpf: typed(Field::Cpf, values, |v| Cpf::try_new(v).ok())?,
            password: typed(Field::Password, values, |v| Password::try_new(v).ok())?,
            login: typed(Field::Login, values, |v| Login::try_new(v).ok())?,
            maternal_name: typed(Field::MaternalName, values, |v| PersonName::try_new(v).ok())?,
            mobile_phone: typed(Field::MobilePhone, values, |v| MobilePhone::try_new(v).ok())?,
            landline_phone: typed(Field::LandlinePhone, values, |v| {
                LandlinePhone::try_new(v).ok()
            })?,
            address: typed(Field::Address, values, |v| Address::try_new(v).ok())?,
        };

        debug!(login = %registration.login, "registration accepted");
        Ok(registration)
    }
}

fn typed<T>(
    field: Field,
    values: &FormValues,
    construct: impl FnOnce(String) -> Option<T>,
) -> Result<T, RegistrationError> {
    construct(values.get(field).to_string()).ok_or(RegistrationError::Field {
        field,
        reason: "its type rejects the value",
    })
}
