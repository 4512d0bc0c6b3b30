//! Field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the registration form.
///
/// The snake_case key (`full_name`, `cpf`, ...) is the stable identifier used
/// in submission files, message overrides and serialized outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Cpf,
    Password,
    PasswordConfirmation,
    Login,
    MaternalName,
    MobilePhone,
    LandlinePhone,
    Address,
}

impl Field {
    /// All fields, in the order they appear on the form.
    pub const ALL: [Field; 9] = [
        Field::FullName,
        Field::Cpf,
        Field::Password,
        Field::PasswordConfirmation,
        Field::Login,
        Field::MaternalName,
        Field::MobilePhone,
        Field::LandlinePhone,
        Field::Address,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Cpf => "cpf",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
            Field::Login => "login",
            Field::MaternalName => "maternal_name",
            Field::MobilePhone => "mobile_phone",
            Field::LandlinePhone => "landline_phone",
            Field::Address => "address",
        }
    }

    /// Label shown next to the input on the form
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Nome",
            Field::Cpf => "CPF",
            Field::Password => "Senha",
            Field::PasswordConfirmation => "Confirmação de senha",
            Field::Login => "Login",
            Field::MaternalName => "Nome Materno",
            Field::MobilePhone => "Celular",
            Field::LandlinePhone => "Telefone Fixo",
            Field::Address => "Endereço",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A key that names no form field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0:?}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
