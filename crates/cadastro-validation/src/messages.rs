//! Error messages shown next to invalid fields

use crate::field::{Field, UnknownField};
use serde::Deserialize;
use std::collections::HashMap;

/// Per-field error messages.
///
/// Starts from the built-in Portuguese texts; hosts override individual
/// fields (for example from the `[messages]` table of a config file).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, String>")]
pub struct MessageCatalog {
    overrides: HashMap<Field, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the message for one field
    pub fn with_override(mut self, field: Field, message: impl Into<String>) -> Self {
        self.overrides.insert(field, message.into());
        self
    }

    pub fn message(&self, field: Field) -> &str {
        self.overrides
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| default_message(field))
    }

    pub fn is_overridden(&self, field: Field) -> bool {
        self.overrides.contains_key(&field)
    }
}

impl TryFrom<HashMap<String, String>> for MessageCatalog {
    type Error = UnknownField;

    fn try_from(raw: HashMap<String, String>) -> Result<Self, Self::Error> {
        let overrides = raw
            .into_iter()
            .map(|(key, message)| Ok((key.parse::<Field>()?, message)))
            .collect::<Result<_, UnknownField>>()?;
        Ok(Self { overrides })
    }
}

/// Built-in message for a field
pub fn default_message(field: Field) -> &'static str {
    match field {
        Field::FullName => {
            "O campo Nome deve ter no mínimo dez caracteres alfabéticos, incluindo espaços. \
             O primeiro caractere deve ser maiúscula."
        }
        Field::Cpf => "O campo CPF deve ser válido e seguir o seguinte formato: 000.111.222-33",
        Field::Password => {
            "O campo Senha requer uma composição de no mínimo sete caracteres alfanuméricos."
        }
        Field::PasswordConfirmation => "Confirmação de senha deve ser igual à senha.",
        Field::Login => {
            "O campo Login deve ser preenchido com exatamente cinco caracteres alfabéticos, \
             todos em letras maiúsculas."
        }
        Field::MaternalName => {
            "O campo Nome Materno deve ter no mínimo dez caracteres alfabéticos, incluindo \
             espaços. O primeiro caractere deve ser maiúscula."
        }
        Field::MobilePhone => "O campo Celular deve ter o seguinte formato: +55(21)99565-1622",
        Field::LandlinePhone => {
            "O campo Telefone Fixo deve ter o seguinte formato: +55(21)49565-1622. O primeiro \
             número da sequência de cinco dígitos deve ser 2, 3, 4 ou 5."
        }
        Field::Address => {
            "O campo Endereço deve começar com Rua, Avenida, Av. ou Travessa, seguido de pelo \
             menos dez caracteres alfanuméricos, incluindo espaços. Exemplo: Rua Nome da Rua 123"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_not_empty() {
        let catalog = MessageCatalog::new();
        for field in Field::ALL {
            assert!(!catalog.message(field).is_empty());
            assert!(!catalog.is_overridden(field));
        }
    }

    #[test]
    fn test_override_replaces_only_named_field() {
        let catalog = MessageCatalog::new().with_override(Field::Login, "Login inválido");
        assert_eq!(catalog.message(Field::Login), "Login inválido");
        assert_eq!(catalog.message(Field::Cpf), default_message(Field::Cpf));
    }

    #[test]
    fn test_deserialize_from_toml_table() {
        let catalog: MessageCatalog = toml::from_str(r#"cpf = "CPF inválido""#).unwrap();
        assert_eq!(catalog.message(Field::Cpf), "CPF inválido");
        assert!(catalog.is_overridden(Field::Cpf));
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let result: Result<MessageCatalog, _> = serde_json::from_str(r#"{"nickname": "x"}"#);
        assert!(result.is_err());
    }
}
