//! The registration form's rule table

use crate::document::is_valid_document;
use crate::engine::FieldRule;
use crate::field::Field;
use crate::messages::MessageCatalog;
use crate::patterns::{
    is_valid_address, is_valid_full_name, is_valid_landline_phone, is_valid_login,
    is_valid_maternal_name, is_valid_mobile_phone, is_valid_password,
};

/// One rule per field, in form order
pub fn standard_rules(catalog: &MessageCatalog) -> Vec<FieldRule> {
    Field::ALL
        .into_iter()
        .map(|field| {
            let message = catalog.message(field);
            match field {
                Field::FullName => FieldRule::predicate(field, is_valid_full_name, message),
                Field::Cpf => FieldRule::predicate(field, is_valid_document, message),
                Field::Password => FieldRule::predicate(field, is_valid_password, message),
                Field::PasswordConfirmation => {
                    FieldRule::equals_field(field, Field::Password, message)
                }
                Field::Login => FieldRule::predicate(field, is_valid_login, message),
                Field::MaternalName => FieldRule::predicate(field, is_valid_maternal_name, message),
                Field::MobilePhone => FieldRule::predicate(field, is_valid_mobile_phone, message),
                Field::LandlinePhone => {
                    FieldRule::predicate(field, is_valid_landline_phone, message)
                }
                Field::Address => FieldRule::predicate(field, is_valid_address, message),
            }
        })
        .collect()
}
