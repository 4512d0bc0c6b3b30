pub mod cpf;
pub mod rules;
pub mod validate;
