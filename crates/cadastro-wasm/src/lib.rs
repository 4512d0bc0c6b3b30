//! cadastro WASM
//!
//! WebAssembly bindings for the registration form.
//! The browser runs the same rules as the server before letting a submission through.

use cadastro_validation::{self as core, Field, FormValues, RegistryError, RuleEngine};
use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Built once; `validateField` runs on every keystroke
static ENGINE: Lazy<Result<RuleEngine, RegistryError>> = Lazy::new(RuleEngine::standard);

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate the whole form
///
/// # Arguments
/// * `values` - JavaScript object mapping field keys to their current values
///
/// # Returns
/// `{ isValid, results: [{ field, isValid, message }] }`, one result per field
///
/// # Example (JavaScript)
/// ```javascript
/// form.addEventListener('submit', event => {
///     event.preventDefault();
///     const outcome = evaluate({
///         full_name: form.full_name.value,
///         cpf: form.cpf.value,
///         // ...
///     });
///     for (const result of outcome.results) {
///         showError(result.field, result.message);
///     }
/// });
/// ```
#[wasm_bindgen]
pub fn evaluate(values: JsValue) -> Result<JsValue, JsValue> {
    let values = parse_values(values)?;
    let outcome = engine()?.evaluate(&values);
    to_js(&outcome)
}

/// Validate one field, for feedback while the user types
///
/// `values` carries the whole form so that the password confirmation can be
/// compared against the current password.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let field: Field = field
        .parse()
        .map_err(|e: core::UnknownField| JsValue::from_str(&e.to_string()))?;
    let values = parse_values(values)?;

    match engine()?.validate_field(field, &values) {
        Some(result) => to_js(&result),
        None => Ok(JsValue::NULL),
    }
}

/// Quick CPF check
#[wasm_bindgen(js_name = isValidDocument)]
pub fn is_valid_document_js(raw: &str) -> bool {
    core::is_valid_document(raw)
}

/// Append check digits to a nine-digit CPF base
#[wasm_bindgen(js_name = completeDocument)]
pub fn complete_document_js(base: &str) -> Option<String> {
    core::complete_document(base)
}

fn engine() -> Result<&'static RuleEngine, JsValue> {
    ENGINE
        .as_ref()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_values(values: JsValue) -> Result<FormValues, JsValue> {
    serde_wasm_bindgen::from_value(values).map_err(|e| {
        let message = format!("Failed to parse form values: {}", e);
        web_sys::console::warn_1(&JsValue::from_str(&message));
        JsValue::from_str(&message)
    })
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
