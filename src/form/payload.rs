//! Client admin PATCH payload extraction.
//!
//! Checkboxes become booleans, empty number inputs become `null`, and the
//! `choices`/`values` textareas are decoded as JSON. Hidden inputs and submit
//! buttons never reach the payload.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::field::{FieldKind, FieldSnapshot};

/// Field names whose textarea content is a JSON document.
pub const JSON_FIELDS: [&str; 2] = ["choices", "values"];

pub const INVALID_JSON_MESSAGE: &str = "Некорректный JSON.";

/// Local validation errors keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractedPayload {
    pub payload: Map<String, Value>,
    pub errors: FieldErrors,
}

impl ExtractedPayload {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn decode_json_field(raw: &str) -> Result<Value, serde_json::Error> {
    let flattened: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    serde_json::from_str(&flattened)
}

/// Build the PATCH payload and any local errors from a form's controls.
pub fn extract_payload<'a>(fields: impl IntoIterator<Item = &'a FieldSnapshot>) -> ExtractedPayload {
    let mut out = ExtractedPayload::default();
    for field in fields {
        if field.name.is_empty() {
            continue;
        }
        if field.kind == FieldKind::Checkbox {
            out.payload.insert(field.name.clone(), Value::Bool(field.checked));
            continue;
        }
        if JSON_FIELDS.contains(&field.name.as_str()) {
            match decode_json_field(&field.value) {
                Ok(value) => {
                    out.payload.insert(field.name.clone(), value);
                }
                Err(_) => {
                    out.errors.insert(field.name.clone(), INVALID_JSON_MESSAGE.to_owned());
                }
            }
            continue;
        }
        let value = match field.kind {
            FieldKind::Hidden | FieldKind::Submit => continue,
            FieldKind::Radio if !field.checked => continue,
            FieldKind::Number if field.value.is_empty() => Value::Null,
            _ => Value::String(field.value.clone()),
        };
        out.payload.insert(field.name.clone(), value);
    }
    out
}
