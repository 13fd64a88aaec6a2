//! Placement of server-side validation errors onto a PATCH form.
//!
//! DRF answers a rejected PATCH with `{field: "msg" | ["msg", ...]}`. Fields
//! that have a matching control get inline `is-invalid` feedback; the rest
//! are aggregated into the modal alert.

#[cfg(test)]
#[path = "field_errors_test.rs"]
mod field_errors_test;

use serde_json::Value;

use crate::net::types::value_text;

pub const INVALID_CLASS: &str = "is-invalid";
pub const FEEDBACK_CLASS: &str = "invalid-feedback";

/// Id of the control that receives errors for `field` in form `form_id`.
pub fn field_element_id(form_id: &str, field: &str) -> String {
    format!("{form_id}-{field}")
}

/// Class tagging every feedback node created for `form_id`, so they can be cleared.
pub fn error_div_class(form_id: &str) -> String {
    format!("{form_id}-error-div")
}

/// Flatten one field's error entry into display strings.
pub fn messages_of(errors: &Value) -> Vec<String> {
    match errors {
        Value::Array(items) => items.iter().map(value_text).collect(),
        other => vec![value_text(other)],
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineErrors {
    pub field: String,
    pub messages: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorPlan {
    pub inline: Vec<InlineErrors>,
    /// Messages without a matching control, in response order.
    pub alert: Vec<String>,
}

impl ErrorPlan {
    /// Split a rejected PATCH body between inline fields and the alert.
    ///
    /// `has_field` reports whether the form holds a control for a field name.
    pub fn from_response(data: &Value, has_field: impl Fn(&str) -> bool) -> Self {
        let mut plan = Self::default();
        match data {
            Value::Object(fields) => {
                for (field, errors) in fields {
                    let messages = messages_of(errors);
                    if has_field(field) {
                        plan.inline.push(InlineErrors {
                            field: field.clone(),
                            messages,
                        });
                    } else {
                        plan.alert.extend(messages);
                    }
                }
            }
            Value::Null => {}
            other => plan.alert.extend(messages_of(other)),
        }
        plan
    }

    pub fn shows_alert(&self) -> bool {
        !self.alert.is_empty()
    }
}
