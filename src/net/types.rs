//! Wire DTOs for the builder, parser and client admin endpoints.
//!
//! DESIGN
//! ======
//! Payloads mirror what the Django views read and return; field maps stay as
//! `serde_json` values because form schemas are configured per client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message shown when the parser endpoint answers HTTP 500.
pub const PARSER_UNAVAILABLE_MESSAGE: &str = "Сервис временно недоступен 😔";

/// Body of `POST /core/api/result_blocks_html`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuilderRequest {
    /// Form primary key; an integer whenever the hidden input holds one.
    pub form_id: Value,
    /// Flat field name to submitted value mapping.
    pub form_data: BTreeMap<String, String>,
}

/// Response of `GET /core/api/parser`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParserResponse {
    /// User-facing failure text.
    Error { error: String },
    /// Form that produced the link, and the values it was built from.
    Data { form_id: Value, form_data: Map<String, Value> },
}

impl ParserResponse {
    pub fn unavailable() -> Self {
        Self::Error {
            error: PARSER_UNAVAILABLE_MESSAGE.to_owned(),
        }
    }
}

/// Render a JSON scalar the way the DOM would stringify it.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Result of a client admin PATCH: status plus decoded body.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchOutcome {
    pub status_code: u16,
    pub data: Value,
}

impl PatchOutcome {
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

/// Client admin entity kinds editable through a PATCH form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchRoute {
    InputText,
    InputInt,
    Checkbox,
    RadioButton,
    Select,
    SelectDeps,
}

impl PatchRoute {
    pub const ALL: [Self; 6] = [
        Self::InputText,
        Self::InputInt,
        Self::Checkbox,
        Self::RadioButton,
        Self::Select,
        Self::SelectDeps,
    ];

    /// Class prefix of the forms bound to this route.
    pub fn form_prefix(self) -> &'static str {
        match self {
            Self::InputText => "input-text",
            Self::InputInt => "input-int",
            Self::Checkbox => "checkbox",
            Self::RadioButton => "radio-button",
            Self::Select => "select",
            Self::SelectDeps => "select-deps",
        }
    }

    /// Router segment under `/settings/api/v1/`.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::RadioButton => "radiobutton",
            other => other.form_prefix(),
        }
    }

    pub fn form_class(self) -> String {
        format!("{}-patch-form", self.form_prefix())
    }

    pub fn endpoint(self, entity_id: &str) -> String {
        format!("/settings/api/v1/{}/{entity_id}/", self.path_segment())
    }
}
