//! Cascading select dependencies.
//!
//! A rule restricts a child select to a configured label subset while its
//! parent field holds one of the configured values, and restores the child's
//! original options otherwise. Rules arrive as JSON in the
//! `#select-dependencies-data` script rendered with the form.
//!
//! DESIGN
//! ======
//! [`DependentOptions`] owns the child's original option snapshot and only
//! reports the option set to render; the widget layer applies it to the DOM
//! and notifies Select2.

#[cfg(test)]
#[path = "deps_test.rs"]
mod deps_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::field::FieldKind;

pub const RULES_SCRIPT_ID: &str = "select-dependencies-data";

/// A configured parent → child option restriction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DependencyRule {
    /// Name attribute of the parent control(s).
    #[serde(deserialize_with = "deserialize_field_key")]
    pub parent_field: String,
    /// Child select pk; the control id is `id_<child_field>`.
    #[serde(deserialize_with = "deserialize_field_key")]
    pub child_field: String,
    /// Parent value → child option labels, in display order.
    #[serde(default)]
    pub values: BTreeMap<String, Vec<String>>,
}

impl DependencyRule {
    pub fn child_id(&self) -> String {
        format!("id_{}", self.child_field)
    }
}

/// Parse the embedded rule table.
///
/// # Errors
///
/// Returns the serde error when `raw` is not a list of rules.
pub fn parse_rules(raw: &str) -> Result<Vec<DependencyRule>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn deserialize_field_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(key) => Ok(key),
        serde_json::Value::Number(number) if number.is_u64() || number.is_i64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected field key string or integer")),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// Options the child select should display after a parent change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionsUpdate {
    Restrict(Vec<SelectOption>),
    Restore {
        options: Vec<SelectOption>,
        selected: Option<String>,
    },
}

/// How a parent control reports its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParentKind {
    /// Several controls share the name; the checked one's value applies.
    RadioGroup,
    /// Select2-enhanced select; changes arrive as jQuery `change.select2`.
    Select,
    /// Text or number input, on every `input`.
    TextInput,
    /// `"on"` / `"off"` on `change`.
    Checkbox,
}

impl ParentKind {
    /// Classify the controls named by `parent_field`. Unsupported kinds yield `None`.
    pub fn classify(count: usize, first: &FieldKind) -> Option<Self> {
        if count == 0 {
            return None;
        }
        if count > 1 {
            return Some(Self::RadioGroup);
        }
        match first {
            FieldKind::SelectOne => Some(Self::Select),
            FieldKind::Text | FieldKind::Number => Some(Self::TextInput),
            FieldKind::Checkbox => Some(Self::Checkbox),
            _ => None,
        }
    }
}

pub fn checkbox_value(checked: bool) -> &'static str {
    if checked { "on" } else { "off" }
}

/// Child select state for one rule.
#[derive(Clone, Debug)]
pub struct DependentOptions {
    values: BTreeMap<String, Vec<String>>,
    initial: Vec<SelectOption>,
    initial_selected: Option<String>,
    is_initial: bool,
}

impl DependentOptions {
    pub fn new(rule: &DependencyRule, initial: Vec<SelectOption>, initial_selected: Option<String>) -> Self {
        Self {
            values: rule.values.clone(),
            initial,
            initial_selected,
            is_initial: true,
        }
    }

    pub fn is_initial(&self) -> bool {
        self.is_initial
    }

    fn value_for_label(&self, label: &str) -> String {
        self.initial
            .iter()
            .rev()
            .find(|option| option.label == label)
            .map_or_else(|| label.to_owned(), |option| option.value.clone())
    }

    /// React to a new parent value. `None` means the child already shows its
    /// original options and nothing needs rendering.
    pub fn apply(&mut self, parent_value: &str) -> Option<OptionsUpdate> {
        if let Some(labels) = self.values.get(parent_value) {
            let options = labels
                .iter()
                .map(|label| SelectOption {
                    label: label.clone(),
                    value: self.value_for_label(label),
                })
                .collect();
            self.is_initial = false;
            return Some(OptionsUpdate::Restrict(options));
        }
        if self.is_initial {
            return None;
        }
        self.is_initial = true;
        Some(OptionsUpdate::Restore {
            options: self.initial.clone(),
            selected: self.initial_selected.clone(),
        })
    }
}
