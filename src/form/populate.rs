//! Planning for parser-driven form repopulation.
//!
//! When a link code resolves, the builder form is first collapsed (every
//! visible field container hidden, every checkbox cleared) and then the
//! fields present in the parsed data are filled and revealed again.

#[cfg(test)]
#[path = "populate_test.rs"]
mod populate_test;

use serde_json::{Map, Value};

use super::field::{FieldKind, FieldSnapshot};
use crate::net::types::value_text;

/// Length of a link code accepted by the parser endpoint.
pub const HASHCODE_LEN: usize = 8;

pub const INVALID_HASHCODE_MESSAGE: &str = "Неверный код.";

const CUSTOM_PREFIX: &str = "custom-";

/// Length is measured in UTF-16 units, as the browser input reports it.
pub fn is_valid_hashcode(code: &str) -> bool {
    code.encode_utf16().count() == HASHCODE_LEN
}

/// Control id for field `pk`. Radio groups use `<id>_0`, `<id>_1`, ...
pub fn field_id(pk: &str) -> String {
    format!("id_{pk}")
}

/// Wrapper div of a control with id `control_id`.
pub fn container_id(control_id: &str) -> String {
    format!("div_{control_id}")
}

pub fn radio_member_id(pk: &str, index: usize) -> String {
    format!("id_{pk}_{index}")
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldAssignment {
    pub pk: String,
    pub value: String,
}

/// Canonical array index: decimal, no leading zero, below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

/// Values to write back into the form. Empty `custom-*` companions are skipped.
///
/// Numeric pks come first in ascending order, then the remaining keys in
/// response order, the order a browser walks the object in. A parent with a
/// lower pk is set before its dependent child, so its change event cannot
/// restrict away the child's parsed value.
pub fn assignments(form_data: &Map<String, Value>) -> Vec<FieldAssignment> {
    let mut entries: Vec<(&String, &Value)> = form_data
        .iter()
        .filter(|(pk, value)| !(pk.starts_with(CUSTOM_PREFIX) && is_falsy(value)))
        .collect();
    entries.sort_by_key(|(pk, _)| array_index(pk).map_or((1, 0), |n| (0, n)));
    entries
        .into_iter()
        .map(|(pk, value)| FieldAssignment {
            pk: pk.clone(),
            value: value_text(value),
        })
        .collect()
}

/// Checkbox state encoded by a submitted value.
pub fn checkbox_checked(value: &str) -> bool {
    value == "on"
}

/// Index of the radio whose value matches, in group order.
pub fn radio_index<S: AsRef<str>>(values: &[S], target: &str) -> Option<usize> {
    values.iter().position(|v| v.as_ref() == target)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollapseAction {
    Skip,
    Uncheck,
    HideContainer(String),
}

/// How to collapse one control before repopulating. `displayed` is false for
/// controls already out of layout.
///
/// Checkboxes are cleared rather than hidden: an unchecked box is absent from
/// FormData, so a hidden one could never reappear after parsing.
pub fn collapse_action(field: &FieldSnapshot, displayed: bool) -> CollapseAction {
    if !displayed {
        return CollapseAction::Skip;
    }
    match field.kind {
        FieldKind::Submit => CollapseAction::Skip,
        FieldKind::Checkbox => CollapseAction::Uncheck,
        FieldKind::Radio => CollapseAction::HideContainer(container_id(&field_id(&field.name))),
        _ if field.id.is_empty() => CollapseAction::Skip,
        _ => CollapseAction::HideContainer(container_id(&field.id)),
    }
}
