//! Custom-value companions: a free-text input shown only while its parent
//! field selects the "enter your own value" choice.

#[cfg(test)]
#[path = "custom_values_test.rs"]
mod custom_values_test;

pub const CONTAINER_PREFIX: &str = "div_id_custom-";

/// Parent choice value that reveals the companion input.
pub const SENTINEL_VALUE: &str = "custom-value-input-field";

/// Parent control id for a companion container, e.g. `div_id_custom-10` → `id_10`.
pub fn parent_field_id(container_id: &str) -> Option<String> {
    container_id
        .strip_prefix(CONTAINER_PREFIX)
        .map(|pk| format!("id_{pk}"))
}

/// Selector for the radio members `<parent_id>_0`, `<parent_id>_1`, ...
///
/// The trailing `_` keeps field `id_1` from matching `id_10_0`.
pub fn radio_members_selector(parent_id: &str) -> String {
    format!("[id^=\"{parent_id}_\"]")
}

pub fn reveals_custom_input(parent_value: &str) -> bool {
    parent_value == SENTINEL_VALUE
}
