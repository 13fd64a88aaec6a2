//! Builder form serialization for `POST /core/api/result_blocks_html`.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::net::types::BuilderRequest;

/// FormData keys never forwarded as field values.
pub const SKIPPED_ENTRIES: [&str; 2] = ["csrfmiddlewaretoken", "build"];

pub const FORM_ID_ENTRY: &str = "form_id";

fn form_id_value(raw: &str) -> Value {
    raw.parse::<u64>().map_or_else(|_| Value::String(raw.to_owned()), Value::from)
}

impl BuilderRequest {
    /// Collect FormData entries. Later duplicates win, as with a plain object.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form_id = Value::from(0);
        let mut form_data = BTreeMap::new();
        for (name, value) in entries {
            let (name, value) = (name.as_ref(), value.as_ref());
            if name == FORM_ID_ENTRY {
                form_id = form_id_value(value);
            } else if !SKIPPED_ENTRIES.contains(&name) {
                form_data.insert(name.to_owned(), value.to_owned());
            }
        }
        Self { form_id, form_data }
    }
}
