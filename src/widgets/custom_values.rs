//! Show/hide custom-value companion inputs.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::form::custom_values::{CONTAINER_PREFIX, parent_field_id, radio_members_selector, reveals_custom_input};
use crate::util::dom::{by_id, query_all, set_visible, snapshot};
use crate::util::jquery::JQuery;
use crate::util::listener::Listener;

/// Registrations for every companion container in the current document.
pub struct CustomValues {
    _listeners: Vec<Listener>,
}

pub fn init() -> CustomValues {
    let mut listeners = Vec::new();
    for container in query_all(&format!("[id^=\"{CONTAINER_PREFIX}\"]")) {
        set_visible(&container, false);
        let Some(parent_id) = parent_field_id(&container.id()) else {
            continue;
        };
        match by_id(&parent_id) {
            Some(parent) => listeners.push(bind_single(parent, container)),
            None => listeners.extend(bind_radios(&parent_id, &container)),
        }
    }
    CustomValues { _listeners: listeners }
}

// Select2 re-dispatches `input` through jQuery, so this listens there.
fn bind_single(parent: Element, container: Element) -> Listener {
    let target = JQuery::wrap(&parent);
    Listener::jquery(target, "input", move || {
        let value = snapshot(&parent).map(|s| s.value).unwrap_or_default();
        set_visible(&container, reveals_custom_input(&value));
    })
}

fn bind_radios(parent_id: &str, container: &Element) -> Vec<Listener> {
    query_all(&radio_members_selector(parent_id))
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|radio| {
            let container = container.clone();
            let target = radio.clone();
            Listener::dom(&target, "change", move |_| {
                if radio.checked() {
                    set_visible(&container, reveals_custom_input(&radio.value()));
                }
            })
        })
        .collect()
}
