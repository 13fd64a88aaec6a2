//! web-sys helpers for the server-rendered page.
//!
//! ERROR HANDLING
//! ==============
//! Lookups return `Option` and mutations discard their `Result`: a missing or
//! unexpected element is a deliberate no-op, never a panic.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::form::field::{FieldKind, FieldSnapshot};
use crate::form::field_errors::{FEEDBACK_CLASS, INVALID_CLASS, error_div_class, field_element_id};

pub const SPINNER_ID: &str = "spinner-lock";

const BUTTON_SPINNER_HTML: &str = "<div class=\"spinner-border text-light spinner-border-sm\" role=\"status\">\
     <span class=\"sr-only\">Loading...</span></div>";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn by_id_as<T: JsCast>(id: &str) -> Option<T> {
    by_id(id)?.dyn_into::<T>().ok()
}

fn node_list_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn by_class(class: &str) -> Vec<Element> {
    let Some(collection) = document().map(|doc| doc.get_elements_by_class_name(class)) else {
        return Vec::new();
    };
    // Collect first: the collection is live.
    (0..collection.length()).filter_map(|i| collection.item(i)).collect()
}

pub fn by_name(name: &str) -> Vec<Element> {
    document()
        .map(|doc| node_list_elements(&doc.get_elements_by_name(name)))
        .unwrap_or_default()
}

pub fn set_visible(el: &Element, visible: bool) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        el.set_hidden(!visible);
    }
}

pub fn is_hidden(el: &Element) -> bool {
    el.dyn_ref::<HtmlElement>().is_some_and(HtmlElement::hidden)
}

pub fn set_visible_by_ids(ids: &[&str], visible: bool) {
    for id in ids {
        if let Some(el) = by_id(id) {
            set_visible(&el, visible);
        }
    }
}

/// Whether the element occupies layout, in the jQuery `:visible` sense.
pub fn is_displayed(el: &Element) -> bool {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return false;
    };
    html.offset_width() > 0 || html.offset_height() > 0 || el.get_client_rects().length() > 0
}

fn set_spinner_visibility(value: &str) {
    if let Some(spinner) = by_id_as::<HtmlElement>(SPINNER_ID) {
        let _ = spinner.style().set_property("visibility", value);
    }
}

pub fn show_spinner() {
    set_spinner_visibility("visible");
}

pub fn hide_spinner() {
    set_spinner_visibility("hidden");
}

pub async fn sleep(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Hide, wait `ms`, show again.
pub async fn blink(el: &Element, ms: u32) {
    set_visible(el, false);
    sleep(ms).await;
    set_visible(el, true);
}

pub fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

pub fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

pub fn form_controls(form: &HtmlFormElement) -> Vec<Element> {
    let elements = form.elements();
    (0..elements.length()).filter_map(|i| elements.item(i)).collect()
}

/// Detach a control's state into a [`FieldSnapshot`]. Non-control elements yield `None`.
pub fn snapshot(el: &Element) -> Option<FieldSnapshot> {
    let (ty, name, value, checked) = if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        (input.type_(), input.name(), input.value(), input.checked())
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        (select.type_(), select.name(), select.value(), false)
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        (area.type_(), area.name(), area.value(), false)
    } else if let Some(button) = el.dyn_ref::<web_sys::HtmlButtonElement>() {
        (button.type_(), button.name(), button.value(), false)
    } else {
        return None;
    };
    Some(FieldSnapshot {
        id: el.id(),
        name,
        kind: FieldKind::from_type(&ty),
        value,
        checked,
    })
}

pub fn form_snapshots(form: &HtmlFormElement) -> Vec<FieldSnapshot> {
    form_controls(form).iter().filter_map(snapshot).collect()
}

pub fn set_checked(el: &Element, checked: bool) {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_checked(checked);
    }
}

pub fn disable_form(form: &HtmlFormElement) {
    for control in form_controls(form) {
        let _ = control.set_attribute("disabled", "disabled");
    }
}

pub fn enable_form(form: &HtmlFormElement) {
    for control in form_controls(form) {
        let _ = control.remove_attribute("disabled");
    }
}

/// Spinner markup inside a submit button, restoring its text on [`SubmitSpinner::stop`].
pub struct SubmitSpinner {
    button: Element,
    text: String,
}

impl SubmitSpinner {
    pub fn start(button: Element) -> Self {
        let text = button.text_content().unwrap_or_default();
        button.set_inner_html(BUTTON_SPINNER_HTML);
        Self { button, text }
    }

    pub fn stop(self) {
        self.button.set_text_content(Some(&self.text));
    }
}

/// Mark `<form_id>-<field>` invalid with one feedback node per message.
/// Returns `false` when the form has no such control.
pub fn set_invalid_field(form_id: &str, field: &str, messages: &[String]) -> bool {
    let Some(doc) = document() else {
        return false;
    };
    let Some(control) = doc.get_element_by_id(&field_element_id(form_id, field)) else {
        return false;
    };
    let _ = control.class_list().add_1(INVALID_CLASS);
    let div_class = error_div_class(form_id);
    // Insert in reverse so the messages read top-down after the control.
    for message in messages.iter().rev() {
        let Ok(div) = doc.create_element("div") else {
            continue;
        };
        let _ = div.class_list().add_2(FEEDBACK_CLASS, &div_class);
        div.set_text_content(Some(message));
        let _ = control.insert_adjacent_element("afterend", &div);
    }
    true
}

pub fn has_field(form_id: &str, field: &str) -> bool {
    by_id(&field_element_id(form_id, field)).is_some()
}

/// Drop every `is-invalid` marker and feedback node a previous submit left.
pub fn clean_form_errors(form: &HtmlFormElement) {
    let form_id = form.id();
    for control in form_controls(form) {
        let _ = control.class_list().remove_1(INVALID_CLASS);
    }
    for div in query_all(&format!(".{}", error_div_class(&form_id))) {
        div.remove();
    }
}
