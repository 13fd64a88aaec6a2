//! Client admin PATCH forms (one per entity modal).
//!
//! Flow per submit: clear old errors, lock the form, validate locally,
//! PATCH, then either reload on 200 or distribute the server's field errors.
//!
//! ERROR HANDLING
//! ==============
//! Local JSON errors never reach the network. Rejected payloads are split by
//! [`ErrorPlan`]; transport failures are logged and the form is unlocked.

use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

use crate::config::ClientConfig;
use crate::form::field_errors::ErrorPlan;
use crate::form::payload::extract_payload;
use crate::net::api;
use crate::net::types::PatchRoute;
use crate::util::dom::{
    SubmitSpinner, by_class, by_id, clean_form_errors, disable_form, document, enable_form, form_snapshots, has_field,
    reload, set_invalid_field, set_visible, sleep,
};
use crate::util::jquery::hide_modal;
use crate::util::listener::Listener;

pub const ENTITY_ATTR: &str = "entityId";

fn alert_id(entity_id: &str) -> String {
    format!("patch-{entity_id}-modal-alert")
}

fn modal_selector(entity_id: &str) -> String {
    format!("#patch-{entity_id}-modal")
}

fn submit_button_id(form_id: &str) -> String {
    format!("{form_id}-submit-button")
}

/// Replace the alert body with `messages` separated by `<hr>`.
fn fill_alert(alert: &Element, messages: &[String]) {
    let Some(doc) = document() else {
        return;
    };
    alert.set_text_content(None);
    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            if let Ok(hr) = doc.create_element("hr") {
                let _ = alert.append_with_node_1(&hr);
            }
        }
        let _ = alert.append_with_str_1(message);
    }
}

fn show_server_errors(form_id: &str, data: &Value, alert: Option<&Element>) {
    let plan = ErrorPlan::from_response(data, |field| has_field(form_id, field));
    for inline in &plan.inline {
        set_invalid_field(form_id, &inline.field, &inline.messages);
    }
    if plan.shows_alert() {
        if let Some(alert) = alert {
            fill_alert(alert, &plan.alert);
            set_visible(alert, true);
        }
    }
}

async fn submit(form: HtmlFormElement, route: PatchRoute, config: Rc<ClientConfig>) {
    let Some(entity_id) = form.get_attribute(ENTITY_ATTR) else {
        log::warn!("patch form `{}` has no {ENTITY_ATTR}", form.id());
        return;
    };
    let form_id = form.id();
    let alert = by_id(&alert_id(&entity_id));
    let Some(button) = by_id(&submit_button_id(&form_id)) else {
        return;
    };

    clean_form_errors(&form);
    if let Some(alert) = &alert {
        set_visible(alert, false);
    }
    disable_form(&form);
    let spinner = SubmitSpinner::start(button);

    let extracted = extract_payload(&form_snapshots(&form));
    if !extracted.is_valid() {
        sleep(config.validation_delay_ms).await;
        for (field, message) in &extracted.errors {
            set_invalid_field(&form_id, field, std::slice::from_ref(message));
        }
        spinner.stop();
        enable_form(&form);
        return;
    }

    match api::patch_client_admin(&extracted.payload, &entity_id, route, &config).await {
        Ok(outcome) if outcome.is_success() => {
            log::debug!("{} {entity_id} patched", route.path_segment());
            hide_modal(&modal_selector(&entity_id));
            reload();
            return;
        }
        Ok(outcome) => {
            log::debug!(
                "{} {entity_id} rejected with {}",
                route.path_segment(),
                outcome.status_code
            );
            show_server_errors(&form_id, &outcome.data, alert.as_ref());
        }
        Err(e) => log::error!("{} {entity_id} patch failed: {e}", route.path_segment()),
    }
    spinner.stop();
    enable_form(&form);
}

/// Bind every `<kind>-patch-form` on the page.
pub fn init(config: &Rc<ClientConfig>) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for route in PatchRoute::ALL {
        for el in by_class(&route.form_class()) {
            let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
                continue;
            };
            let config = Rc::clone(config);
            let target = form.clone();
            listeners.push(Listener::submit(&target, move |_| {
                wasm_bindgen_futures::spawn_local(submit(form.clone(), route, Rc::clone(&config)));
            }));
        }
    }
    listeners
}
