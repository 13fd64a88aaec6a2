//! Parser modal: resolve a link code and rebuild the form it came from.
//!
//! ERROR HANDLING
//! ==============
//! A malformed code and a `{error}` response are user-facing and go to
//! `#parser-form-alert`. Transport/decode failures are logged only.

use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

use super::form_area::FormArea;
use super::{BUILDER_FORM_ID, FORM_ID_INPUT_ID, RESULT_AREA_ID};
use crate::form::field::FieldKind;
use crate::form::populate::{
    CollapseAction, INVALID_HASHCODE_MESSAGE, assignments, checkbox_checked, collapse_action, container_id, field_id,
    is_valid_hashcode, radio_index, radio_member_id,
};
use crate::net::ApiError;
use crate::net::api;
use crate::net::types::{ParserResponse, value_text};
use crate::util::dom::{
    blink, by_id, by_id_as, form_controls, hide_spinner, is_displayed, is_hidden, set_checked, set_visible,
    set_visible_by_ids, show_spinner, snapshot,
};
use crate::util::jquery::{hide_modal, set_select_value};
use crate::util::listener::Listener;

pub const PARSER_FORM_ID: &str = "parser-form";
pub const CODE_INPUT_ID: &str = "utm-parser-code-input";
pub const ALERT_ID: &str = "parser-form-alert";
pub const MODAL_SELECTOR: &str = "#parser-modal";

async fn show_alert(message: &str, blink_ms: u32) {
    let Some(alert) = by_id(ALERT_ID) else {
        return;
    };
    alert.set_text_content(Some(message));
    if is_hidden(&alert) {
        set_visible(&alert, true);
    } else {
        blink(&alert, blink_ms).await;
    }
}

/// Clear the builder form down to the fields the parsed data will reveal.
fn collapse_builder_form() {
    let Some(form) = by_id_as::<HtmlFormElement>(BUILDER_FORM_ID) else {
        return;
    };
    for control in form_controls(&form) {
        let Some(field) = snapshot(&control) else {
            continue;
        };
        match collapse_action(&field, is_displayed(&control)) {
            CollapseAction::Skip => {}
            CollapseAction::Uncheck => set_checked(&control, false),
            CollapseAction::HideContainer(id) => set_visible_by_ids(&[id.as_str()], false),
        }
    }
}

fn check_radio(pk: &str, value: &str) {
    let members: Vec<HtmlInputElement> = (0..)
        .map_while(|i| by_id_as::<HtmlInputElement>(&radio_member_id(pk, i)))
        .collect();
    let values: Vec<String> = members.iter().map(HtmlInputElement::value).collect();
    let target = radio_index(&values, value);
    for (i, member) in members.iter().enumerate() {
        member.set_checked(Some(i) == target);
    }
}

fn populate(form_data: &Map<String, Value>) {
    for assignment in assignments(form_data) {
        let id = field_id(&assignment.pk);
        let Some(control) = by_id(&id).or_else(|| by_id(&radio_member_id(&assignment.pk, 0))) else {
            continue;
        };
        let Some(field) = snapshot(&control) else {
            continue;
        };
        match field.kind {
            FieldKind::Text | FieldKind::Number => {
                if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
                    input.set_value(&assignment.value);
                }
            }
            FieldKind::SelectOne => set_select_value(&control, &assignment.value),
            FieldKind::Checkbox => set_checked(&control, checkbox_checked(&assignment.value)),
            FieldKind::Radio => check_radio(&assignment.pk, &assignment.value),
            _ => {}
        }
        set_visible_by_ids(&[container_id(&id).as_str()], true);
    }
}

async fn submit(area: &FormArea) -> Result<(), ApiError> {
    let Some(input) = by_id_as::<HtmlInputElement>(CODE_INPUT_ID) else {
        return Ok(());
    };
    let blink_ms = area.config().blink_ms;
    let code = input.value();
    if !is_valid_hashcode(&code) {
        show_alert(INVALID_HASHCODE_MESSAGE, blink_ms).await;
        return Ok(());
    }
    show_spinner();
    let (form_id, form_data) = match api::fetch_parser_data(&code).await? {
        ParserResponse::Error { error } => {
            show_alert(&error, blink_ms).await;
            return Ok(());
        }
        ParserResponse::Data { form_id, form_data } => (value_text(&form_id), form_data),
    };
    let mounted = by_id_as::<HtmlInputElement>(FORM_ID_INPUT_ID).map(|el| el.value());
    if mounted.as_deref() != Some(form_id.as_str()) {
        area.load(&form_id).await?;
    }
    set_visible_by_ids(&[RESULT_AREA_ID], false);
    collapse_builder_form();
    populate(&form_data);
    hide_modal(MODAL_SELECTOR);
    set_visible_by_ids(&[ALERT_ID], false);
    Ok(())
}

/// Bind `#parser-form` submit. `None` when the page has no parser modal.
pub fn init(area: &FormArea) -> Option<Listener> {
    let form = by_id(PARSER_FORM_ID)?;
    let area = area.clone();
    Some(Listener::submit(&form, move |_| {
        let area = area.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = submit(&area).await {
                log::error!("parser lookup failed: {e}");
            }
            hide_spinner();
        });
    }))
}
