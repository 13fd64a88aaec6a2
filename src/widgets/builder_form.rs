//! Builder form submission: serialize, POST, splice result blocks.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use super::{BUILDER_FORM_ID, RESULT_AREA_ID};
use crate::config::ClientConfig;
use crate::net::ApiError;
use crate::net::api;
use crate::net::types::BuilderRequest;
use crate::util::dom::{by_id, by_id_as, hide_spinner, set_visible, show_spinner};
use crate::util::jquery::Clipboard;
use crate::util::listener::Listener;

pub const CLIPBOARD_SELECTOR: &str = ".btn-clipboard";

/// Clipboard binding for the most recent result blocks.
pub type ResultClipboard = Rc<RefCell<Option<Clipboard>>>;

/// String entries of the form's FormData; file entries are ignored.
fn form_entries(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(iter)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    iter.filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = entry.dyn_into::<js_sys::Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

async fn submit(form: &HtmlFormElement, config: &ClientConfig, clipboard: &ResultClipboard) -> Result<(), ApiError> {
    let request = BuilderRequest::from_entries(form_entries(form));
    let html = api::fetch_result_blocks_html(&request, config).await?;
    let Some(area) = by_id(RESULT_AREA_ID) else {
        return Ok(());
    };
    area.set_inner_html(&html);
    *clipboard.borrow_mut() = Some(Clipboard::bind(CLIPBOARD_SELECTOR));
    set_visible(&area, true);
    area.scroll_into_view();
    Ok(())
}

/// Bind `#builder-form` submit. `None` when the page has no builder form.
pub fn init(config: &Rc<ClientConfig>, clipboard: &ResultClipboard) -> Option<Listener> {
    let form = by_id_as::<HtmlFormElement>(BUILDER_FORM_ID)?;
    let config = Rc::clone(config);
    let clipboard = Rc::clone(clipboard);
    let target = form.clone();
    Some(Listener::submit(&target, move |_| {
        let form = form.clone();
        let config = Rc::clone(&config);
        let clipboard = Rc::clone(&clipboard);
        wasm_bindgen_futures::spawn_local(async move {
            show_spinner();
            if let Err(e) = submit(&form, &config, &clipboard).await {
                log::error!("result blocks request failed: {e}");
            }
            hide_spinner();
        });
    }))
}
