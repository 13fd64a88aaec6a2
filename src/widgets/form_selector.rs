//! Navbar form choices: clicking one swaps the mounted builder form.

use super::form_area::{FORM_CHOICE_ATTR, FORM_CHOICE_CLASS, FormArea};
use crate::util::dom::{by_class, hide_spinner, show_spinner};
use crate::util::listener::Listener;

pub fn init(area: &FormArea) -> Vec<Listener> {
    by_class(FORM_CHOICE_CLASS)
        .into_iter()
        .filter_map(|choice| {
            let form_id = choice.get_attribute(FORM_CHOICE_ATTR)?;
            let area = area.clone();
            Some(Listener::dom(&choice, "click", move |_| {
                let area = area.clone();
                let form_id = form_id.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    show_spinner();
                    if let Err(e) = area.load(&form_id).await {
                        log::error!("form {form_id} request failed: {e}");
                    }
                    hide_spinner();
                });
            }))
        })
        .collect()
}
