//! Client admin entity search: picking an entry navigates to its page.

use web_sys::HtmlSelectElement;

use crate::util::dom::{by_id, by_id_as, navigate};
use crate::util::jquery::JQuery;
use crate::util::listener::Listener;

pub const SEARCH_FORM_ID: &str = "search-client-admin-form";
pub const SEARCH_SELECT_ID: &str = "search-client-admin-select";

fn selected_url(select: &HtmlSelectElement) -> Option<String> {
    let index = u32::try_from(select.selected_index()).ok()?;
    select.item(index)?.get_attribute("url")
}

pub fn init() -> Vec<Listener> {
    let mut listeners = Vec::new();
    if let Some(form) = by_id(SEARCH_FORM_ID) {
        listeners.push(Listener::submit(&form, |_| {}));
    }
    if let Some(select) = by_id_as::<HtmlSelectElement>(SEARCH_SELECT_ID) {
        let target = JQuery::wrap(&select);
        listeners.push(Listener::jquery(target, "change", move || {
            if let Some(url) = selected_url(&select) {
                navigate(&url);
            }
        }));
    }
    listeners
}
