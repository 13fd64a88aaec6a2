//! Bindings to the page's jQuery plugins: Select2, Bootstrap tooltips and
//! modals, and ClipboardJS.
//!
//! SYSTEM CONTEXT
//! ==============
//! Select2 and Bootstrap dispatch their events through jQuery (`change.select2`,
//! `show.bs.modal`), which native `addEventListener` never sees, so listeners
//! on those events go through [`JQuery::on`] / [`JQuery::off`].

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// A jQuery collection.
    #[wasm_bindgen(js_name = jQuery)]
    pub type JQuery;

    #[wasm_bindgen(js_name = jQuery)]
    fn jquery_selector(selector: &str) -> JQuery;

    #[wasm_bindgen(js_name = jQuery)]
    fn jquery_element(element: &Element) -> JQuery;

    #[wasm_bindgen(method)]
    fn select2(this: &JQuery, options: &JsValue) -> JQuery;

    #[wasm_bindgen(method)]
    fn tooltip(this: &JQuery) -> JQuery;

    #[wasm_bindgen(method)]
    fn modal(this: &JQuery, action: &str) -> JQuery;

    #[wasm_bindgen(method)]
    pub fn on(this: &JQuery, events: &str, handler: &Function) -> JQuery;

    #[wasm_bindgen(method)]
    pub fn off(this: &JQuery, events: &str, handler: &Function) -> JQuery;

    #[wasm_bindgen(method)]
    fn trigger(this: &JQuery, event: &str) -> JQuery;

    #[wasm_bindgen(method, js_name = val)]
    fn set_val(this: &JQuery, value: &str) -> JQuery;

    /// Clipboard copy handler bound to a selector.
    #[wasm_bindgen(js_name = ClipboardJS)]
    pub type ClipboardJs;

    #[wasm_bindgen(constructor, js_class = "ClipboardJS")]
    fn new(selector: &str) -> ClipboardJs;

    #[wasm_bindgen(method)]
    fn destroy(this: &ClipboardJs);
}

impl JQuery {
    pub fn select(selector: &str) -> Self {
        jquery_selector(selector)
    }

    pub fn wrap(element: &Element) -> Self {
        jquery_element(element)
    }
}

fn select2_options(no_search: bool) -> JsValue {
    let options = Object::new();
    let _ = Reflect::set(&options, &"theme".into(), &"bootstrap4".into());
    let _ = Reflect::set(&options, &"language".into(), &"ru".into());
    if no_search {
        let _ = Reflect::set(&options, &"minimumResultsForSearch".into(), &f64::INFINITY.into());
    }
    options.into()
}

/// Enhance `.form-select2` and `.form-select2-no-search` selects.
pub fn init_select2() {
    JQuery::select(".form-select2").select2(&select2_options(false));
    JQuery::select(".form-select2-no-search").select2(&select2_options(true));
}

pub fn init_tooltips() {
    JQuery::select("[data-toggle=\"tooltip\"]").tooltip();
}

pub fn hide_modal(selector: &str) {
    JQuery::select(selector).modal("hide");
}

/// Tell Select2 the underlying options changed without firing app handlers.
pub fn refresh_select2(element: &Element) {
    JQuery::wrap(element).trigger("change.select2");
}

/// Set a select's value and fire `change` so dependent handlers run.
pub fn set_select_value(element: &Element, value: &str) {
    JQuery::wrap(element).set_val(value).trigger("change");
}

/// Owned ClipboardJS instance; destroyed on drop.
pub struct Clipboard(ClipboardJs);

impl Clipboard {
    pub fn bind(selector: &str) -> Self {
        Self(ClipboardJs::new(selector))
    }
}

impl Drop for Clipboard {
    fn drop(&mut self) {
        self.0.destroy();
    }
}
