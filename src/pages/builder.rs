//! UTM builder page: form selector, builder form, parser modal.

use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::ClientConfig;
use crate::util::jquery::{init_select2, init_tooltips};
use crate::util::listener::Listener;
use crate::widgets::form_area::FormArea;
use crate::widgets::{form_selector, modals, parser};

#[wasm_bindgen]
pub struct BuilderPage {
    _area: FormArea,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
pub fn mount_builder_page() -> BuilderPage {
    let config = Rc::new(ClientConfig::load());
    config.init_logging();
    init_select2();
    init_tooltips();

    let area = FormArea::mount(config);
    let mut listeners = form_selector::init(&area);
    listeners.extend(parser::init(&area));
    listeners.extend(modals::init());
    log::debug!("builder page mounted with {} page listeners", listeners.len());

    BuilderPage {
        _area: area,
        _listeners: listeners,
    }
}
