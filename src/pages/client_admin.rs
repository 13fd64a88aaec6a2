//! Client admin pages: entity search and PATCH modals.

use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::ClientConfig;
use crate::util::jquery::{init_select2, init_tooltips};
use crate::util::listener::Listener;
use crate::widgets::{admin_patch, admin_search};

#[wasm_bindgen]
pub struct ClientAdminPage {
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
pub fn mount_client_admin_page() -> ClientAdminPage {
    let config = Rc::new(ClientConfig::load());
    config.init_logging();
    init_select2();
    init_tooltips();

    let mut listeners = admin_search::init();
    listeners.extend(admin_patch::init(&config));
    ClientAdminPage { _listeners: listeners }
}
