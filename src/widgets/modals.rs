//! Navbar highlighting while the parser or instruction modal is open.

use crate::util::jquery::JQuery;
use crate::util::listener::Listener;
use crate::util::nav::{NavTone, set_tone};

pub const FORM_SELECTOR_NAV_ID: &str = "nav-form-selector";

/// Modal selector and the nav item it highlights.
const MODAL_NAV: [(&str, &str); 2] = [("#parser-modal", "nav-parser"), ("#instruction-modal", "nav-instruction")];

pub fn init() -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(MODAL_NAV.len() * 2);
    for (modal, nav) in MODAL_NAV {
        listeners.push(Listener::jquery(JQuery::select(modal), "show.bs.modal", move || {
            set_tone(nav, NavTone::Active);
            set_tone(FORM_SELECTOR_NAV_ID, NavTone::Idle);
        }));
        listeners.push(Listener::jquery(JQuery::select(modal), "hidden.bs.modal", move || {
            set_tone(nav, NavTone::Idle);
            set_tone(FORM_SELECTOR_NAV_ID, NavTone::Active);
        }));
    }
    listeners
}
