//! Event registrations that unregister themselves on drop.
//!
//! DESIGN
//! ======
//! Widgets return these inside their handles; dropping a handle (for example
//! when `#form-area` is replaced) detaches every callback it installed, so
//! re-initialization never stacks duplicate handlers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

use super::jquery::JQuery;

enum Target {
    Dom(EventTarget),
    JQuery(JQuery),
}

pub struct Listener {
    target: Target,
    event: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl Listener {
    /// `addEventListener(event, f)` on a DOM target.
    pub fn dom(target: &EventTarget, event: &'static str, mut f: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::wrap(Box::new(move |e: JsValue| f(e.unchecked_into::<Event>())) as Box<dyn FnMut(JsValue)>);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: Target::Dom(target.clone()),
            event,
            callback,
        }
    }

    /// Submit listener that always suppresses the browser's own navigation.
    pub fn submit(target: &EventTarget, mut f: impl FnMut(Event) + 'static) -> Self {
        Self::dom(target, "submit", move |e: Event| {
            e.prevent_default();
            f(e);
        })
    }

    /// jQuery `.on(event, f)`; required for Select2 and Bootstrap events.
    pub fn jquery(target: JQuery, event: &'static str, mut f: impl FnMut() + 'static) -> Self {
        let callback = Closure::wrap(Box::new(move |_e: JsValue| f()) as Box<dyn FnMut(JsValue)>);
        target.on(event, callback.as_ref().unchecked_ref());
        Self {
            target: Target::JQuery(target),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let handler: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        match &self.target {
            Target::Dom(target) => {
                let _ = target.remove_event_listener_with_callback(self.event, handler);
            }
            Target::JQuery(target) => {
                target.off(self.event, handler);
            }
        }
    }
}
