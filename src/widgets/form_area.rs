//! `#form-area`: the currently mounted builder form and its widget handles.
//!
//! DESIGN
//! ======
//! Selector clicks and parser lookups both replace the form markup. They
//! share one [`FormArea`] so the previous form's listeners are dropped before
//! the new markup is wired.

use std::cell::RefCell;
use std::rc::Rc;

use super::builder_form::{self, ResultClipboard};
use super::{FORM_AREA_ID, MAIN_CONTAINER_ID, RESULT_AREA_ID, custom_values, select_deps};
use crate::config::ClientConfig;
use crate::net::ApiError;
use crate::net::api;
use crate::util::dom::{by_class, by_id, hide_spinner, set_visible_by_ids, show_spinner};
use crate::util::jquery::{init_select2, init_tooltips};
use crate::util::listener::Listener;

pub const FORM_CHOICE_CLASS: &str = "form-selector-choice";
pub const FORM_CHOICE_ATTR: &str = "formId";

/// Widgets bound to one revision of the form markup.
struct FormWidgets {
    _custom_values: custom_values::CustomValues,
    _dependencies: select_deps::SelectDependencies,
    _submit: Option<Listener>,
}

impl FormWidgets {
    fn init(config: &Rc<ClientConfig>, clipboard: &ResultClipboard) -> Self {
        Self {
            _custom_values: custom_values::init(),
            _dependencies: select_deps::init(),
            _submit: builder_form::init(config, clipboard),
        }
    }
}

#[derive(Clone)]
pub struct FormArea {
    config: Rc<ClientConfig>,
    clipboard: ResultClipboard,
    widgets: Rc<RefCell<Option<FormWidgets>>>,
}

impl FormArea {
    /// Wire the server-rendered initial form and reveal the page.
    pub fn mount(config: Rc<ClientConfig>) -> Self {
        show_spinner();
        let clipboard = ResultClipboard::default();
        let widgets = FormWidgets::init(&config, &clipboard);
        set_visible_by_ids(&[MAIN_CONTAINER_ID], true);
        hide_spinner();
        Self {
            config,
            clipboard,
            widgets: Rc::new(RefCell::new(Some(widgets))),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch form `form_id`, replace the markup and rebind every form widget.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the form markup request; the current form
    /// stays mounted in that case.
    pub async fn load(&self, form_id: &str) -> Result<(), ApiError> {
        let html = api::fetch_form_html(form_id).await?;
        let Some(area) = by_id(FORM_AREA_ID) else {
            return Ok(());
        };
        drop(self.widgets.borrow_mut().take());
        area.set_inner_html(&html);
        init_select2();
        mark_current_choice(form_id);
        init_tooltips();
        let widgets = FormWidgets::init(&self.config, &self.clipboard);
        set_visible_by_ids(&[RESULT_AREA_ID], false);
        *self.widgets.borrow_mut() = Some(widgets);
        log::debug!("form {form_id} mounted");
        Ok(())
    }
}

fn mark_current_choice(form_id: &str) {
    for choice in by_class(FORM_CHOICE_CLASS) {
        let classes = choice.class_list();
        if choice.get_attribute(FORM_CHOICE_ATTR).as_deref() == Some(form_id) {
            let _ = classes.add_1("disabled");
        } else {
            let _ = classes.remove_1("disabled");
        }
    }
}
