//! Cascading dependent selects wired from the embedded rule table.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::form::deps::{
    DependencyRule, DependentOptions, OptionsUpdate, ParentKind, RULES_SCRIPT_ID, SelectOption, checkbox_value,
    parse_rules,
};
use crate::util::dom::{by_id, by_id_as, by_name, snapshot};
use crate::util::jquery::{JQuery, refresh_select2};
use crate::util::listener::Listener;

pub struct SelectDependencies {
    _listeners: Vec<Listener>,
}

pub fn init() -> SelectDependencies {
    let mut listeners = Vec::new();
    let Some(raw) = by_id(RULES_SCRIPT_ID).and_then(|el| el.text_content()) else {
        return SelectDependencies { _listeners: listeners };
    };
    match parse_rules(&raw) {
        Ok(rules) => {
            for rule in &rules {
                match bind_rule(rule) {
                    Some(bound) => listeners.extend(bound),
                    None => log::warn!(
                        "select dependency {} -> {} skipped: fields not found",
                        rule.parent_field,
                        rule.child_field
                    ),
                }
            }
        }
        Err(e) => log::warn!("select dependency rules unreadable: {e}"),
    }
    SelectDependencies { _listeners: listeners }
}

fn snapshot_options(child: &HtmlSelectElement) -> (Vec<SelectOption>, Option<String>) {
    let mut options = Vec::new();
    let mut selected = None;
    for option in (0..child.length())
        .filter_map(|i| child.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
    {
        if option.selected() {
            selected = Some(option.value());
        }
        options.push(SelectOption {
            label: option.text(),
            value: option.value(),
        });
    }
    (options, selected)
}

fn render(child: &HtmlSelectElement, update: OptionsUpdate) {
    let (options, selected) = match update {
        OptionsUpdate::Restrict(options) => (options, None),
        OptionsUpdate::Restore { options, selected } => (options, selected),
    };
    child.set_length(0);
    for option in &options {
        if let Ok(el) = HtmlOptionElement::new_with_text_and_value(&option.label, &option.value) {
            let _ = child.add_with_html_option_element(&el);
        }
    }
    if let Some(value) = selected {
        child.set_value(&value);
    }
    refresh_select2(child);
}

fn bind_rule(rule: &DependencyRule) -> Option<Vec<Listener>> {
    let child = by_id_as::<HtmlSelectElement>(&rule.child_id())?;
    let parents = by_name(&rule.parent_field);
    let first = parents.first().and_then(snapshot)?;
    let kind = ParentKind::classify(parents.len(), &first.kind)?;

    let (initial, selected) = snapshot_options(&child);
    let state = Rc::new(RefCell::new(DependentOptions::new(rule, initial, selected)));
    let apply: Rc<dyn Fn(&str)> = Rc::new(move |value: &str| {
        // Release the borrow before render: Select2 notifications can re-enter.
        let update = state.borrow_mut().apply(value);
        if let Some(update) = update {
            render(&child, update);
        }
    });

    let listeners: Vec<Listener> = match kind {
        ParentKind::RadioGroup => parents
            .iter()
            .filter_map(|el| el.clone().dyn_into::<HtmlInputElement>().ok())
            .map(|radio| {
                let apply = Rc::clone(&apply);
                let target = JQuery::wrap(&radio);
                Listener::jquery(target, "change", move || {
                    if radio.checked() {
                        apply(&radio.value());
                    }
                })
            })
            .collect(),
        ParentKind::Select => {
            let parent = parents.into_iter().next()?;
            apply(&current_value(&parent));
            vec![Listener::jquery(JQuery::wrap(&parent), "change.select2", {
                let apply = Rc::clone(&apply);
                move || apply(&current_value(&parent))
            })]
        }
        ParentKind::TextInput => {
            let parent = parents.into_iter().next()?;
            apply(&current_value(&parent));
            vec![Listener::jquery(JQuery::wrap(&parent), "input", {
                let apply = Rc::clone(&apply);
                move || apply(&current_value(&parent))
            })]
        }
        ParentKind::Checkbox => {
            let parent = parents.into_iter().next()?.dyn_into::<HtmlInputElement>().ok()?;
            apply(checkbox_value(parent.checked()));
            vec![Listener::jquery(JQuery::wrap(&parent), "change", {
                let apply = Rc::clone(&apply);
                move || apply(checkbox_value(parent.checked()))
            })]
        }
    };
    Some(listeners)
}

fn current_value(parent: &Element) -> String {
    snapshot(parent).map(|s| s.value).unwrap_or_default()
}
