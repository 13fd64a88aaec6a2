//! # utmcraft-web
//!
//! WASM behavior layer for the server-rendered UTM builder pages.
//!
//! The server renders every form, result block and admin modal. This crate
//! attaches behavior to that markup: Select2 widgets, cascading selects,
//! custom-value inputs, builder/parser submissions and admin PATCH forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! `form`, `config`, and the path/type helpers in `net` are pure and compile
//! on every target. DOM and network wiring (`widgets`, `pages`, most of
//! `util`) only exists under the `hydrate` feature.

pub mod config;
pub mod form;
pub mod net;
#[cfg(feature = "hydrate")]
pub mod pages;
pub mod util;
#[cfg(feature = "hydrate")]
pub mod widgets;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point: route panics to the browser console.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
