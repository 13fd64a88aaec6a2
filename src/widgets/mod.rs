//! Widget initializers for the builder and client admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `init` binds one widget class to its events and returns the
//! registrations (or a handle owning them). Pages keep those handles alive;
//! [`form_area::FormArea`] swaps its own set whenever new form markup lands.

pub mod admin_patch;
pub mod admin_search;
pub mod builder_form;
pub mod custom_values;
pub mod form_area;
pub mod form_selector;
pub mod modals;
pub mod parser;
pub mod select_deps;

pub const MAIN_CONTAINER_ID: &str = "main-container";
pub const FORM_AREA_ID: &str = "form-area";
pub const RESULT_AREA_ID: &str = "result-area";
pub const BUILDER_FORM_ID: &str = "builder-form";
pub const FORM_ID_INPUT_ID: &str = "id_form_id";
