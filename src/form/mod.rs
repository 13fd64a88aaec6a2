//! Pure form logic shared by the builder page and client admin forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets snapshot DOM controls into [`field::FieldSnapshot`] values and hand
//! them to these modules, so payload shaping, dependency lookups and error
//! placement stay testable without a browser.

pub mod builder;
pub mod custom_values;
pub mod deps;
pub mod field;
pub mod field_errors;
pub mod payload;
pub mod populate;
