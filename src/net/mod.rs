//! Networking modules for the UTM builder and client admin endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the fetch calls, `types` defines the wire schema and admin
//! routes, and `csrf` reads the anti-forgery cookie.

pub mod api;
pub mod csrf;
pub mod types;

pub use api::ApiError;
