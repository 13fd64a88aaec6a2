//! Page entry points exported to the templates.
//!
//! Each `mount_*` wires one server-rendered page and returns a handle owning
//! every registration; calling `free()` on it from JavaScript detaches them.

pub mod builder;
pub mod client_admin;
