//! Utility helpers shared across widgets and pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate web-sys and jQuery glue from widget logic. Apart
//! from `nav` tone names, everything here requires a browser.

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod jquery;
#[cfg(feature = "hydrate")]
pub mod listener;
pub mod nav;
