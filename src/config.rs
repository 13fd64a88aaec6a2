//! Client configuration embedded by the server.
//!
//! Pages may render a `<script id="client-config" type="application/json">`
//! block. Every field is optional; absent keys fall back to the defaults the
//! backend has always used (Django's `csrftoken` cookie, 100 ms blink).
//!
//! ERROR HANDLING
//! ==============
//! A malformed block is logged and replaced by defaults so a template typo
//! never disables the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the embedded config script.
pub const CONFIG_SCRIPT_ID: &str = "client-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid client config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Runtime knobs for the behavior layer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Cookie holding the anti-forgery token.
    pub csrf_cookie: String,
    /// Request header carrying the anti-forgery token.
    pub csrf_header: String,
    /// Hidden interval of an alert blink.
    pub blink_ms: u32,
    /// Pause before local validation errors are rendered, so the spinner is visible.
    pub validation_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            csrf_cookie: "csrftoken".to_owned(),
            csrf_header: "X-CSRFToken".to_owned(),
            blink_ms: 100,
            validation_delay_ms: 100,
        }
    }
}

impl ClientConfig {
    /// Parse a config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when `raw` is not a JSON object matching the schema.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Resolved log level; unknown names mean `Info`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Read the config from the current document, defaulting when absent or invalid.
    #[cfg(feature = "hydrate")]
    pub fn load() -> Self {
        let Some(raw) = crate::util::dom::by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                let config = Self::default();
                config.init_logging();
                log::warn!("{e}; using defaults");
                config
            }
        }
    }

    /// Install the console logger at the configured level. Repeat calls are ignored.
    #[cfg(feature = "hydrate")]
    pub fn init_logging(&self) {
        let _ = console_log::init_with_level(self.level());
    }
}
