//! Configuration loading — JSON embedded in the hosting page.
//!
//! Looks for `<script id="veneer-config" type="application/json">` in the
//! document. Every field has a default matching the standard markup, so the
//! element is optional and may override only a few names.

use serde::Deserialize;
use veneer_app::page::PageSettings;

/// Id of the element carrying the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "veneer-config";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-feature settings, at the top level of the JSON document.
    #[serde(flatten)]
    pub page: PageSettings,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level forwarded to the console (`error` … `trace`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration embedded in `document`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the element exists but holds malformed or invalid
    /// JSON.
    pub fn load(document: &web_sys::Document) -> Result<Self, ConfigError> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a JSON document. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let page = &self.page;
        for (feature, threshold) in [
            ("fade_in", page.fade_in.observer.threshold),
            ("lazy_images", page.lazy_images.observer.threshold),
        ] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::Validation(format!(
                    "{feature} threshold must be between 0 and 1"
                )));
            }
        }
        if page.scroll.throttle_ms == 0 {
            return Err(ConfigError::Validation(
                "scroll throttle_ms must be non-zero".to_string(),
            ));
        }
        if page.scroll.threshold.0 < 0.0 {
            return Err(ConfigError::Validation(
                "scroll threshold must not be negative".to_string(),
            ));
        }
        if page.theme.storage_key.is_empty() {
            return Err(ConfigError::Validation(
                "theme storage_key must not be empty".to_string(),
            ));
        }
        let ids = page
            .theme
            .toggle_ids
            .iter()
            .chain([
                &page.menu.button_id,
                &page.menu.panel_id,
                &page.scroll.button_id,
            ]);
        for id in ids {
            if id.is_empty() {
                return Err(ConfigError::Validation(
                    "element ids must not be empty".to_string(),
                ));
            }
        }
        if self.logging.level.parse::<log::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "unknown log level {:?}",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Return the console log level.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse configuration")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
