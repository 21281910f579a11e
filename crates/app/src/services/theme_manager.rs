//! Theme manager — resolves, applies and persists the light/dark preference.

use serde::Deserialize;

use veneer_domain::error::{MissingElementError, VeneerError};
use veneer_domain::theme::{self, ColorScheme, Theme};

use crate::ports::{Document, PreferenceStore};

/// Names the theme manager relies on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Storage key holding the explicit preference.
    pub storage_key: String,
    /// Attribute on the root element carrying the active theme.
    pub attribute: String,
    /// Ids of the controls that toggle the theme.
    pub toggle_ids: Vec<String>,
    /// Media query reporting the environment's dark-scheme preference.
    pub color_scheme_query: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle_ids: vec![
                "theme-toggle".to_string(),
                "mobile-theme-toggle".to_string(),
            ],
            color_scheme_query: "(prefers-color-scheme: dark)".to_string(),
        }
    }
}

/// Application service owning the page-wide theme marker.
///
/// Only [`set_theme`](Self::set_theme) and [`toggle_theme`](Self::toggle_theme)
/// write to storage. Initial resolution and system-driven changes touch the
/// marker alone, so a stored value is always an explicit user choice.
pub struct ThemeManager<D, S> {
    document: D,
    store: S,
    settings: ThemeSettings,
}

impl<D: Document, S: PreferenceStore> ThemeManager<D, S> {
    pub fn new(document: D, store: S, settings: ThemeSettings) -> Self {
        Self {
            document,
            store,
            settings,
        }
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// Raw value of the theme marker on the root element.
    pub fn marker(&self) -> Option<String> {
        let root = self.document.root()?;
        self.document.attribute(&root, &self.settings.attribute)
    }

    /// The explicit preference held in storage, if readable and valid.
    pub fn stored(&self) -> Option<Theme> {
        let raw = match self.store.load(&self.settings.storage_key) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(%err, "theme preference unreadable, ignoring it");
                return None;
            }
        };
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                tracing::warn!(%err, "ignoring stored theme preference");
                None
            }
        }
    }

    fn apply(&self, theme: Theme) {
        match self.document.root() {
            Some(root) => {
                self.document
                    .set_attribute(&root, &self.settings.attribute, theme.as_str());
            }
            None => tracing::warn!(%theme, "document has no root element"),
        }
    }

    /// Apply `theme` and record it as the user's explicit preference.
    ///
    /// The marker is updated even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns [`VeneerError::Storage`] if the preference cannot be written.
    #[tracing::instrument(skip(self))]
    pub fn set_theme(&self, theme: Theme) -> Result<(), VeneerError> {
        self.apply(theme);
        self.store.save(&self.settings.storage_key, theme.as_str())?;
        tracing::debug!("theme preference saved");
        Ok(())
    }

    /// Switch to the opposite of the theme currently shown.
    ///
    /// # Errors
    ///
    /// Returns [`VeneerError::Storage`] if the preference cannot be written.
    pub fn toggle_theme(&self) -> Result<Theme, VeneerError> {
        let next = Theme::toggle_from_marker(self.marker().as_deref());
        self.set_theme(next)?;
        Ok(next)
    }

    /// Resolve and apply the theme at page load.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&self, system: Option<ColorScheme>) -> Theme {
        let resolved = theme::resolve(self.stored(), system);
        self.apply(resolved);
        tracing::debug!(theme = %resolved, "initial theme applied");
        resolved
    }

    /// React to a change of the environment's color scheme.
    ///
    /// Returns the applied theme, or `None` when an explicit preference is
    /// stored and the change is ignored.
    #[tracing::instrument(skip(self))]
    pub fn on_color_scheme_change(&self, scheme: ColorScheme) -> Option<Theme> {
        let next = theme::follow_system(self.stored(), scheme)?;
        self.apply(next);
        Some(next)
    }

    /// The controls that toggle the theme.
    ///
    /// # Errors
    ///
    /// Returns [`MissingElementError`] for the first configured id that the
    /// document does not contain.
    pub fn toggle_controls(&self) -> Result<Vec<D::Element>, MissingElementError> {
        self.settings
            .toggle_ids
            .iter()
            .map(|id| {
                self.document
                    .element_by_id(id)
                    .ok_or_else(|| MissingElementError { id: id.clone() })
            })
            .collect()
    }
}
