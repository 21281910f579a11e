//! Theme — the page-wide light/dark preference and how it is resolved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The value written to the theme marker and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme selected by a toggle given the raw marker currently on the page.
    ///
    /// An unset marker counts as dark. Any value other than `dark` counts as
    /// not-dark, so the toggle always lands on a valid theme.
    #[must_use]
    pub fn toggle_from_marker(marker: Option<&str>) -> Self {
        match marker.unwrap_or(Self::Dark.as_str()) {
            "dark" => Self::Light,
            _ => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Color scheme reported by the operating environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Map the result of a `(prefers-color-scheme: dark)` query.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Theme matching this color scheme.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}

/// Pick the theme to show at page load.
///
/// Precedence: explicit stored preference, then the environment's color
/// scheme, then [`Theme::Dark`].
#[must_use]
pub fn resolve(stored: Option<Theme>, system: Option<ColorScheme>) -> Theme {
    stored
        .or_else(|| system.map(ColorScheme::theme))
        .unwrap_or_default()
}

/// Theme to apply after the environment's color scheme changed, if any.
///
/// Returns `None` when an explicit preference is stored: user choice wins
/// over the system for as long as it stays in storage.
#[must_use]
pub fn follow_system(stored: Option<Theme>, system: ColorScheme) -> Option<Theme> {
    match stored {
        Some(_) => None,
        None => Some(system.theme()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn should_toggle_to_opposite_theme() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn should_treat_missing_marker_as_dark_when_toggling() {
        assert_eq!(Theme::toggle_from_marker(None), Theme::Light);
    }

    #[test]
    fn should_toggle_to_dark_when_marker_is_unknown() {
        assert_eq!(Theme::toggle_from_marker(Some("sepia")), Theme::Dark);
    }

    #[test]
    fn should_toggle_known_markers() {
        assert_eq!(Theme::toggle_from_marker(Some("dark")), Theme::Light);
        assert_eq!(Theme::toggle_from_marker(Some("light")), Theme::Dark);
    }

    #[test]
    fn should_parse_and_display_lowercase_names() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn should_reject_unknown_theme_name() {
        let err = "Dark".parse::<Theme>().unwrap_err();
        assert_eq!(err, ParseThemeError("Dark".to_string()));
    }

    #[test]
    fn should_serialize_as_lowercase_string() {
        let json = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }

    #[test]
    fn should_prefer_stored_theme_over_system() {
        let theme = resolve(Some(Theme::Light), Some(ColorScheme::Dark));
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn should_use_system_scheme_when_nothing_stored() {
        assert_eq!(resolve(None, Some(ColorScheme::Light)), Theme::Light);
        assert_eq!(resolve(None, Some(ColorScheme::Dark)), Theme::Dark);
    }

    #[test]
    fn should_fall_back_to_dark_when_no_signal_available() {
        assert_eq!(resolve(None, None), Theme::Dark);
    }

    #[test]
    fn should_follow_system_when_nothing_stored() {
        assert_eq!(follow_system(None, ColorScheme::Light), Some(Theme::Light));
    }

    #[test]
    fn should_ignore_system_when_preference_stored() {
        assert_eq!(follow_system(Some(Theme::Dark), ColorScheme::Light), None);
    }

    #[test]
    fn should_map_prefers_dark_query() {
        assert_eq!(ColorScheme::from_prefers_dark(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_prefers_dark(false), ColorScheme::Light);
    }
}
