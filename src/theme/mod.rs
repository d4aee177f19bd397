mod resolver;
mod system;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use resolver::ThemeResolver;
pub use system::{mode_from_theme_name, OsThemeSignal, SystemThemeSignal};

/// Storage key under which an explicit choice is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The user's theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Value written to storage. `System` is expressed by absence.
    pub const fn stored_value(self) -> Option<&'static str> {
        match self {
            ThemeMode::System => None,
            ThemeMode::Light => Some("light"),
            ThemeMode::Dark => Some("dark"),
        }
    }

    /// Reads a persisted value; anything but `dark`/`light` means follow system.
    pub fn from_stored(value: Option<&str>) -> ThemeMode {
        match value {
            Some("dark") => ThemeMode::Dark,
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::System,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode '{0}', expected light, dark or system")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ThemeMode::System),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ParseThemeModeError(raw.to_string())),
        }
    }
}

/// The effective scheme in force after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub const fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Resolves a preference against an already-sampled OS signal.
///
/// An unavailable signal resolves to light.
pub fn resolve_color_scheme(mode: ThemeMode, system: Option<ColorScheme>) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::Light,
        ThemeMode::Dark => ColorScheme::Dark,
        ThemeMode::System => system.unwrap_or_default(),
    }
}
