use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::ColorScheme;

/// Source of the host's dark/light preference.
///
/// Sampled once per resolution; implementations are never asked to watch
/// for changes. `None` means the signal is unavailable.
pub trait SystemThemeSignal {
    fn sample(&self) -> Option<ColorScheme>;
}

impl<F> SystemThemeSignal for F
where
    F: Fn() -> Option<ColorScheme>,
{
    fn sample(&self) -> Option<ColorScheme> {
        self()
    }
}

/// Reads the desktop preference: `GTK_THEME` first, then the platform query.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsThemeSignal;

impl SystemThemeSignal for OsThemeSignal {
    fn sample(&self) -> Option<ColorScheme> {
        if let Some(theme_name) = std::env::var_os("GTK_THEME") {
            if let Some(scheme) = theme_name.to_str().and_then(mode_from_theme_name) {
                tracing::debug!(?scheme, "system theme taken from GTK_THEME");
                return Some(scheme);
            }
        }

        let scheme = match detect_os_theme() {
            OsThemeMode::Dark => ColorScheme::Dark,
            _ => ColorScheme::Light,
        };
        tracing::debug!(?scheme, "system theme detected");
        Some(scheme)
    }
}

/// Guesses the scheme from a theme name such as `Adwaita-dark`.
pub fn mode_from_theme_name(theme_name: &str) -> Option<ColorScheme> {
    let normalized = theme_name.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    if normalized.contains("dark") {
        return Some(ColorScheme::Dark);
    }
    if normalized.contains("light") {
        return Some(ColorScheme::Light);
    }
    None
}
