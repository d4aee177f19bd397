use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const APP_DIR: &str = "mine-ui";
const APP_CONFIG_FILE: &str = "config.json";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

/// Environment roots the config directory is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ConfigDirs {
    pub(crate) xdg_config_home: Option<PathBuf>,
    pub(crate) home: Option<PathBuf>,
}

impl ConfigDirs {
    pub(crate) fn from_env() -> Self {
        Self {
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            home: std::env::var_os("HOME").map(PathBuf::from),
        }
    }

    /// `$XDG_CONFIG_HOME/mine-ui`, or `$HOME/.config/mine-ui` when XDG is unset or empty.
    pub(crate) fn app_dir(&self) -> Result<PathBuf, ConfigPathError> {
        let xdg = self
            .xdg_config_home
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty());
        let root = match (xdg, self.home.as_deref()) {
            (Some(xdg), _) => xdg.to_path_buf(),
            (None, Some(home)) => home.join(".config"),
            (None, None) => return Err(ConfigPathError::MissingHomeDirectory),
        };
        Ok(root.join(APP_DIR))
    }

    /// Where preferences live: the `config.json` override, else the default file.
    ///
    /// A relative override is taken relative to the app config directory.
    pub(crate) fn preferences_path(&self) -> Result<PathBuf, ConfigPathError> {
        let app_dir = self.app_dir()?;
        match load_app_config(&app_dir).preferences_path {
            Some(path) if path.is_relative() => Ok(app_dir.join(path)),
            Some(path) => Ok(path),
            None => Ok(app_dir.join(PREFERENCES_FILE)),
        }
    }
}

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AppConfig {
    /// Overrides where the theme preference is persisted.
    #[serde(default)]
    pub(crate) preferences_path: Option<PathBuf>,
}

fn load_app_config(app_dir: &Path) -> AppConfig {
    let path = app_dir.join(APP_CONFIG_FILE);
    if !path.exists() {
        return AppConfig::default();
    }
    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("mine-ui-config-{pid}-{nanos}"));
        path
    }

    fn xdg_dirs(root: &Path) -> ConfigDirs {
        ConfigDirs {
            xdg_config_home: Some(root.to_path_buf()),
            home: None,
        }
    }

    fn write_config(root: &Path, contents: &str) {
        let app_dir = xdg_dirs(root).app_dir().unwrap();
        fs::create_dir_all(&app_dir).unwrap();
        fs::write(app_dir.join(APP_CONFIG_FILE), contents).unwrap();
    }

    #[test]
    fn app_dir_prefers_xdg_config_home() {
        let dirs = ConfigDirs {
            xdg_config_home: Some(PathBuf::from("/tmp/config-root")),
            home: Some(PathBuf::from("/tmp/home")),
        };
        assert_eq!(
            dirs.app_dir().unwrap(),
            PathBuf::from("/tmp/config-root/mine-ui")
        );
    }

    #[test]
    fn app_dir_ignores_empty_xdg_config_home() {
        let dirs = ConfigDirs {
            xdg_config_home: Some(PathBuf::new()),
            home: Some(PathBuf::from("/tmp/home")),
        };
        assert_eq!(
            dirs.app_dir().unwrap(),
            PathBuf::from("/tmp/home/.config/mine-ui")
        );
    }

    #[test]
    fn app_dir_errors_when_home_missing_and_xdg_unset() {
        let error = ConfigDirs::default().app_dir().unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn preferences_path_defaults_when_config_missing() {
        let root = fixture_root();
        let dirs = xdg_dirs(&root);
        assert_eq!(
            dirs.preferences_path().unwrap(),
            root.join("mine-ui/preferences.json")
        );
    }

    #[test]
    fn preferences_path_uses_absolute_override() {
        let root = fixture_root();
        write_config(&root, r#"{ "preferences_path": "/srv/mine/prefs.json" }"#);

        assert_eq!(
            xdg_dirs(&root).preferences_path().unwrap(),
            PathBuf::from("/srv/mine/prefs.json")
        );
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn preferences_path_resolves_relative_override_against_app_dir() {
        let root = fixture_root();
        write_config(&root, r#"{ "preferences_path": "state/theme.json" }"#);

        assert_eq!(
            xdg_dirs(&root).preferences_path().unwrap(),
            root.join("mine-ui/state/theme.json")
        );
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn preferences_path_falls_back_on_invalid_config() {
        let root = fixture_root();
        write_config(&root, "{ not json");

        assert_eq!(
            xdg_dirs(&root).preferences_path().unwrap(),
            root.join("mine-ui/preferences.json")
        );
        let _ = fs::remove_dir_all(&root);
    }
}
