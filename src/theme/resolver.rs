use crate::document::Document;
use crate::storage::PreferenceStore;

use super::system::{OsThemeSignal, SystemThemeSignal};
use super::{resolve_color_scheme, ColorScheme, ThemeMode, THEME_STORAGE_KEY};

/// Single source of truth for "is dark mode active".
///
/// Owns the preference store, the OS signal and the document marker, so
/// independent instances never leak state into each other. None of the
/// operations fail: storage problems are logged and resolution carries on,
/// degrading to light when nothing better is known.
#[derive(Debug)]
pub struct ThemeResolver<S, P = OsThemeSignal> {
    store: S,
    signal: P,
    document: Document,
    mode: ThemeMode,
    scheme: ColorScheme,
}

impl<S: PreferenceStore> ThemeResolver<S, OsThemeSignal> {
    pub fn with_os_signal(store: S) -> Self {
        Self::new(store, OsThemeSignal)
    }
}

impl<S: PreferenceStore, P: SystemThemeSignal> ThemeResolver<S, P> {
    /// Creates an unresolved instance; call [`ThemeResolver::init`] before reading.
    pub fn new(store: S, signal: P) -> Self {
        Self {
            store,
            signal,
            document: Document::new(),
            mode: ThemeMode::System,
            scheme: ColorScheme::Light,
        }
    }

    /// Resolves from the persisted preference, or the OS signal when none is stored.
    pub fn init(&mut self) -> ColorScheme {
        let stored = self.store.get(THEME_STORAGE_KEY).unwrap_or_else(|err| {
            tracing::warn!(?err, "failed to read theme preference; following system");
            None
        });
        let mode = ThemeMode::from_stored(stored.as_deref());
        if mode == ThemeMode::System {
            if let Some(value) = stored.as_deref() {
                tracing::debug!(value, "ignoring unrecognized stored theme");
            }
        }
        self.apply(mode)
    }

    /// Records an explicit choice; `System` clears the stored value.
    pub fn set_theme(&mut self, mode: ThemeMode) -> ColorScheme {
        let persisted = match mode.stored_value() {
            Some(value) => self.store.set(THEME_STORAGE_KEY, value),
            None => self.store.remove(THEME_STORAGE_KEY),
        };
        if let Err(err) = persisted {
            tracing::warn!(?err, %mode, "failed to persist theme preference");
        }
        tracing::info!(%mode, "theme preference changed");
        self.apply(mode)
    }

    fn apply(&mut self, mode: ThemeMode) -> ColorScheme {
        let system = match mode {
            ThemeMode::System => self.signal.sample(),
            ThemeMode::Light | ThemeMode::Dark => None,
        };
        let scheme = resolve_color_scheme(mode, system);
        self.mode = mode;
        self.scheme = scheme;
        self.document.apply_color_scheme(scheme);
        tracing::debug!(%mode, ?system, ?scheme, "resolved theme");
        scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    pub fn theme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tears the resolver down, handing back its store and signal.
    pub fn into_parts(self) -> (S, P) {
        (self.store, self.signal)
    }
}
