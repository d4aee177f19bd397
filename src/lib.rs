pub mod components;
mod config;
pub mod demo;
pub mod document;
pub mod error;
pub mod logging;
pub mod startup;
pub mod storage;
pub mod theme;

use std::fs;

pub use error::{AppError, AppResult};
pub use startup::StartupConfig;
pub use theme::{ColorScheme, ThemeMode, ThemeResolver};

use config::ConfigDirs;
use storage::{FileStore, MemoryStore, PreferenceStore};
use theme::{OsThemeSignal, SystemThemeSignal};

/// Entrypoint used by the binary.
pub fn run() -> AppResult<()> {
    logging::init();
    let startup = StartupConfig::from_args()?;
    if startup.show_help {
        println!("{}", startup::USAGE);
        return Ok(());
    }
    run_with(&startup)
}

/// Resolves the theme, applies any requested choice and renders the demo page.
pub fn run_with(startup: &StartupConfig) -> AppResult<()> {
    run_session(startup, &ConfigDirs::from_env(), OsThemeSignal).map(|_| ())
}

fn run_session<P: SystemThemeSignal>(
    startup: &StartupConfig,
    dirs: &ConfigDirs,
    signal: P,
) -> AppResult<ThemeResolver<Box<dyn PreferenceStore>, P>> {
    tracing::info!("starting mine-ui");

    let mut resolver = ThemeResolver::new(open_preference_store(dirs), signal);
    let scheme = resolver.init();
    tracing::info!(mode = %resolver.mode(), ?scheme, "theme initialised");

    if let Some(mode) = startup.theme {
        resolver.set_theme(mode);
    }

    let html = demo::render_demo_page(&resolver)?;
    match &startup.output {
        Some(path) => {
            fs::write(path, html).map_err(|source| AppError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            tracing::info!(?path, dark = resolver.is_dark(), "wrote demo page");
        }
        None => print!("{html}"),
    }
    Ok(resolver)
}

fn open_preference_store(dirs: &ConfigDirs) -> Box<dyn PreferenceStore> {
    match FileStore::from_config_dirs(dirs) {
        Ok(store) => {
            tracing::debug!(path = ?store.path(), "using preference file");
            Box::new(store)
        }
        Err(err) => {
            tracing::warn!(?err, "no preference location; theme choice will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
