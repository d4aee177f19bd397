use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::StorageError;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to render demo page")]
    Render(#[from] minijinja::Error),
    #[error("failed to write output: {path}")]
    WriteOutput { path: PathBuf, source: io::Error },
    #[error("{0}")]
    Usage(String),
}
