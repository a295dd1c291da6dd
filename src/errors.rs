use thiserror::Error;
use crate::fs::provider::FsError;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] FsError),
}

pub type AppResult<T> = Result<T, AppError>;
