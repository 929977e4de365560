use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to create profile: {0}")]
    Profile(#[from] ProfileError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a profile could not be generated.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("new profile is not valid ({0})")]
    InvalidName(String),
    #[error("specified template not valid ({0})")]
    InvalidTemplate(String),
    #[error("template profile ({0}) does not exist")]
    MissingTemplate(String),
    #[error("profile directory exists")]
    Exists(PathBuf),
    #[error("could not create profile directory: path exists")]
    PathBlocked(PathBuf),
    #[error("temporary directory creation failed: {0}")]
    Staging(#[source] io::Error),
    #[error("could not write {file}: {source}")]
    Write {
        file: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("could not create profile directory: {0}")]
    Commit(#[source] io::Error),
}
