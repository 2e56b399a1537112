use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GcalError>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum GcalError {
    #[error("Cannot read repository list {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot locate home directory for the repository list")]
    NoHomeDir,
    #[error("Cannot open repository {}: {source}", path.display())]
    RepoOpen {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("Cannot resolve HEAD of {}: {source}", path.display())]
    HeadResolve {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("Cannot walk history of {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl GcalError {
    pub fn repo_open(path: &Path, err: impl Into<BoxError>) -> Self {
        GcalError::RepoOpen { path: path.to_path_buf(), source: err.into() }
    }

    pub fn head_resolve(path: &Path, err: impl Into<BoxError>) -> Self {
        GcalError::HeadResolve { path: path.to_path_buf(), source: err.into() }
    }

    pub fn walk(path: &Path, err: impl Into<BoxError>) -> Self {
        GcalError::Walk { path: path.to_path_buf(), source: err.into() }
    }

    /// Path of the repository whose scan failed, if the error came from a git stage.
    pub fn repository(&self) -> Option<&Path> {
        match self {
            GcalError::RepoOpen { path, .. }
            | GcalError::HeadResolve { path, .. }
            | GcalError::Walk { path, .. } => Some(path),
            _ => None,
        }
    }
}
