use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory {path}: {message}")]
    WalkFailed { path: PathBuf, message: String },
}

impl IoError {
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn walk_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::WalkFailed {
            path: path.into(),
            message: message.into(),
        }
    }
}
