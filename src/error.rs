use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RepomapError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Root is not a directory: {0}")]
    InvalidRoot(PathBuf),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
impl RepomapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepomapError::Io {
            path: path.into(),
            source,
        }
    }
}
