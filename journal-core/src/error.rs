use std::path::PathBuf;

/// Everything that can go wrong while saving, loading or scanning entries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode entry: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to decode entry {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("journal directory does not exist: {}", .0.display())]
    StoreMissing(PathBuf),
    #[error("no journal entries found")]
    NoEntries,
    #[error("failed to scan journal directory {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
