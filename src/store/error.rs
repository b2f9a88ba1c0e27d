use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub(crate) enum StoreError {
    ReadError(PathBuf, io::Error),
    WriteError(PathBuf, io::Error),
    EncodeError(String, serde_json::Error),
    /// Document present but not readable as a list; writing would replace it
    UnreadableDocument(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::ReadError(path, e) => write!(f, "unable to read {}: {}", path.display(), e),
            StoreError::WriteError(path, e) => write!(f, "unable to write {}: {}", path.display(), e),
            StoreError::EncodeError(key, e) => write!(f, "unable to encode {}: {}", key, e),
            StoreError::UnreadableDocument(key) => write!(f, "{} is not a readable list, refusing to overwrite it", key),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::ReadError(_, e) | StoreError::WriteError(_, e) => Some(e),
            StoreError::EncodeError(_, e) => Some(e),
            StoreError::UnreadableDocument(_) => None,
        }
    }
}
