use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::{Backend, StoreError};

/// Keeps each key in its own `<key>.json` file inside a data directory
pub(crate) struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub(crate) fn new(dir: &Path) -> FileBackend {
        FileBackend { dir: dir.to_path_buf() }
    }

    fn path_of(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Backend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_of(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadError(path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::WriteError(self.dir.clone(), e))?;

        let path = self.path_of(key);
        debug!("Writing {} bytes to {}", value.len(), path.display());
        fs::write(&path, value).map_err(|e| StoreError::WriteError(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util;

    /// A fresh directory under the system temp dir, unique per test
    fn scratch_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("expensedb-{}-{}-{}", name, std::process::id(), util::timestamp_id()));
        dir
    }

    #[test]
    fn test_missing_key_is_none() {
        let backend = FileBackend::new(&scratch_dir("missing"));
        assert_eq!(backend.get("ets_expenses_default").unwrap(), None);
    }

    #[test]
    fn test_set_creates_dir_and_round_trips() {
        let dir = scratch_dir("set");
        let mut backend = FileBackend::new(&dir);
        backend.set("ets_wallets_default", "[]").unwrap();

        assert!(dir.join("ets_wallets_default.json").is_file());
        assert_eq!(backend.get("ets_wallets_default").unwrap(), Some("[]".to_string()));

        fs::remove_dir_all(dir).unwrap();
    }
}
