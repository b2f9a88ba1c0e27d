use std::collections::HashMap;

use super::{Backend, StoreError};

/// In-process key/value store, nothing is written to disk
#[derive(Default)]
pub(crate) struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub(crate) fn new() -> MemoryBackend {
        MemoryBackend::default()
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
