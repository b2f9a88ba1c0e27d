//! Persistence of expenses, wallets and settings. Every document is a JSON blob stored under a
//! per-user key, read in full and written back in full on each change.

mod error;
mod file;
#[cfg(test)]
mod memory;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::expense::Expense;
use crate::settings::{Settings, DEFAULT_USER};
use crate::wallet::Wallet;

pub(crate) use error::StoreError;
pub(crate) use file::FileBackend;
#[cfg(test)]
pub(crate) use memory::MemoryBackend;

const EXPENSES_KEY: &str = "ets_expenses";
const WALLETS_KEY: &str = "ets_wallets";
const SETTINGS_KEY: &str = "ets_settings";

/// String key/value storage
pub(crate) trait Backend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

fn user_key(prefix: &str, user: &str) -> String {
    format!("{prefix}_{user}")
}

/// Typed access to one backend. All operations take the user explicitly.
pub(crate) struct Repository<B: Backend> {
    backend: B,
}

impl<B: Backend> Repository<B> {
    pub(crate) fn new(backend: B) -> Repository<B> {
        Repository { backend }
    }

    /// Load a document. Absent keys and unparsable content both give `None`.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let raw = match self.backend.get(key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring unreadable document {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Load a list document entry by entry. Entries that do not decode are skipped, so one bad entry
    /// does not hide the rest. `None` when the key is absent or the document is not a list.
    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>, StoreError> {
        let entries = match self.load::<Vec<Value>>(key)? {
            Some(entries) => entries,
            None => return Ok(None),
        };

        let mut records = Vec::with_capacity(entries.len());
        for (i, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<T>(entry) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping unreadable entry {} in {}: {}", i, key, e),
            }
        }
        Ok(Some(records))
    }

    /// Load a list that is about to be written back. A present but unreadable document is an error
    /// here, writing over it would lose whatever it holds.
    fn load_list_for_update<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        if let Some(records) = self.load_list::<T>(key)? {
            return Ok(records);
        }
        match self.backend.get(key)? {
            Some(_) => Err(StoreError::UnreadableDocument(key.to_string())),
            None => Ok(vec![]),
        }
    }

    /// Key holding a user's list. The default user falls back to the unsuffixed key used before
    /// documents were split per user, until the first write moves the data to its own key.
    fn list_key(&self, prefix: &str, user: &str) -> Result<String, StoreError> {
        let key = user_key(prefix, user);
        if user == DEFAULT_USER && self.backend.get(&key)?.is_none() && self.backend.get(prefix)?.is_some() {
            debug!("Reading {} from legacy key {}", key, prefix);
            return Ok(prefix.to_string());
        }
        Ok(key)
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(value).map_err(|e| StoreError::EncodeError(key.to_string(), e))?;
        self.backend.set(key, &encoded)
    }

    pub(crate) fn load_expenses(&self, user: &str) -> Result<Vec<Expense>, StoreError> {
        let key = self.list_key(EXPENSES_KEY, user)?;
        Ok(self.load_list::<Expense>(&key)?.unwrap_or_default())
    }

    pub(crate) fn save_expenses(&mut self, user: &str, expenses: &[Expense]) -> Result<(), StoreError> {
        self.save(&user_key(EXPENSES_KEY, user), expenses)
    }

    pub(crate) fn add_expense(&mut self, user: &str, expense: Expense) -> Result<(), StoreError> {
        let key = self.list_key(EXPENSES_KEY, user)?;
        let mut expenses = self.load_list_for_update::<Expense>(&key)?;
        info!("Adding expense {} for user {}", expense.id, user);
        expenses.push(expense);
        self.save_expenses(user, &expenses)
    }

    /// Remove every expense with the given id. Returns how many were removed.
    pub(crate) fn delete_expense(&mut self, user: &str, id: &str) -> Result<usize, StoreError> {
        let key = self.list_key(EXPENSES_KEY, user)?;
        let mut expenses = self.load_list_for_update::<Expense>(&key)?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        let deleted = before - expenses.len();
        if deleted > 0 {
            self.save_expenses(user, &expenses)?;
        }
        Ok(deleted)
    }

    pub(crate) fn load_wallets(&self, user: &str) -> Result<Vec<Wallet>, StoreError> {
        let key = self.list_key(WALLETS_KEY, user)?;
        Ok(self.load_list::<Wallet>(&key)?.unwrap_or_default())
    }

    pub(crate) fn save_wallets(&mut self, user: &str, wallets: &[Wallet]) -> Result<(), StoreError> {
        self.save(&user_key(WALLETS_KEY, user), wallets)
    }

    pub(crate) fn add_wallet(&mut self, user: &str, wallet: Wallet) -> Result<(), StoreError> {
        let key = self.list_key(WALLETS_KEY, user)?;
        let mut wallets = self.load_list_for_update::<Wallet>(&key)?;
        info!("Adding wallet {} for user {}", wallet.id, user);
        wallets.push(wallet);
        self.save_wallets(user, &wallets)
    }

    pub(crate) fn delete_wallet(&mut self, user: &str, id: &str) -> Result<usize, StoreError> {
        let key = self.list_key(WALLETS_KEY, user)?;
        let mut wallets = self.load_list_for_update::<Wallet>(&key)?;
        let before = wallets.len();
        wallets.retain(|w| w.id != id);
        let deleted = before - wallets.len();
        if deleted > 0 {
            self.save_wallets(user, &wallets)?;
        }
        Ok(deleted)
    }

    /// Stored settings merged over the defaults
    pub(crate) fn load_settings(&self, user: &str) -> Result<Settings, StoreError> {
        Ok(self.load::<Settings>(&user_key(SETTINGS_KEY, user))?.unwrap_or_default())
    }

    pub(crate) fn save_settings(&mut self, user: &str, settings: &Settings) -> Result<(), StoreError> {
        self.save(&user_key(SETTINGS_KEY, user), settings)
    }
}
