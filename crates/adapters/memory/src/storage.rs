use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use veneer_app::ports::PreferenceStore;
use veneer_domain::error::StorageError;

/// Key-value preference store held in memory.
///
/// Switching it off with [`MemoryStorage::set_available`] makes every call
/// fail with [`StorageError::Unavailable`], like a browser with storage
/// disabled.
#[derive(Debug)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            available: Cell::new(true),
        }
    }
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        store.values.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Read a value directly, bypassing availability.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }
}

impl PreferenceStore for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_available()?;
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
