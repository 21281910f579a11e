//! Storage port — the persisted theme preference.

use std::rc::Rc;

use veneer_domain::error::StorageError;

/// Browser-local key/value storage holding explicit user preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the host refuses the read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the host refuses the write.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStore> PreferenceStore for Rc<T> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}
