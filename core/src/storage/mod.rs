//! Durable key/value storage.
pub mod memory;

pub use memory::MemoryStorage;

use crate::error;
use std::result::Result as StdResult;

pub type Result<T = ()> = StdResult<T, error::Storage>;

/// Durable string storage, e.g. the browser's local storage.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result {
        (**self).remove(key)
    }
}
