//! In-memory storage.
use super::{KeyValueStorage, Result};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Storage held in memory.
///
/// Clones share the same entries, so a clone kept aside observes
/// everything written through the original.
#[derive(Clone, Default, Debug)]
pub struct MemoryStorage {
    entries: Rc<RefCell<IndexMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage holding the given entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self {
            entries: Rc::new(RefCell::new(entries)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result {
        self.entries.borrow_mut().shift_remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "./memory_test.rs"]
mod memory_test;
