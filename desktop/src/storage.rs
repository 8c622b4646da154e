//! Browser local storage.
use carewatch_core::error;
use carewatch_core::storage::{self, KeyValueStorage};
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::{JsCast, JsValue};

/// [`KeyValueStorage`] over the browser's local storage.
///
/// Values are stored as raw strings.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BrowserStorage {
    available: bool,
}

impl BrowserStorage {
    /// Uses the window's local storage.
    /// If it is unavailable, e.g. disabled by privacy settings,
    /// every operation fails with [`error::Storage::Unavailable`].
    pub fn local() -> Self {
        let available = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .is_some();

        if !available {
            tracing::warn!("local storage is unavailable, preferences will not persist");
        }

        Self { available }
    }

    fn raw(&self) -> storage::Result<web_sys::Storage> {
        if self.available {
            Ok(LocalStorage::raw())
        } else {
            Err(error::Storage::Unavailable("local storage".to_string()))
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> storage::Result<Option<String>> {
        self.raw()?.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> storage::Result {
        self.raw()?.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> storage::Result {
        self.raw()?.remove_item(key).map_err(storage_error)
    }
}

fn storage_error(err: JsValue) -> error::Storage {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(exception) if exception.name() == "QuotaExceededError" => {
            error::Storage::QuotaExceeded
        }

        Some(exception) => error::Storage::Other(exception.message()),
        None => error::Storage::Other(format!("{err:?}")),
    }
}
