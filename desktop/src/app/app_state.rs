//! Application state context.
use crate::storage::BrowserStorage;
use carewatch_core::AppStateStore;
use std::ops::Deref;
use std::rc::Rc;

/// Shared [`AppStateStore`] provided to the view tree.
///
/// Handles are equal if they point to the same store.
#[derive(Clone)]
pub struct AppStateHandle(Rc<AppStateStore<BrowserStorage>>);

impl AppStateHandle {
    pub fn new(store: AppStateStore<BrowserStorage>) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for AppStateHandle {
    type Target = AppStateStore<BrowserStorage>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for AppStateHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
