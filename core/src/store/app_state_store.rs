//! Application state store.
use super::persistence;
use super::subscription::{Listeners, Subscription};
use crate::config::StoreConfig;
use crate::state::{ApplicationState, ApplicationStatePatch, FiltersPatch, UserPreferencesPatch};
use crate::storage::KeyValueStorage;
use std::cell::RefCell;
use std::rc::Rc;

/// Single source of truth for cross page UI state.
///
/// Every mutation replaces the snapshot, writes the whole tree to storage,
/// then notifies subscribers with the new snapshot.
/// Writes are best effort: a failed write is logged and the in-memory
/// state stays authoritative.
///
/// The store is single threaded. Share it with an `Rc`.
pub struct AppStateStore<S> {
    storage: S,
    config: StoreConfig,
    state: RefCell<Rc<ApplicationState>>,
    listeners: Listeners<Rc<ApplicationState>>,
}

impl<S: KeyValueStorage> AppStateStore<S> {
    /// Loads the persisted state from `storage`.
    /// Absent or unreadable state yields the default tree.
    /// An invalid `config` is replaced by the default config.
    pub fn initialize(storage: S, config: StoreConfig) -> Self {
        let config = config.validated_or_default();

        let state = persistence::load_state(&storage, &config);
        tracing::debug!(?state, "initialized app state");

        Self {
            storage,
            config,
            state: RefCell::new(Rc::new(state)),
            listeners: Listeners::new(),
        }
    }

    /// Initializes the store with the default config.
    pub fn new(storage: S) -> Self {
        Self::initialize(storage, StoreConfig::default())
    }

    /// Current snapshot.
    pub fn state(&self) -> Rc<ApplicationState> {
        self.state.borrow().clone()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Shallow merges `patch` into the top level of the state.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn update_state(&self, patch: ApplicationStatePatch) {
        let bounds = self.config.zoom;
        self.mutate(|state| state.apply(patch, &bounds));
    }

    /// Merges `patch` into the user preferences only.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn update_user_preferences(&self, patch: UserPreferencesPatch) {
        let bounds = self.config.zoom;
        self.mutate(|state| state.apply_user_preferences(patch, &bounds));
    }

    /// Merges `patch` into the filters only.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn update_filters(&self, patch: FiltersPatch) {
        self.mutate(|state| state.apply_filters(patch));
    }

    /// Records `room` as the most recently opened room.
    pub fn set_last_viewed_room(&self, room: impl Into<String>) {
        self.update_state(ApplicationStatePatch::new().last_viewed_room(Some(room.into())));
    }

    /// Restores the default state, clamped to the configured zoom bounds.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reset(&self) {
        let bounds = self.config.zoom;
        self.mutate(|state| {
            *state = ApplicationState::default();
            state.normalize(&bounds);
        });
    }

    /// Registers `listener` to be called with each new snapshot.
    #[must_use = "the listener is removed when the subscription is dropped"]
    pub fn subscribe(&self, listener: impl Fn(&Rc<ApplicationState>) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    fn mutate(&self, f: impl FnOnce(&mut ApplicationState)) {
        let state = {
            let mut current = self.state.borrow_mut();
            let mut next = (**current).clone();
            f(&mut next);

            let next = Rc::new(next);
            *current = next.clone();
            next
        };

        if let Err(err) = persistence::save_state(&self.storage, &self.config, &state) {
            tracing::error!(?err, key = %self.config.state_key, "could not persist app state");
        }

        self.listeners.notify(state);
    }
}

#[cfg(test)]
#[path = "./app_state_store_test.rs"]
mod app_state_store_test;
