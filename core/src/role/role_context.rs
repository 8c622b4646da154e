//! Persisted viewer role.
use super::UserRole;
use crate::config::StoreConfig;
use crate::error::InvalidRole;
use crate::store::persistence;
use crate::store::subscription::{Listeners, Subscription};
use crate::storage::KeyValueStorage;
use std::cell::Cell;

/// Tracks the role selected by the viewer.
///
/// The role starts [`UserRole::Unset`] and is set during onboarding.
/// It may later change between the selectable roles; a role is never locked.
pub struct RoleContext<S> {
    storage: S,
    config: StoreConfig,
    role: Cell<UserRole>,
    listeners: Listeners<UserRole>,
}

impl<S: KeyValueStorage> RoleContext<S> {
    /// Loads the persisted role. Absent or unknown values yield [`UserRole::Unset`].
    /// An invalid `config` is replaced by the default config.
    pub fn initialize(storage: S, config: StoreConfig) -> Self {
        let config = config.validated_or_default();
        let role = persistence::load_role(&storage, &config);
        tracing::debug!(?role, "initialized user role");

        Self {
            storage,
            config,
            role: Cell::new(role),
            listeners: Listeners::new(),
        }
    }

    pub fn new(storage: S) -> Self {
        Self::initialize(storage, StoreConfig::default())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn role(&self) -> UserRole {
        self.role.get()
    }

    /// Sets, persists and publishes `role`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_role(&self, role: UserRole) {
        self.role.set(role);
        if let Err(err) = persistence::save_role(&self.storage, &self.config, role) {
            tracing::error!(?err, key = %self.config.role_key, "could not persist user role");
        }

        self.listeners.notify(role);
    }

    /// Parses and sets a role from untyped input, e.g. a form value.
    ///
    /// # Errors
    /// + [`InvalidRole`] if `role` is not a known role.
    ///   The current role is left unchanged.
    pub fn set_role_str(&self, role: &str) -> Result<(), InvalidRole> {
        let role = role.parse()?;
        self.set_role(role);
        Ok(())
    }

    /// Registers `listener` to be called with each new role.
    #[must_use = "the listener is removed when the subscription is dropped"]
    pub fn subscribe(&self, listener: impl Fn(&UserRole) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }
}

#[cfg(test)]
#[path = "./role_context_test.rs"]
mod role_context_test;
