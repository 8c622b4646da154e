//! Reading and writing persisted values.
//!
//! Reads never fail: missing or unreadable data yields the default.
//! Writes report their error so callers can log it.
use crate::config::StoreConfig;
use crate::error;
use crate::role::UserRole;
use crate::state::ApplicationState;
use crate::storage::KeyValueStorage;
use std::result::Result as StdResult;

/// Loads the application state, falling back to the default tree.
pub fn load_state<S: KeyValueStorage>(storage: &S, config: &StoreConfig) -> ApplicationState {
    let mut state = match storage.get(&config.state_key) {
        Ok(Some(json)) => decode_state(&json).unwrap_or_else(|err| {
            tracing::warn!(?err, key = %config.state_key, "could not parse saved state");
            ApplicationState::default()
        }),

        Ok(None) => ApplicationState::default(),
        Err(err) => {
            tracing::warn!(?err, key = %config.state_key, "could not read saved state");
            ApplicationState::default()
        }
    };

    state.normalize(&config.zoom);
    state
}

/// Writes the whole application state.
pub fn save_state<S: KeyValueStorage>(
    storage: &S,
    config: &StoreConfig,
    state: &ApplicationState,
) -> StdResult<(), error::Storage> {
    let json = encode_state(state)?;
    storage.set(&config.state_key, &json)
}

/// Loads the user role, falling back to [`UserRole::Unset`].
pub fn load_role<S: KeyValueStorage>(storage: &S, config: &StoreConfig) -> UserRole {
    match storage.get(&config.role_key) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|err| {
            tracing::warn!(?err, key = %config.role_key, "unknown saved role");
            UserRole::Unset
        }),

        Ok(None) => UserRole::Unset,
        Err(err) => {
            tracing::warn!(?err, key = %config.role_key, "could not read saved role");
            UserRole::Unset
        }
    }
}

/// Writes the role as a plain string.
pub fn save_role<S: KeyValueStorage>(
    storage: &S,
    config: &StoreConfig,
    role: UserRole,
) -> StdResult<(), error::Storage> {
    storage.set(&config.role_key, role.as_str())
}

pub fn encode_state(state: &ApplicationState) -> StdResult<String, error::Storage> {
    serde_json::to_string(state).map_err(|err| error::Storage::Other(err.to_string()))
}

pub fn decode_state(json: &str) -> serde_json::Result<ApplicationState> {
    serde_json::from_str(json)
}

#[cfg(test)]
#[path = "./persistence_test.rs"]
mod persistence_test;
