//! # CareWatch Core
//!
//! Client-side state for the CareWatch surveillance dashboard.
//!
//! + [`store::AppStateStore`]: Persisted UI preferences and filter selections.
//! + [`role::RoleContext`]: The viewer's persisted role.
//! + [`resource::filter_for_role`]: Which monitored resources a role may see, and in what order.
//!
//! Durable storage is abstracted by [`storage::KeyValueStorage`] so the
//! store can run against browser storage or an in-memory map.
pub mod chat;
pub mod config;
pub mod constants;
pub mod error;
pub mod lib_impl;
pub mod resource;
pub mod role;
pub mod state;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(test)]
pub mod dev_utils;

// Re-exports
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use role::{RoleContext, UserRole};
pub use state::ApplicationState;
pub use store::{AppStateStore, Subscription};
