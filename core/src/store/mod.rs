//! Application state store.
pub mod app_state_store;
pub mod persistence;
pub mod subscription;

// Re-exports
pub use app_state_store::AppStateStore;
pub use subscription::{Listeners, Subscription};
