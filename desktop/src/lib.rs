//! Browser client for the CareWatch dashboard.
mod app;
pub mod components;
pub mod constants;
pub mod hooks;
pub(crate) mod pages;
pub mod storage;

pub use app::{App, AppStateHandle, UserRoleHandle};
pub use storage::BrowserStorage;
