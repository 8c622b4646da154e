//! Custom hooks.
pub mod app_state;
pub mod user_role;
pub mod visible_resources;

// Re-exports
pub use app_state::{use_app_state, use_app_state_store};
pub use user_role::{use_role_context, use_user_role};
pub use visible_resources::use_visible_resources;
