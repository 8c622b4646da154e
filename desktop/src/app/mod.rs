//! Main application.
pub mod app;
pub mod app_state;
pub mod user_role;

// Re-exports
pub use app::App;
pub use app_state::AppStateHandle;
pub use user_role::UserRoleHandle;
