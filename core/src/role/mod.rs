//! Viewer role.
pub mod role_context;
pub mod user_role;

// Re-exports
pub use role_context::RoleContext;
pub use user_role::UserRole;
