//! Common components.
pub mod no_access;
pub mod resource_card;
pub mod role_gate;
pub mod role_select;

// Re-exports
pub use no_access::NoAccess;
pub use resource_card::ResourceCard;
pub use role_gate::RoleGate;
pub use role_select::RoleSelect;
