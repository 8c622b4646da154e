//! Common types.
pub mod resource_id;

pub use resource_id::ResourceId;
