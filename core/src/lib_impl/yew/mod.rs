//! [`yew`] implementations.
pub mod resource;
