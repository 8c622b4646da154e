//! Monitored resources and role based visibility.
pub mod catalog;
pub mod filter;
pub mod monitored_resource;
pub mod page;
pub mod status;

// Re-exports
pub use catalog::ResourceCatalog;
pub use filter::filter_for_role;
pub use monitored_resource::MonitoredResource;
pub use page::{paginate, Page};
pub use status::ResourceStatus;
