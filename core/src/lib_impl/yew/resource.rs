//! ['yew'] implementations for resources.
use crate::resource::MonitoredResource;
use crate::types::ResourceId;
use yew::virtual_dom::Key;

impl From<ResourceId> for Key {
    fn from(id: ResourceId) -> Self {
        Key::from(String::from(id))
    }
}

impl From<&MonitoredResource> for Key {
    fn from(resource: &MonitoredResource) -> Self {
        resource.id().clone().into()
    }
}
