//! Resources visible to the current viewer.
use super::use_user_role;
use carewatch_core::resource::{MonitoredResource, ResourceCatalog};
use std::rc::Rc;
use yew::prelude::*;

/// Gets the resources of `catalog` visible to the current role, in display order.
#[hook]
pub fn use_visible_resources(catalog: Rc<ResourceCatalog>) -> Rc<Vec<MonitoredResource>> {
    let role = use_user_role();
    use_memo((catalog, role), |(catalog, role)| {
        catalog
            .visible_to(*role)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    })
}
