//! Resource catalogs.
use super::{filter_for_role, MonitoredResource};
use crate::error;
use crate::role::UserRole;
use crate::types::ResourceId;
use indexmap::IndexSet;
use std::result::Result as StdResult;

/// Ordered set of resources with unique ids.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ResourceCatalog {
    resources: Vec<MonitoredResource>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// + [`error::Resource::DuplicateId`] if two resources share an id.
    pub fn from_resources(
        resources: impl IntoIterator<Item = MonitoredResource>,
    ) -> StdResult<Self, error::Resource> {
        let mut catalog = Self::new();
        for resource in resources {
            catalog.insert(resource)?;
        }

        Ok(catalog)
    }

    /// Parses a JSON array of resources.
    /// Every resource is validated.
    pub fn from_json(json: &str) -> StdResult<Self, error::Resource> {
        let resources: Vec<MonitoredResource> = serde_json::from_str(json)
            .map_err(|err| error::Resource::InvalidCatalog(err.to_string()))?;

        Self::from_resources(resources)
    }

    /// Appends `resource`.
    ///
    /// # Errors
    /// + [`error::Resource::DuplicateId`] if the id is already in the catalog.
    pub fn insert(&mut self, resource: MonitoredResource) -> StdResult<(), error::Resource> {
        if self.get(resource.id()).is_some() {
            return Err(error::Resource::DuplicateId(resource.id().clone()));
        }

        self.resources.push(resource);
        Ok(())
    }

    pub fn get(&self, id: &ResourceId) -> Option<&MonitoredResource> {
        self.resources.iter().find(|resource| resource.id() == id)
    }

    pub fn resources(&self) -> &[MonitoredResource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Resources visible to `role`. See [`filter_for_role`].
    pub fn visible_to(&self, role: UserRole) -> Vec<&MonitoredResource> {
        filter_for_role(&self.resources, role)
    }

    /// Ids of all resources, in catalog order.
    pub fn ids(&self) -> IndexSet<&ResourceId> {
        self.resources.iter().map(MonitoredResource::id).collect()
    }
}

#[cfg(test)]
#[path = "./catalog_test.rs"]
mod catalog_test;
