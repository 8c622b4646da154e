//! Monitored resources.
use super::ResourceStatus;
use crate::error;
use crate::role::UserRole;
use crate::types::ResourceId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::result::Result as StdResult;

/// A monitorable room or camera.
///
/// Always grants access to at least one selectable role.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase", try_from = "ResourceRecord")]
pub struct MonitoredResource {
    id: ResourceId,
    display_name: String,
    status: ResourceStatus,
    access_roles: IndexSet<UserRole>,

    /// Source of the live video feed, if the room has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    live_feed: Option<String>,
}

impl MonitoredResource {
    /// # Errors
    /// + [`error::Resource::EmptyAccessRoles`] if `access_roles` is empty.
    /// + [`error::Resource::UnsetAccessRole`] if `access_roles` contains [`UserRole::Unset`].
    pub fn new(
        id: impl Into<ResourceId>,
        display_name: impl Into<String>,
        status: ResourceStatus,
        access_roles: impl IntoIterator<Item = UserRole>,
    ) -> StdResult<Self, error::Resource> {
        let id = id.into();
        let access_roles = access_roles.into_iter().collect::<IndexSet<_>>();
        if access_roles.is_empty() {
            return Err(error::Resource::EmptyAccessRoles(id));
        }

        if access_roles.contains(&UserRole::Unset) {
            return Err(error::Resource::UnsetAccessRole(id));
        }

        Ok(Self {
            id,
            display_name: display_name.into(),
            status,
            access_roles,
            live_feed: None,
        })
    }

    pub fn with_live_feed(mut self, source: impl Into<String>) -> Self {
        self.live_feed = Some(source.into());
        self
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn status(&self) -> ResourceStatus {
        self.status
    }

    pub fn access_roles(&self) -> &IndexSet<UserRole> {
        &self.access_roles
    }

    pub fn live_feed(&self) -> Option<&str> {
        self.live_feed.as_deref()
    }

    pub fn has_live_feed(&self) -> bool {
        self.live_feed.is_some()
    }

    /// Whether a viewer with `role` may see the resource.
    pub fn is_visible_to(&self, role: UserRole) -> bool {
        self.access_roles.contains(&role)
    }
}

/// Unvalidated form used for deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceRecord {
    id: ResourceId,
    display_name: String,
    status: ResourceStatus,
    access_roles: Vec<UserRole>,

    #[serde(default)]
    live_feed: Option<String>,
}

impl TryFrom<ResourceRecord> for MonitoredResource {
    type Error = error::Resource;

    fn try_from(record: ResourceRecord) -> StdResult<Self, Self::Error> {
        let mut resource = Self::new(
            record.id,
            record.display_name,
            record.status,
            record.access_roles,
        )?;

        resource.live_feed = record.live_feed;
        Ok(resource)
    }
}

#[cfg(test)]
#[path = "./monitored_resource_test.rs"]
mod monitored_resource_test;
