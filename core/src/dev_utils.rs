//! Utilities for tests.
use crate::error;
use crate::resource::{MonitoredResource, ResourceStatus};
use crate::role::UserRole;
use crate::storage::{self, KeyValueStorage, MemoryStorage};
use fake::faker::name::raw::LastName;
use fake::locales::EN;
use fake::Fake;
use std::cell::Cell;
use std::rc::Rc;

/// Storage that can be switched to fail writes, e.g. a full quota.
/// Reads always fail when created with [`FailingStorage::new`].
#[derive(Clone, Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
    fail_reads: bool,
    fail_writes: Rc<Cell<bool>>,
}

impl FailingStorage {
    /// Storage where every operation fails.
    pub fn new() -> Self {
        Self {
            inner: MemoryStorage::new(),
            fail_reads: true,
            fail_writes: Rc::new(Cell::new(true)),
        }
    }

    /// Working storage whose writes can be made to fail later.
    pub fn writable(inner: MemoryStorage) -> Self {
        Self {
            inner,
            fail_reads: false,
            fail_writes: Rc::new(Cell::new(false)),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStorage for FailingStorage {
    fn get(&self, key: &str) -> storage::Result<Option<String>> {
        if self.fail_reads {
            return Err(error::Storage::Unavailable("reads disabled".to_string()));
        }

        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> storage::Result {
        if self.fail_writes.get() {
            return Err(error::Storage::QuotaExceeded);
        }

        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> storage::Result {
        if self.fail_writes.get() {
            return Err(error::Storage::Unavailable("writes disabled".to_string()));
        }

        self.inner.remove(key)
    }
}

/// Creates a resource with a generated display name.
pub fn resource(
    id: &str,
    status: ResourceStatus,
    roles: &[UserRole],
    live_feed: bool,
) -> MonitoredResource {
    let name: String = LastName(EN).fake();
    let mut resource =
        MonitoredResource::new(id, format!("{name} ward"), status, roles.iter().copied())
            .expect("valid access roles");

    if live_feed {
        resource = resource.with_live_feed(format!("/videos/room{id}.webm"));
    }

    resource
}
