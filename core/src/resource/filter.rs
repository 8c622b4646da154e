//! Role scoped resource visibility.
use super::MonitoredResource;
use crate::role::UserRole;

/// Returns the resources in `catalog` visible to `role`.
///
/// Resources with a live feed come first, ordered by status priority,
/// most urgent first. Resources without a live feed follow in catalog order.
/// Ties keep catalog order.
///
/// [`UserRole::Unset`] sees nothing. An empty result is a normal outcome,
/// to be shown as a "no access" state rather than an error.
pub fn filter_for_role(catalog: &[MonitoredResource], role: UserRole) -> Vec<&MonitoredResource> {
    if !role.is_set() {
        return Vec::new();
    }

    let (mut live, other): (Vec<_>, Vec<_>) = catalog
        .iter()
        .filter(|resource| resource.is_visible_to(role))
        .partition(|resource| resource.has_live_feed());

    // stable sort, ties keep catalog order
    live.sort_by_key(|resource| resource.status().priority());
    live.extend(other);
    live
}

#[cfg(test)]
#[path = "./filter_test.rs"]
mod filter_test;
