//! Filter selections shared between the staffing and alert views.
use super::lenient;
use crate::resource::ResourceStatus;
use serde::{Deserialize, Serialize};

/// Staff role to filter by. Distinct from the viewer's [`UserRole`](crate::role::UserRole).
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum StaffRoleFilter {
    #[default]
    All,
    Doctor,
    Nurse,
    Assistant,
    Specialist,
}

/// Alert resolution status to filter by.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Resolved,
    Unresolved,
}

/// Patient condition to filter by.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ConditionFilter {
    #[default]
    All,
    Stable,
    NeedsAttention,
    Critical,
}

impl ConditionFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Stable, Self::NeedsAttention, Self::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Stable => "stable",
            Self::NeedsAttention => "needs_attention",
            Self::Critical => "critical",
        }
    }

    /// Parses the serialized tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|condition| condition.as_str() == tag)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All conditions",
            Self::Stable => "Stable",
            Self::NeedsAttention => "Needs attention",
            Self::Critical => "Critical",
        }
    }

    /// Whether a room with `status` passes the filter.
    /// `check` and `alerted` rooms need attention, `urgent` rooms are critical.
    pub fn matches(&self, status: ResourceStatus) -> bool {
        match self {
            Self::All => true,
            Self::Stable => status == ResourceStatus::Stable,
            Self::NeedsAttention => {
                matches!(status, ResourceStatus::Check | ResourceStatus::Alerted)
            }
            Self::Critical => status == ResourceStatus::Urgent,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct Filters {
    #[serde(deserialize_with = "lenient::or_default")]
    pub selected_role: StaffRoleFilter,

    #[serde(deserialize_with = "lenient::or_default")]
    pub selected_status: StatusFilter,

    #[serde(deserialize_with = "lenient::or_default")]
    pub selected_condition: ConditionFilter,

    /// Only show rooms with fewer staff present than assigned.
    #[serde(deserialize_with = "lenient::or_default")]
    pub show_understaffed: bool,
}

impl Filters {
    /// Merges the fields set in `patch`.
    pub fn apply(&mut self, patch: FiltersPatch) {
        if let Some(role) = patch.selected_role {
            self.selected_role = role;
        }

        if let Some(status) = patch.selected_status {
            self.selected_status = status;
        }

        if let Some(condition) = patch.selected_condition {
            self.selected_condition = condition;
        }

        if let Some(show) = patch.show_understaffed {
            self.show_understaffed = show;
        }
    }

    /// Returns `true` if no filter is active.
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

/// Partial update of [`Filters`].
/// `None` leaves the field unchanged.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct FiltersPatch {
    pub selected_role: Option<StaffRoleFilter>,
    pub selected_status: Option<StatusFilter>,
    pub selected_condition: Option<ConditionFilter>,
    pub show_understaffed: Option<bool>,
}

impl FiltersPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_role(mut self, role: StaffRoleFilter) -> Self {
        self.selected_role = Some(role);
        self
    }

    pub fn selected_status(mut self, status: StatusFilter) -> Self {
        self.selected_status = Some(status);
        self
    }

    pub fn selected_condition(mut self, condition: ConditionFilter) -> Self {
        self.selected_condition = Some(condition);
        self
    }

    pub fn show_understaffed(mut self, show: bool) -> Self {
        self.show_understaffed = Some(show);
        self
    }

    /// Patch that clears every filter.
    pub fn clear() -> Self {
        let defaults = Filters::default();
        Self {
            selected_role: Some(defaults.selected_role),
            selected_status: Some(defaults.selected_status),
            selected_condition: Some(defaults.selected_condition),
            show_understaffed: Some(defaults.show_understaffed),
        }
    }
}

#[cfg(test)]
#[path = "./filters_test.rs"]
mod filters_test;
