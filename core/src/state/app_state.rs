//! Application state.
use super::filters::{Filters, FiltersPatch};
use super::lenient;
use super::user_preferences::{UserPreferences, UserPreferencesPatch};
use crate::config::ZoomBounds;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Cross page UI state.
///
/// Serialized as camelCase JSON under the `appState` storage key.
/// Every field has a default, so data persisted by other client
/// versions always loads.
#[derive(Serialize, Deserialize, Clone, PartialEq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationState {
    #[serde(deserialize_with = "lenient::or_default")]
    pub theme: Theme,

    #[serde(deserialize_with = "lenient::or_default")]
    pub user_preferences: UserPreferences,

    /// Most recently opened room.
    #[serde(
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_viewed_room: Option<String>,

    #[serde(deserialize_with = "lenient::or_default")]
    pub filters: Filters,
}

impl ApplicationState {
    /// Shallow merge of `patch`.
    /// Sub-records in the patch replace the current ones entirely.
    pub fn apply(&mut self, patch: ApplicationStatePatch, bounds: &ZoomBounds) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }

        if let Some(mut preferences) = patch.user_preferences {
            preferences.normalize(bounds);
            self.user_preferences = preferences;
        }

        if let Some(room) = patch.last_viewed_room {
            self.last_viewed_room = room;
        }

        if let Some(filters) = patch.filters {
            self.filters = filters;
        }
    }

    pub fn apply_user_preferences(&mut self, patch: UserPreferencesPatch, bounds: &ZoomBounds) {
        self.user_preferences.apply(patch, bounds);
    }

    pub fn apply_filters(&mut self, patch: FiltersPatch) {
        self.filters.apply(patch);
    }

    /// Enforces invariants on data that did not pass through a patch.
    pub fn normalize(&mut self, bounds: &ZoomBounds) {
        self.user_preferences.normalize(bounds);
    }
}

/// Partial update of the top level of [`ApplicationState`].
/// `None` leaves the field unchanged.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ApplicationStatePatch {
    pub theme: Option<Theme>,
    pub user_preferences: Option<UserPreferences>,

    /// `Some(None)` clears the last viewed room.
    pub last_viewed_room: Option<Option<String>>,

    pub filters: Option<Filters>,
}

impl ApplicationStatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn user_preferences(mut self, preferences: UserPreferences) -> Self {
        self.user_preferences = Some(preferences);
        self
    }

    pub fn last_viewed_room(mut self, room: Option<String>) -> Self {
        self.last_viewed_room = Some(room);
        self
    }

    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = Some(filters);
        self
    }
}

#[cfg(test)]
#[path = "./app_state_test.rs"]
mod app_state_test;
