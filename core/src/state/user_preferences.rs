//! User interface preferences.
use super::lenient;
use crate::config::ZoomBounds;
use crate::constants::ZOOM_DEFAULT;
use serde::{Deserialize, Serialize};

/// Layout used when a resource listing is first shown.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(deserialize_with = "lenient::or_default")]
    pub show_notifications: bool,

    #[serde(deserialize_with = "lenient::or_default")]
    pub default_view: ViewMode,

    /// Always within the store's [`ZoomBounds`] once applied.
    #[serde(deserialize_with = "zoom_or_default")]
    pub zoom_level: f64,
}

impl UserPreferences {
    /// Merges the fields set in `patch`.
    /// The zoom level is clamped to `bounds`.
    pub fn apply(&mut self, patch: UserPreferencesPatch, bounds: &ZoomBounds) {
        if let Some(show_notifications) = patch.show_notifications {
            self.show_notifications = show_notifications;
        }

        if let Some(default_view) = patch.default_view {
            self.default_view = default_view;
        }

        if let Some(zoom_level) = patch.zoom_level {
            self.zoom_level = bounds.clamp(zoom_level);
        }
    }

    /// Brings a loaded or replaced record back within `bounds`.
    pub fn normalize(&mut self, bounds: &ZoomBounds) {
        self.zoom_level = bounds.clamp(self.zoom_level);
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            show_notifications: true,
            default_view: ViewMode::Grid,
            zoom_level: ZOOM_DEFAULT,
        }
    }
}

fn zoom_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(transparent)]
    struct Zoom(f64);

    impl Default for Zoom {
        fn default() -> Self {
            Self(ZOOM_DEFAULT)
        }
    }

    lenient::or_default::<D, Zoom>(deserializer).map(|zoom| zoom.0)
}

/// Partial update of [`UserPreferences`].
/// `None` leaves the field unchanged.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct UserPreferencesPatch {
    pub show_notifications: Option<bool>,
    pub default_view: Option<ViewMode>,
    pub zoom_level: Option<f64>,
}

impl UserPreferencesPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_notifications(mut self, show: bool) -> Self {
        self.show_notifications = Some(show);
        self
    }

    pub fn default_view(mut self, view: ViewMode) -> Self {
        self.default_view = Some(view);
        self
    }

    pub fn zoom_level(mut self, zoom: f64) -> Self {
        self.zoom_level = Some(zoom);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
#[path = "./user_preferences_test.rs"]
mod user_preferences_test;
