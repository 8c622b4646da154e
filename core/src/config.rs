//! Store configuration.
use crate::constants::{APP_STATE_KEY, USER_ROLE_KEY, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN};
use crate::error;
use serde::{Deserialize, Serialize};
use std::result::Result as StdResult;

/// Allowed range of the zoom level.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(default)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl ZoomBounds {
    /// # Errors
    /// + [`error::Config::InvalidZoomBounds`] if either bound is not finite,
    /// `min` is not positive, or `min > max`.
    pub fn new(min: f64, max: f64) -> StdResult<Self, error::Config> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> StdResult<(), error::Config> {
        let valid = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min <= self.max;

        if valid {
            Ok(())
        } else {
            Err(error::Config::InvalidZoomBounds {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Clamps `zoom` into the bounds.
    /// `NaN` is replaced by the default zoom level.
    pub fn clamp(&self, zoom: f64) -> f64 {
        let zoom = if zoom.is_nan() { ZOOM_DEFAULT } else { zoom };
        zoom.clamp(self.min, self.max)
    }

    pub fn contains(&self, zoom: f64) -> bool {
        self.min <= zoom && zoom <= self.max
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: ZOOM_MIN,
            max: ZOOM_MAX,
        }
    }
}

/// Configuration shared by the [`AppStateStore`](crate::store::AppStateStore)
/// and [`RoleContext`](crate::role::RoleContext).
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Storage key of the application state.
    pub state_key: String,

    /// Storage key of the user role.
    pub role_key: String,

    pub zoom: ZoomBounds,
}

impl StoreConfig {
    /// Parses and validates a JSON config.
    /// Missing fields take their default.
    pub fn from_json(json: &str) -> StdResult<Self, error::Config> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| error::Config::Parse(err.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// + [`error::Config::EmptyKey`] if a storage key is empty.
    /// + [`error::Config::DuplicateKey`] if state and role share a key.
    /// + [`error::Config::InvalidZoomBounds`] if the zoom bounds are invalid.
    pub fn validate(&self) -> StdResult<(), error::Config> {
        if self.state_key.is_empty() || self.role_key.is_empty() {
            return Err(error::Config::EmptyKey);
        }

        if self.state_key == self.role_key {
            return Err(error::Config::DuplicateKey(self.state_key.clone()));
        }

        self.zoom.validate()
    }

    /// Returns `self` if valid, otherwise logs the error and returns the default config.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                tracing::error!(?err, "invalid store config, using default");
                Self::default()
            }
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            state_key: APP_STATE_KEY.to_string(),
            role_key: USER_ROLE_KEY.to_string(),
            zoom: ZoomBounds::default(),
        }
    }
}

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;
