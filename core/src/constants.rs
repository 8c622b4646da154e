//! Constant values.

/// Storage key of the serialized [`ApplicationState`](crate::state::ApplicationState).
pub static APP_STATE_KEY: &str = "appState";

/// Storage key of the persisted [`UserRole`](crate::role::UserRole).
pub static USER_ROLE_KEY: &str = "userRole";

/// Smallest allowed zoom level.
pub static ZOOM_MIN: f64 = 0.6;

/// Largest allowed zoom level.
pub static ZOOM_MAX: f64 = 2.0;

/// Zoom level used when none, or an invalid one, is set.
pub static ZOOM_DEFAULT: f64 = 1.0;

/// Number of camera feeds shown on one dashboard page.
pub static DEFAULT_FEEDS_PER_PAGE: usize = 9;
