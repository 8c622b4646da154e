//! Application state tree and its typed patches.
pub mod app_state;
pub mod filters;
pub mod lenient;
pub mod user_preferences;

// Re-exports
pub use app_state::{ApplicationState, ApplicationStatePatch, Theme};
pub use filters::{ConditionFilter, Filters, FiltersPatch, StaffRoleFilter, StatusFilter};
pub use user_preferences::{UserPreferences, UserPreferencesPatch, ViewMode};
