use super::*;
use crate::state::{ConditionFilter, StaffRoleFilter, ViewMode};

#[test]
fn default_state_should_serialize_to_original_shape() {
    let json = serde_json::to_value(ApplicationState::default()).unwrap();
    assert_eq!(
        serde_json::json!({
            "theme": "light",
            "userPreferences": {
                "showNotifications": true,
                "defaultView": "grid",
                "zoomLevel": 1.0,
            },
            "filters": {
                "selectedRole": "all",
                "selectedStatus": "all",
                "selectedCondition": "all",
                "showUnderstaffed": false,
            },
        }),
        json
    );
}

#[test]
fn state_from_older_client_should_fill_missing_fields() {
    let state: ApplicationState = serde_json::from_str(
        r#"{ "theme": "dark", "userPreferences": { "zoomLevel": 1.4 } }"#,
    )
    .unwrap();

    assert_eq!(Theme::Dark, state.theme);
    assert_eq!(1.4, state.user_preferences.zoom_level);
    assert!(state.user_preferences.show_notifications);
    assert_eq!(Filters::default(), state.filters);
    assert_eq!(None, state.last_viewed_room);
}

#[test]
fn invalid_sub_record_should_default_alone() {
    let state: ApplicationState = serde_json::from_str(
        r#"{ "theme": "sepia", "filters": 12, "lastViewedRoom": "105" }"#,
    )
    .unwrap();

    assert_eq!(Theme::Light, state.theme);
    assert_eq!(Filters::default(), state.filters);
    assert_eq!(Some("105".to_string()), state.last_viewed_room);
}

#[test]
fn apply_should_replace_sub_records_and_clamp() {
    let bounds = ZoomBounds::default();
    let mut state = ApplicationState::default();
    state.apply_filters(FiltersPatch::new().selected_role(StaffRoleFilter::Doctor));

    let preferences = UserPreferences {
        show_notifications: false,
        default_view: ViewMode::List,
        zoom_level: 9.0,
    };

    state.apply(
        ApplicationStatePatch::new()
            .theme(Theme::Dark)
            .user_preferences(preferences),
        &bounds,
    );

    assert_eq!(Theme::Dark, state.theme);
    assert_eq!(ViewMode::List, state.user_preferences.default_view);
    assert_eq!(2.0, state.user_preferences.zoom_level, "zoom should be clamped");
    assert_eq!(
        StaffRoleFilter::Doctor,
        state.filters.selected_role,
        "filters should be untouched"
    );
}

#[test]
fn apply_should_set_and_clear_last_viewed_room() {
    let bounds = ZoomBounds::default();
    let mut state = ApplicationState::default();

    state.apply(
        ApplicationStatePatch::new().last_viewed_room(Some("101".to_string())),
        &bounds,
    );
    assert_eq!(Some("101".to_string()), state.last_viewed_room);

    state.apply(ApplicationStatePatch::new(), &bounds);
    assert_eq!(
        Some("101".to_string()),
        state.last_viewed_room,
        "empty patch should not clear room"
    );

    state.apply(ApplicationStatePatch::new().last_viewed_room(None), &bounds);
    assert_eq!(None, state.last_viewed_room);
}

#[test]
fn apply_filters_should_leave_preferences() {
    let mut state = ApplicationState::default();
    state.apply_filters(FiltersPatch::new().selected_condition(ConditionFilter::Stable));

    assert_eq!(UserPreferences::default(), state.user_preferences);
    assert_eq!(ConditionFilter::Stable, state.filters.selected_condition);
}

#[test]
fn theme_toggled_should_flip() {
    assert_eq!(Theme::Dark, Theme::Light.toggled());
    assert_eq!(Theme::Light, Theme::Dark.toggled());
}
