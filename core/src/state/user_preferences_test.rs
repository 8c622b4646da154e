use super::*;

#[test]
fn default_preferences_should_match_initial_ui() {
    let prefs = UserPreferences::default();
    assert!(prefs.show_notifications, "notifications should be on");
    assert_eq!(ViewMode::Grid, prefs.default_view);
    assert_eq!(1.0, prefs.zoom_level);
}

#[test]
fn apply_should_only_change_patched_fields() {
    let bounds = ZoomBounds::default();
    let mut prefs = UserPreferences::default();
    prefs.apply(UserPreferencesPatch::new().default_view(ViewMode::List), &bounds);

    assert_eq!(ViewMode::List, prefs.default_view);
    assert!(prefs.show_notifications, "notifications should be unchanged");
    assert_eq!(1.0, prefs.zoom_level, "zoom should be unchanged");
}

#[test]
fn apply_should_clamp_zoom() {
    let bounds = ZoomBounds::default();
    let mut prefs = UserPreferences::default();

    prefs.apply(UserPreferencesPatch::new().zoom_level(0.2), &bounds);
    assert_eq!(0.6, prefs.zoom_level);

    prefs.apply(UserPreferencesPatch::new().zoom_level(3.0), &bounds);
    assert_eq!(2.0, prefs.zoom_level);
}

#[test]
fn preferences_should_use_camel_case_keys() {
    let json = serde_json::to_value(UserPreferences::default()).unwrap();
    assert_eq!(
        serde_json::json!({
            "showNotifications": true,
            "defaultView": "grid",
            "zoomLevel": 1.0,
        }),
        json
    );
}

#[test]
fn invalid_zoom_should_deserialize_to_default() {
    let prefs: UserPreferences =
        serde_json::from_str(r#"{ "zoomLevel": "large", "defaultView": "carousel" }"#).unwrap();

    assert_eq!(UserPreferences::default(), prefs);
}

#[test]
fn empty_patch_should_be_empty() {
    assert!(UserPreferencesPatch::new().is_empty());
    assert!(!UserPreferencesPatch::new().show_notifications(false).is_empty());
}
