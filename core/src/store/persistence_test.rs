use super::*;
use crate::dev_utils::FailingStorage;
use crate::state::Theme;
use crate::storage::MemoryStorage;

#[test]
fn load_state_should_default_when_missing() {
    let storage = MemoryStorage::new();
    let state = load_state(&storage, &StoreConfig::default());
    assert_eq!(ApplicationState::default(), state);
}

#[test]
fn load_state_should_default_when_corrupted() {
    let config = StoreConfig::default();
    for corrupted in ["", "{", "null", "\"dark\"", "[1, 2]", "{\"theme\": }"] {
        let storage = MemoryStorage::with_entries([("appState", corrupted)]);
        assert_eq!(
            ApplicationState::default(),
            load_state(&storage, &config),
            "`{corrupted}` should load as default"
        );
    }
}

#[test]
fn load_state_should_default_when_storage_unreadable() {
    let storage = FailingStorage::new();
    let state = load_state(&storage, &StoreConfig::default());
    assert_eq!(ApplicationState::default(), state);
}

#[test]
fn load_state_should_clamp_saved_zoom() {
    let storage = MemoryStorage::with_entries([(
        "appState",
        r#"{ "userPreferences": { "zoomLevel": 12 } }"#,
    )]);

    let state = load_state(&storage, &StoreConfig::default());
    assert_eq!(2.0, state.user_preferences.zoom_level);
}

#[test]
fn save_then_load_state_should_round_trip() {
    let storage = MemoryStorage::new();
    let config = StoreConfig::default();
    let mut state = ApplicationState::default();
    state.theme = Theme::Dark;
    state.last_viewed_room = Some("108".to_string());

    save_state(&storage, &config, &state).unwrap();
    assert_eq!(state, load_state(&storage, &config));
}

#[test]
fn role_should_persist_as_plain_string() {
    let storage = MemoryStorage::new();
    let config = StoreConfig::default();

    save_role(&storage, &config, UserRole::HealthcareProvider).unwrap();
    assert_eq!(
        Some("healthcareProvider".to_string()),
        storage.get("userRole").unwrap()
    );

    save_role(&storage, &config, UserRole::Unset).unwrap();
    assert_eq!(Some(String::new()), storage.get("userRole").unwrap());
}

#[test]
fn load_role_should_default_to_unset() {
    let config = StoreConfig::default();
    assert_eq!(UserRole::Unset, load_role(&MemoryStorage::new(), &config));

    let storage = MemoryStorage::with_entries([("userRole", "nurse")]);
    assert_eq!(UserRole::Unset, load_role(&storage, &config));

    let storage = MemoryStorage::with_entries([("userRole", "customer")]);
    assert_eq!(UserRole::Customer, load_role(&storage, &config));
}
