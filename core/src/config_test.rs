use super::*;

#[test]
fn default_config_should_use_fixed_keys() {
    let config = StoreConfig::default();
    assert_eq!("appState", config.state_key);
    assert_eq!("userRole", config.role_key);
    assert_eq!(ZoomBounds { min: 0.6, max: 2.0 }, config.zoom);
}

#[test]
fn clamp_should_keep_zoom_in_bounds() {
    let bounds = ZoomBounds::default();

    assert_eq!(0.6, bounds.clamp(0.1));
    assert_eq!(2.0, bounds.clamp(7.5));
    assert_eq!(1.25, bounds.clamp(1.25));
    assert_eq!(2.0, bounds.clamp(f64::INFINITY));
    assert_eq!(0.6, bounds.clamp(f64::NEG_INFINITY));
    assert_eq!(1.0, bounds.clamp(f64::NAN), "NaN should become the default");
}

#[test]
fn clamp_should_pull_default_into_custom_bounds() {
    let bounds = ZoomBounds::new(1.5, 3.0).unwrap();
    assert_eq!(1.5, bounds.clamp(f64::NAN));
}

#[test]
fn zoom_bounds_new_should_reject_invalid_bounds() {
    assert!(ZoomBounds::new(2.0, 1.0).is_err(), "min > max should fail");
    assert!(ZoomBounds::new(0.0, 1.0).is_err(), "zero min should fail");
    assert!(ZoomBounds::new(f64::NAN, 1.0).is_err(), "NaN should fail");
    assert!(ZoomBounds::new(1.0, 1.0).is_ok(), "equal bounds are allowed");
}

#[test]
fn from_json_should_fill_missing_fields() {
    let config = StoreConfig::from_json(r#"{ "stateKey": "ward-3" }"#).unwrap();
    assert_eq!("ward-3", config.state_key);
    assert_eq!("userRole", config.role_key);
    assert_eq!(ZoomBounds::default(), config.zoom);
}

#[test]
fn from_json_should_reject_invalid_config() {
    assert!(matches!(
        StoreConfig::from_json(r#"{ "roleKey": "" }"#),
        Err(error::Config::EmptyKey)
    ));

    assert!(matches!(
        StoreConfig::from_json(r#"{ "zoom": { "min": 3.0 } }"#),
        Err(error::Config::InvalidZoomBounds { .. })
    ));

    assert!(matches!(
        StoreConfig::from_json("not json"),
        Err(error::Config::Parse(_))
    ));
}

#[test]
fn validate_should_reject_shared_storage_key() {
    let mut config = StoreConfig::default();
    config.role_key = config.state_key.clone();

    assert_eq!(
        Err(error::Config::DuplicateKey("appState".to_string())),
        config.validate()
    );
    assert!(matches!(
        StoreConfig::from_json(r#"{ "stateKey": "ward", "roleKey": "ward" }"#),
        Err(error::Config::DuplicateKey(_))
    ));
}

#[test]
fn validated_or_default_should_replace_invalid_config() {
    let mut config = StoreConfig::default();
    config.state_key = "ward-3".to_string();
    assert_eq!(config.clone(), config.clone().validated_or_default());

    config.role_key = "ward-3".to_string();
    assert_eq!(StoreConfig::default(), config.validated_or_default());
}
