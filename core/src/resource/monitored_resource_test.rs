use super::*;

#[test]
fn new_should_reject_empty_access_roles() {
    let res = MonitoredResource::new("101", "Room 101", ResourceStatus::Stable, Vec::new());
    assert_eq!(
        Err(error::Resource::EmptyAccessRoles(ResourceId::from("101"))),
        res
    );
}

#[test]
fn new_should_reject_unset_access_role() {
    let res = MonitoredResource::new(
        "101",
        "Room 101",
        ResourceStatus::Stable,
        [UserRole::Customer, UserRole::Unset],
    );

    assert!(matches!(res, Err(error::Resource::UnsetAccessRole(_))));
}

#[test]
fn new_should_deduplicate_access_roles() {
    let resource = MonitoredResource::new(
        "102",
        "Room 102",
        ResourceStatus::Check,
        [UserRole::Customer, UserRole::Customer],
    )
    .unwrap();

    assert_eq!(1, resource.access_roles().len());
    assert!(resource.is_visible_to(UserRole::Customer));
    assert!(!resource.is_visible_to(UserRole::HealthcareProvider));
    assert!(!resource.is_visible_to(UserRole::Unset));
}

#[test]
fn deserialize_should_validate_access_roles() {
    let json = r#"{
        "id": "103",
        "displayName": "Room 103",
        "status": "urgent",
        "accessRoles": []
    }"#;

    assert!(serde_json::from_str::<MonitoredResource>(json).is_err());
}

#[test]
fn deserialize_should_read_live_feed() {
    let json = r#"{
        "id": "104",
        "displayName": "Room 104",
        "status": "urgent",
        "accessRoles": ["healthcareProvider"],
        "liveFeed": "/videos/room104.webm"
    }"#;

    let resource: MonitoredResource = serde_json::from_str(json).unwrap();
    assert_eq!(Some("/videos/room104.webm"), resource.live_feed());
    assert_eq!(ResourceStatus::Urgent, resource.status());
    assert_eq!("Room 104", resource.display_name());
}

#[test]
fn serialize_should_omit_missing_live_feed() {
    let resource = MonitoredResource::new(
        "105",
        "Room 105",
        ResourceStatus::Alerted,
        [UserRole::HealthcareProvider],
    )
    .unwrap();

    assert_eq!(
        serde_json::json!({
            "id": "105",
            "displayName": "Room 105",
            "status": "alerted",
            "accessRoles": ["healthcareProvider"],
        }),
        serde_json::to_value(&resource).unwrap()
    );
}
