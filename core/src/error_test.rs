use super::*;

#[test]
fn error_from_invalid_role_should_work() {
    let err: Error = InvalidRole::new("nurse").into();
    assert!(matches!(err, Error::InvalidRole(_)));
    assert_eq!("invalid role `nurse`", err.to_string());
}

#[test]
fn error_from_storage_error_should_work() {
    let err: Error = Storage::QuotaExceeded.into();
    assert!(matches!(err, Error::Storage(Storage::QuotaExceeded)));
}

#[test]
fn resource_error_should_name_resource() {
    let err = Resource::EmptyAccessRoles(ResourceId::from("room-101"));
    assert_eq!("resource `room-101` has no access roles", err.to_string());
}
