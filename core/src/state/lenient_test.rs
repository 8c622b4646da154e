use super::*;
use serde::Deserialize;

#[derive(Deserialize, Default, PartialEq, Debug)]
#[serde(default)]
struct Record {
    #[serde(deserialize_with = "or_default")]
    count: u32,

    #[serde(deserialize_with = "or_default")]
    label: Option<String>,
}

#[test]
fn or_default_should_keep_valid_values() {
    let record: Record = serde_json::from_str(r#"{ "count": 3, "label": "a" }"#).unwrap();
    assert_eq!(3, record.count);
    assert_eq!(Some("a".to_string()), record.label);
}

#[test]
fn or_default_should_replace_invalid_values() {
    let record: Record = serde_json::from_str(r#"{ "count": "three", "label": 4 }"#).unwrap();
    assert_eq!(Record::default(), record);
}

#[test]
fn or_default_should_not_affect_missing_or_unknown_fields() {
    let record: Record = serde_json::from_str(r#"{ "extra": true, "count": 2 }"#).unwrap();
    assert_eq!(2, record.count);
    assert_eq!(None, record.label);
}
