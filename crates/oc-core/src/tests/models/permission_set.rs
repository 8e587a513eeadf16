use crate::{CoreError, Permission, PermissionSet};

use serde_json::json;

fn read_ocorrencia() -> Permission {
    "read:ocorrencia".parse().unwrap()
}

fn create_ocorrencia() -> Permission {
    "create:ocorrencia".parse().unwrap()
}

#[test]
fn given_string_list_when_normalized_then_yields_list_shape() {
    let value = json!(["read:ocorrencia", "upload:foto"]);

    let set = PermissionSet::from_value(&value).unwrap();

    assert!(matches!(set, PermissionSet::List(ref entries) if entries.len() == 2));
}

#[test]
fn given_list_shape_when_queried_then_membership_decides() {
    let value = json!(["read:ocorrencia"]);
    let set = PermissionSet::from_value(&value).unwrap();

    assert!(set.allows(&read_ocorrencia()));
    assert!(!set.allows(&create_ocorrencia()));
}

#[test]
fn given_capability_map_when_queried_then_record_flag_decides() {
    let value = json!({
        "ocorrencia": { "read": true, "create": false, "update": false, "delete": false }
    });
    let set = PermissionSet::from_value(&value).unwrap();

    assert!(set.allows(&read_ocorrencia()));
    assert!(!set.allows(&create_ocorrencia()));
}

#[test]
fn given_both_shapes_with_equivalent_grants_then_they_agree() {
    let list = PermissionSet::from_value(&json!(["read:ocorrencia"])).unwrap();
    let map = PermissionSet::from_value(&json!({
        "ocorrencia": { "read": true }
    }))
    .unwrap();

    for required in [read_ocorrencia(), create_ocorrencia()] {
        assert_eq!(list.allows(&required), map.allows(&required));
    }
}

#[test]
fn given_map_without_resource_entry_when_queried_then_denies() {
    let set = PermissionSet::from_value(&json!({
        "foto": { "read": true }
    }))
    .unwrap();

    assert!(!set.allows(&read_ocorrencia()));
}

#[test]
fn given_map_record_without_upload_flag_when_upload_queried_then_denies() {
    let set = PermissionSet::from_value(&json!({
        "foto": { "read": true, "create": true }
    }))
    .unwrap();

    assert!(!set.allows(&"upload:foto".parse().unwrap()));
}

#[test]
fn given_raw_string_value_when_normalized_then_malformed() {
    let result = PermissionSet::from_value(&json!("read:ocorrencia"));

    assert!(matches!(
        result,
        Err(CoreError::MalformedPermissionSet { .. })
    ));
}

#[test]
fn given_list_with_non_string_entry_when_normalized_then_malformed() {
    let result = PermissionSet::from_value(&json!(["read:ocorrencia", 42]));

    assert!(matches!(
        result,
        Err(CoreError::MalformedPermissionSet { .. })
    ));
}

#[test]
fn given_map_with_non_record_value_when_normalized_then_malformed() {
    let result = PermissionSet::from_value(&json!({ "ocorrencia": "read" }));

    assert!(matches!(
        result,
        Err(CoreError::MalformedPermissionSet { .. })
    ));
}

#[test]
fn given_null_value_when_normalized_then_malformed() {
    let result = PermissionSet::from_value(&serde_json::Value::Null);

    assert!(matches!(
        result,
        Err(CoreError::MalformedPermissionSet { .. })
    ));
}
