use crate::permission_evaluator::authorize;
use crate::{AuthError, Identity};

use oc_core::{Permission, Role};

use serde_json::{Value, json};

fn identity(role: Role, permissions: Value) -> Identity {
    Identity {
        subject_id: "user-123".to_string(),
        name: "Maria Souza".to_string(),
        role,
        permissions,
    }
}

fn perm(s: &str) -> Permission {
    s.parse().unwrap()
}

#[test]
fn given_admin_when_authorized_then_allows_regardless_of_permission_set() {
    for permissions in [
        json!([]),
        json!(["read:ocorrencia"]),
        json!("totally broken"),
        Value::Null,
    ] {
        let identity = identity(Role::Admin, permissions);

        for required in ["read:ocorrencia", "delete:admin", "upload:foto"] {
            assert!(authorize(&identity, &perm(required)).unwrap());
        }
    }
}

#[test]
fn given_list_shape_when_authorized_then_membership_decides() {
    let identity = identity(Role::Operator, json!(["read:ocorrencia"]));

    assert!(authorize(&identity, &perm("read:ocorrencia")).unwrap());
    assert!(!authorize(&identity, &perm("create:ocorrencia")).unwrap());
}

#[test]
fn given_map_shape_when_authorized_then_capability_flag_decides() {
    let identity = identity(
        Role::Operator,
        json!({
            "ocorrencia": { "read": true, "create": false, "update": false, "delete": false }
        }),
    );

    assert!(authorize(&identity, &perm("read:ocorrencia")).unwrap());
    assert!(!authorize(&identity, &perm("create:ocorrencia")).unwrap());
}

#[test]
fn given_equivalent_sets_in_both_shapes_when_authorized_then_decisions_agree() {
    let list = identity(Role::Client, json!(["read:ocorrencia", "upload:foto"]));
    let map = identity(
        Role::Client,
        json!({
            "ocorrencia": { "read": true },
            "foto": { "upload": true }
        }),
    );

    for required in [
        "read:ocorrencia",
        "create:ocorrencia",
        "upload:foto",
        "delete:foto",
    ] {
        assert_eq!(
            authorize(&list, &perm(required)).unwrap(),
            authorize(&map, &perm(required)).unwrap(),
            "shapes disagree on {required}"
        );
    }
}

#[test]
fn given_non_admin_with_malformed_set_when_authorized_then_distinct_error() {
    for permissions in [json!("raw string"), json!(42), Value::Null] {
        let identity = identity(Role::Manager, permissions);

        let result = authorize(&identity, &perm("read:ocorrencia"));

        assert!(matches!(
            result,
            Err(AuthError::MalformedPermissionSet { .. })
        ));
    }
}
