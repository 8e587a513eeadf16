use crate::{CoreError, Role};

#[test]
fn given_known_role_string_when_parsed_then_round_trips() {
    for value in ["admin", "manager", "operator", "client"] {
        let role: Role = value.parse().unwrap();
        assert_eq!(role.as_str(), value);
    }
}

#[test]
fn given_unknown_role_string_when_parsed_then_returns_invalid_role() {
    let result = "superuser".parse::<Role>();

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn given_admin_role_when_checked_then_is_admin() {
    assert!(Role::Admin.is_admin());
    assert!(!Role::Operator.is_admin());
}

#[test]
fn given_role_when_serialized_then_uses_snake_case() {
    let json = serde_json::to_string(&Role::Operator).unwrap();

    assert_eq!(json, "\"operator\"");
}
