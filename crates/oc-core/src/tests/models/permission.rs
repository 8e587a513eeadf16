use crate::{Action, CoreError, Permission, Resource};

#[test]
fn given_action_and_resource_when_rendered_then_uses_colon_form() {
    let permission = Permission::new(Action::Update, Resource::Ocorrencia);

    assert_eq!(permission.as_string(), "update:ocorrencia");
    assert_eq!(permission.to_string(), "update:ocorrencia");
}

#[test]
fn given_colon_form_when_parsed_then_round_trips() {
    let permission: Permission = "upload:foto".parse().unwrap();

    assert_eq!(permission.action, Action::Upload);
    assert_eq!(permission.resource, Resource::Foto);
}

#[test]
fn given_missing_colon_when_parsed_then_returns_invalid_permission() {
    let result = "read".parse::<Permission>();

    assert!(matches!(result, Err(CoreError::InvalidPermission { .. })));
}

#[test]
fn given_unknown_action_when_parsed_then_returns_invalid_action() {
    let result = "destroy:ocorrencia".parse::<Permission>();

    assert!(matches!(result, Err(CoreError::InvalidAction { .. })));
}

#[test]
fn given_unknown_resource_when_parsed_then_returns_invalid_resource() {
    let result = "read:veiculo".parse::<Permission>();

    assert!(matches!(result, Err(CoreError::InvalidResource { .. })));
}
