use crate::{CoreError, OccurrenceStatus};

#[test]
fn given_known_status_string_when_parsed_then_round_trips() {
    for value in ["em_andamento", "aguardando", "concluida", "cancelada"] {
        let status: OccurrenceStatus = value.parse().unwrap();
        assert_eq!(status.as_str(), value);
    }
}

#[test]
fn given_unknown_status_string_when_parsed_then_returns_error() {
    let result = "arquivada".parse::<OccurrenceStatus>();

    assert!(matches!(
        result,
        Err(CoreError::InvalidOccurrenceStatus { .. })
    ));
}

#[test]
fn given_terminal_statuses_when_checked_then_is_terminal() {
    assert!(OccurrenceStatus::Concluida.is_terminal());
    assert!(OccurrenceStatus::Cancelada.is_terminal());
    assert!(!OccurrenceStatus::EmAndamento.is_terminal());
    assert!(!OccurrenceStatus::Aguardando.is_terminal());
}
