use idcodable::{DecodeError, Registry, RegistrationConflict};
use tracing_test::traced_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Letter {
    A,
    B,
    C,
}

fn letters() -> Registry<Letter, String> {
    Registry::build([
        (Letter::A, "ID_A", "alpha".to_string()),
        (Letter::B, "ID_B", "bravo".to_string()),
        (Letter::C, "ID_C", "charlie".to_string()),
    ])
    .unwrap()
}

#[test]
fn round_trip_by_id() {
    let registry = letters();
    for &case in registry.cases() {
        assert_eq!(registry.case_for_id(registry.id_for(case)), Some(case));
    }
}

#[test]
fn round_trip_by_payload() {
    let registry = letters();
    for &case in registry.cases() {
        assert_eq!(registry.case_for_payload(registry.payload_for(case)), Some(case));
    }
}

#[test]
fn totality() {
    let registry = letters();
    assert_eq!(registry.cases(), [Letter::A, Letter::B, Letter::C]);
    assert_eq!(registry.len(), 3);
    for &case in registry.cases() {
        assert!(!registry.id_for(case).is_empty());
        assert!(!registry.payload_for(case).is_empty());
    }
}

#[test]
fn duplicate_id() {
    let result = Registry::build([(Letter::A, "X", 1), (Letter::B, "X", 2)]);
    assert_eq!(
        result.unwrap_err(),
        RegistrationConflict::DuplicateId {
            id: "X".to_string(),
            first: "A".to_string(),
            second: "B".to_string(),
        }
    );
}

#[test]
fn duplicate_payload() {
    let result = Registry::build([(Letter::A, "X", 1), (Letter::B, "Y", 1)]);
    assert_eq!(
        result.unwrap_err(),
        RegistrationConflict::DuplicatePayload {
            payload: "1".to_string(),
            first: "A".to_string(),
            second: "B".to_string(),
        }
    );
}

#[test]
fn duplicate_case() {
    let result = Registry::build([(Letter::A, "X", 1), (Letter::A, "Y", 2)]);
    assert_eq!(
        result.unwrap_err(),
        RegistrationConflict::DuplicateCase {
            case: "A".to_string()
        }
    );
}

#[test]
fn empty_id() {
    let result = Registry::build([(Letter::A, "X", 1), (Letter::B, "", 2)]);
    let conflict = result.unwrap_err();
    assert_eq!(
        conflict,
        RegistrationConflict::EmptyId {
            case: "B".to_string()
        }
    );
    assert_eq!(conflict.to_string(), "case B has an empty id");
}

#[test]
fn empty_never_matches() {
    let registry = letters();
    assert_eq!(registry.case_for_id(""), None);
    assert_eq!(registry.case_for_payload(&String::new()), None);

    assert_eq!(registry.decode_id(""), Err(DecodeError::EmptyValue));
    assert_eq!(
        registry.decode_payload(&String::new()),
        Err(DecodeError::EmptyValue)
    );
}

#[test]
fn unknown_values() {
    let registry = letters();
    assert_eq!(registry.case_for_id("ZZZZZZZZZZ"), None);
    assert_eq!(registry.decode_id("ZZZZZZZZZZ"), Err(DecodeError::InvalidValue));
    assert_eq!(
        registry.decode_payload(&"delta".to_string()),
        Err(DecodeError::InvalidValue)
    );
    // Ids and payloads are separate namespaces
    assert_eq!(registry.case_for_id("alpha"), None);
    assert_eq!(registry.case_for_payload(&"ID_A".to_string()), None);
}

#[test]
fn zero_is_not_empty() {
    let registry = Registry::build([(Letter::A, "ID_A", 0u32), (Letter::B, "ID_B", 7)]).unwrap();
    assert_eq!(registry.case_for_payload(&0), Some(Letter::A));
    assert_eq!(registry.decode_payload(&0), Ok(Letter::A));
    assert_eq!(registry.decode_payload(&8), Err(DecodeError::InvalidValue));
}

#[test]
fn error_codes() {
    assert_eq!(DecodeError::EmptyValue.code(), 0);
    assert_eq!(DecodeError::InvalidValue.code(), 1);
}

#[test]
#[should_panic(expected = "has no registered id")]
fn unregistered_case() {
    let registry = Registry::build([(Letter::A, "ID_A", 'a')]).unwrap();
    registry.id_for(Letter::C);
}

#[traced_test]
#[test]
fn empty_payload_warns() {
    let registry = Registry::build([
        (Letter::A, "ID_A", String::new()),
        (Letter::B, "ID_B", "bravo".to_string()),
    ])
    .unwrap();

    assert!(logs_contain("cannot be decoded by codable"));
    // Still encodable, never decodable
    assert_eq!(registry.payload_for(Letter::A), "");
    assert_eq!(
        registry.decode_payload(&String::new()),
        Err(DecodeError::EmptyValue)
    );
}
