use idcodable::{DecodeError, IdCodable, RegistrationConflict, id_codable};

id_codable! {
    /// Shipping priority
    #[derive(PartialOrd, Ord)]
    pub enum Priority: u8 {
        #[codable(id = "PLOW00000", codable = 10)]
        /// Ships last
        Low,
        #[codable(id = "PMED00000", codable = 20,)]
        Medium,
        #[codable(id = "PHIGH0000", codable = 30)]
        High,
    }
}

id_codable! {
    enum Clashing: char {
        #[codable(id = "SAME", codable = 'a')]
        First,
        #[codable(id = "SAME", codable = 'b')]
        Second,
    }
}

#[test]
fn accessors() {
    assert_eq!(Priority::Low.id(), "PLOW00000");
    assert_eq!(*Priority::High.codable(), 30);
    assert_eq!(Priority::from_id("PMED00000"), Some(Priority::Medium));
    assert_eq!(Priority::from_codable(&10), Some(Priority::Low));
    assert_eq!(Priority::from_codable(&0), None);
    assert_eq!(Priority::all(), [Priority::Low, Priority::Medium, Priority::High]);
    assert!(Priority::Low < Priority::High);
}

#[test]
fn decode_errors() {
    assert_eq!(Priority::decode_id(""), Err(DecodeError::EmptyValue));
    assert_eq!(Priority::decode_id("PNONE0000"), Err(DecodeError::InvalidValue));
    assert_eq!(Priority::decode_codable(&0), Err(DecodeError::InvalidValue));
    assert_eq!(Priority::decode_codable(&20), Ok(Priority::Medium));
}

#[test]
fn string_conversions() {
    assert_eq!("PHIGH0000".parse::<Priority>(), Ok(Priority::High));
    assert_eq!("".parse::<Priority>(), Err(DecodeError::EmptyValue));
    assert_eq!(Priority::try_from("PLOW00000"), Ok(Priority::Low));
    assert_eq!(Priority::try_from("10"), Err(DecodeError::InvalidValue));
    assert_eq!(Priority::Medium.to_string(), "PMED00000");
    assert_eq!(Priority::Medium.as_ref(), "PMED00000");
}

#[test]
fn registry_is_shared() {
    assert!(std::ptr::eq(Priority::registry(), Priority::registry()));
    assert_eq!(Priority::registry().len(), 3);
}

#[test]
fn conflicting_table() {
    assert_eq!(
        Clashing::try_registry().unwrap_err(),
        &RegistrationConflict::DuplicateId {
            id: "SAME".to_string(),
            first: "First".to_string(),
            second: "Second".to_string(),
        }
    );
}

#[test]
#[should_panic(expected = "invalid IdCodable registration")]
fn conflicting_table_panics() {
    Clashing::First.id();
}
