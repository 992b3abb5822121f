/// Decoding errors.
///
/// Both kinds apply identically whichever [SerializationMode](crate::SerializationMode)
/// is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DecodeError {
    /// The raw value was empty before any lookup was attempted.
    #[error("empty value")]
    EmptyValue,
    /// The raw value is not empty, but no registered case matches it.
    #[error("invalid value")]
    InvalidValue,
}

impl DecodeError {
    /// Stable numeric code of the error kind.
    pub fn code(&self) -> u8 {
        match self {
            Self::EmptyValue => 0,
            Self::InvalidValue => 1,
        }
    }
}

/// An inconsistent case table passed to [Registry::build](crate::Registry::build).
///
/// Cases and payloads are stored in their `Debug` and `Display` renderings so the
/// error does not depend on the registered types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationConflict {
    #[error("case {case} has an empty id")]
    EmptyId { case: String },
    #[error("id {id:?} is shared by cases {first} and {second}")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },
    #[error("payload {payload} is shared by cases {first} and {second}")]
    DuplicatePayload {
        payload: String,
        first: String,
        second: String,
    },
    #[error("case {case} is registered more than once")]
    DuplicateCase { case: String },
}

/// Returned when parsing a [SerializationMode](crate::SerializationMode) from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown serialization mode {0:?}, expected \"id\" or \"codable\"")]
pub struct ParseModeError(pub String);
