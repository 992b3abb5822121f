//! Enums that serialize as either a stable id or an associated payload.
//!
//! Each case of an [IdCodable] enum carries two representations:
//! * An id - a short, stable, opaque string. This is the default representation.
//! * A payload - a value of one fixed [Payload] type per enum, such as a display string or
//!   an integer code.
//!
//! Both are bidirectional: a case maps to exactly one id and one payload, and every id
//! and payload maps back to exactly one case. The [Registry] holding those mappings is
//! built from a static table and validated once, so a duplicated id or payload is a loud
//! failure instead of a silently misrouted value.
//!
//! ```rust
//! use idcodable::{IdCodable, id_codable};
//!
//! id_codable! {
//!     #[allow(non_camel_case_types)]
//!     pub enum Status: i64 {
//!         #[codable(id = "TB4AKAOM84", codable = 1)]
//!         created,
//!         #[codable(id = "DJX3SZZVCN", codable = 2)]
//!         started,
//!     }
//! }
//!
//! fn main() {
//!     assert_eq!(Status::created.id(), "TB4AKAOM84");
//!     assert_eq!(*Status::started.codable(), 2);
//!
//!     assert_eq!(Status::from_id("DJX3SZZVCN"), Some(Status::started));
//!     assert_eq!(Status::from_codable(&1), Some(Status::created));
//!     assert_eq!(Status::from_codable(&3), None);
//! }
//! ```
//!
//! # Serialization modes
//!
//! With the `serde` feature (enabled by default), [IdCodable] enums serialize as their
//! id, or as their payload when [SerializationMode::ByCodable] is in effect. The mode
//! is context for a whole operation rather than part of the data: install it with
//! [WithMode] when serializing, [ModeSeed] when deserializing, or [mode::scoped] around
//! any code that (de)serializes.
//!
//! ```rust
//! use idcodable::{SerializationMode, WithMode, id_codable, mode};
//!
//! id_codable! {
//!     #[allow(non_camel_case_types)]
//!     pub enum Itemgroup: String {
//!         #[codable(id = "M5Q1Q7CA7P", codable = "Test 1")]
//!         TEST_1,
//!         #[codable(id = "OA1G29Y2D5", codable = "Test 2")]
//!         TEST_2,
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     // No mode installed: by id
//!     assert_eq!(serde_json::to_string(&Itemgroup::TEST_1)?, r#""M5Q1Q7CA7P""#);
//!
//!     let by_codable = WithMode::new(SerializationMode::ByCodable, Itemgroup::TEST_2);
//!     assert_eq!(serde_json::to_string(&by_codable)?, r#""Test 2""#);
//!
//!     let decoded = mode::scoped(SerializationMode::ByCodable, || {
//!         serde_json::from_str::<Itemgroup>(r#""Test 2""#)
//!     })?;
//!     assert_eq!(decoded, Itemgroup::TEST_2);
//!
//!     // Empty and unknown values are rejected
//!     assert!(serde_json::from_str::<Itemgroup>(r#""""#).is_err());
//!     assert!(serde_json::from_str::<Itemgroup>(r#""ZZZZZZZZZZ""#).is_err());
//!     Ok(())
//! }
//! ```
//!
//! # Empty values
//!
//! Decoding the empty string fails with [DecodeError::EmptyValue] before any lookup, both
//! for ids and for `String` payloads. Other payload types have no empty value: an integer
//! payload of `0` is looked up like any other.
//!
//! # Manual registration
//!
//! [id_codable] covers the common case. For an existing enum, implement [IdCodable]
//! directly and keep the [Registry] in a `OnceLock`:
//!
//! ```rust
//! use std::sync::OnceLock;
//! use idcodable::{IdCodable, Registry, RegistrationConflict};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Level {
//!     Low,
//!     High,
//! }
//!
//! impl IdCodable for Level {
//!     type Payload = char;
//!
//!     fn try_registry() -> Result<&'static Registry<Self, char>, &'static RegistrationConflict> {
//!         static REGISTRY: OnceLock<Result<Registry<Level, char>, RegistrationConflict>> =
//!             OnceLock::new();
//!         REGISTRY
//!             .get_or_init(|| Registry::build([(Level::Low, "LO", 'l'), (Level::High, "HI", 'h')]))
//!             .as_ref()
//!     }
//! }
//!
//! fn main() {
//!     assert_eq!(Level::High.id(), "HI");
//!     assert_eq!(Level::from_codable(&'l'), Some(Level::Low));
//! }
//! ```

mod error;
mod macros;
pub mod mode;
mod payload;
pub mod registry;

#[cfg(feature = "serde")]
/// serde integration
pub mod serde;

use std::fmt::Debug;
use std::hash::Hash;

pub use error::{DecodeError, ParseModeError, RegistrationConflict};
pub use mode::SerializationMode;
pub use payload::{Payload, PayloadSerde};
pub use registry::Registry;

#[cfg(feature = "serde")]
pub use crate::serde::{ModeSeed, WithMode};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use crate::serde::__private as serde;
}

/// An enum whose cases each map to a unique id and a unique [Payload].
///
/// Usually implemented with [id_codable].
pub trait IdCodable: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The alternate representation of each case.
    type Payload: Payload;

    /// The registry of this type, or the conflict that prevented building it.
    fn try_registry()
    -> Result<&'static Registry<Self, Self::Payload>, &'static RegistrationConflict>;

    /// The registry of this type.
    ///
    /// # Panics
    /// If the registered table conflicts. See [RegistrationConflict].
    fn registry() -> &'static Registry<Self, Self::Payload> {
        match Self::try_registry() {
            Ok(registry) => registry,
            Err(conflict) => panic!(
                "invalid IdCodable registration for {}: {conflict}",
                std::any::type_name::<Self>()
            ),
        }
    }

    fn id(&self) -> &'static str {
        Self::registry().id_for(*self)
    }

    fn codable(&self) -> &'static Self::Payload {
        Self::registry().payload_for(*self)
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::registry().case_for_id(id)
    }

    fn from_codable(payload: &Self::Payload) -> Option<Self> {
        Self::registry().case_for_payload(payload)
    }

    /// Like [from_id](IdCodable::from_id), but tells an empty id apart from an unknown one.
    fn decode_id(raw: &str) -> Result<Self, DecodeError> {
        Self::registry().decode_id(raw)
    }

    /// Like [from_codable](IdCodable::from_codable), but tells an empty payload apart from
    /// an unknown one.
    fn decode_codable(raw: &Self::Payload) -> Result<Self, DecodeError> {
        Self::registry().decode_payload(raw)
    }

    /// Every case, in declaration order.
    fn all() -> &'static [Self] {
        Self::registry().cases()
    }
}
