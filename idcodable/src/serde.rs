use std::marker::PhantomData;

use serde::de::{DeserializeSeed, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::IdCodable;
use crate::mode::{self, SerializationMode};

/// Serializes `value` as its id, or as its payload when the current mode is
/// [SerializationMode::ByCodable].
///
/// Used by the `Serialize` impl [id_codable](crate::id_codable) generates. Can also be
/// used with `#[serde(serialize_with = "idcodable::serde::serialize")]`.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: IdCodable,
    S: Serializer,
{
    match mode::current() {
        SerializationMode::ByCodable => value.codable().serialize(serializer),
        SerializationMode::ById => serializer.serialize_str(value.id()),
    }
}

/// Deserializes one case from its id, or from its payload when the current mode is
/// [SerializationMode::ByCodable].
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: IdCodable,
    D: Deserializer<'de>,
{
    match mode::current() {
        SerializationMode::ByCodable => {
            let payload = <T::Payload as Deserialize<'de>>::deserialize(deserializer)?;
            T::decode_codable(&payload).map_err(D::Error::custom)
        }
        SerializationMode::ById => deserializer.deserialize_str(__private::IdVisitor::default()),
    }
}

/// Serializes the wrapped value with `mode` installed for the whole operation.
///
/// ```rust
/// use idcodable::{SerializationMode, WithMode, id_codable};
///
/// id_codable! {
///     pub enum Color: u8 {
///         #[codable(id = "R7", codable = 1)]
///         Red,
///         #[codable(id = "G2", codable = 2)]
///         Green,
///     }
/// }
///
/// let colors = vec![Color::Red, Color::Green];
/// let json = serde_json::to_string(&WithMode::new(SerializationMode::ByCodable, &colors)).unwrap();
/// assert_eq!(json, "[1,2]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithMode<T> {
    pub mode: SerializationMode,
    pub value: T,
}

impl<T> WithMode<T> {
    pub fn new(mode: SerializationMode, value: T) -> Self {
        Self { mode, value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Serialize for WithMode<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        mode::scoped(self.mode, || self.value.serialize(serializer))
    }
}

/// Deserializes a `T` with `mode` installed for the whole operation.
///
/// ```rust
/// use idcodable::{ModeSeed, SerializationMode, id_codable};
/// use serde::de::DeserializeSeed;
///
/// id_codable! {
///     #[derive(PartialOrd, Ord)]
///     pub enum Color: u8 {
///         #[codable(id = "R7", codable = 1)]
///         Red,
///         #[codable(id = "G2", codable = 2)]
///         Green,
///     }
/// }
///
/// let mut deserializer = serde_json::Deserializer::from_str("[2,1]");
/// let colors: Vec<Color> = ModeSeed::new(SerializationMode::ByCodable)
///     .deserialize(&mut deserializer)
///     .unwrap();
/// assert_eq!(colors, [Color::Green, Color::Red]);
/// ```
pub struct ModeSeed<T> {
    mode: SerializationMode,
    marker: PhantomData<fn() -> T>,
}

impl<T> ModeSeed<T> {
    pub fn new(mode: SerializationMode) -> Self {
        Self {
            mode,
            marker: PhantomData,
        }
    }

    pub fn mode(&self) -> SerializationMode {
        self.mode
    }
}

impl<T> Clone for ModeSeed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ModeSeed<T> {}

impl<'de, T> DeserializeSeed<'de> for ModeSeed<T>
where
    T: Deserialize<'de>,
{
    type Value = T;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        mode::scoped(self.mode, || T::deserialize(deserializer))
    }
}

#[doc(hidden)]
pub mod __private {
    use std::marker::PhantomData;

    pub use ::serde as serde_crate;

    use crate::IdCodable;

    pub struct IdVisitor<T>(PhantomData<T>);

    impl<T> Default for IdVisitor<T> {
        fn default() -> Self {
            Self(Default::default())
        }
    }

    impl<'de, T> serde::de::Visitor<'de> for IdVisitor<T>
    where
        T: IdCodable,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(formatter, "a registered id")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            T::decode_id(v).map_err(E::custom)
        }
    }
}
