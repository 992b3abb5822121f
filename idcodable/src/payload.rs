use std::fmt::{Debug, Display};
use std::hash::Hash;

/// serde bounds required of every [Payload], or nothing when the `serde` feature is off.
#[cfg(feature = "serde")]
pub trait PayloadSerde: serde::Serialize + serde::de::DeserializeOwned {}

#[cfg(feature = "serde")]
impl<T> PayloadSerde for T where T: serde::Serialize + serde::de::DeserializeOwned {}

/// serde bounds required of every [Payload], or nothing when the `serde` feature is off.
#[cfg(not(feature = "serde"))]
pub trait PayloadSerde {}

#[cfg(not(feature = "serde"))]
impl<T> PayloadSerde for T {}

/// The alternate representation of an [IdCodable](crate::IdCodable) enum.
///
/// Every case of a given enum carries one value of its payload type, and no two cases
/// may carry equal values.
pub trait Payload: Clone + Eq + Hash + Debug + Display + Send + Sync + PayloadSerde + 'static {
    /// The type payloads are written as in an [id_codable](crate::id_codable) table.
    type Literal;

    fn from_literal(literal: Self::Literal) -> Self;

    /// Whether this value counts as empty when decoding by payload.
    ///
    /// Only string payloads have an empty value. Zero is an ordinary integer payload.
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl Payload for String {
    type Literal = &'static str;

    fn from_literal(literal: Self::Literal) -> Self {
        literal.to_string()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_payload {
    ($($t:ty)*) => {$(
        impl Payload for $t {
            type Literal = Self;

            fn from_literal(literal: Self::Literal) -> Self {
                literal
            }
        }
    )*}
}

impl_payload! {
    u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize bool char
}
