/// Declares an enum together with its id and payload table and implements
/// [IdCodable](crate::IdCodable) for it.
///
/// Every variant is annotated with `#[codable(id = ..., codable = ...)]`, followed by any
/// other attributes. The type after the enum name is the payload type; payload values
/// are written as its [Payload::Literal](crate::Payload::Literal).
///
/// Besides [IdCodable](crate::IdCodable), the generated enum derives `Debug`, `Clone`,
/// `Copy`, `PartialEq`, `Eq` and `Hash`, and implements:
/// * `Display` and `AsRef<str>`, both giving the id
/// * `FromStr` and `TryFrom<&str>`, both parsing an id
/// * `serde::Serialize` and `serde::Deserialize` (with the `serde` feature), following
///   the current [SerializationMode](crate::SerializationMode)
///
/// The table is checked the first time the registry is used. A conflicting table makes
/// [IdCodable::registry](crate::IdCodable::registry) panic.
///
/// ```rust
/// use idcodable::{IdCodable, id_codable};
///
/// id_codable! {
///     #[allow(non_camel_case_types)]
///     pub enum Itemgroup: String {
///         #[codable(id = "M5Q1Q7CA7P", codable = "Test 1")]
///         TEST_1,
///         #[codable(id = "OA1G29Y2D5", codable = "Test 2")]
///         /// The second group
///         TEST_2,
///     }
/// }
///
/// assert_eq!(Itemgroup::TEST_2.id(), "OA1G29Y2D5");
/// assert_eq!(Itemgroup::TEST_1.codable(), "Test 1");
/// assert_eq!("M5Q1Q7CA7P".parse::<Itemgroup>(), Ok(Itemgroup::TEST_1));
/// assert_eq!(Itemgroup::TEST_2.to_string(), "OA1G29Y2D5");
/// ```
#[macro_export]
macro_rules! id_codable {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident : $payload:ty {
            $(
                #[codable(id = $id:literal, codable = $value:expr $(,)?)]
                $(#[$variant_attr:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_attr])*
                $variant,
            )+
        }

        impl $crate::IdCodable for $name {
            type Payload = $payload;

            fn try_registry() -> ::core::result::Result<
                &'static $crate::Registry<Self, Self::Payload>,
                &'static $crate::RegistrationConflict,
            > {
                static REGISTRY: ::std::sync::OnceLock<
                    ::core::result::Result<
                        $crate::Registry<$name, $payload>,
                        $crate::RegistrationConflict,
                    >,
                > = ::std::sync::OnceLock::new();

                REGISTRY
                    .get_or_init(|| {
                        $crate::Registry::build([
                            $(
                                (
                                    $name::$variant,
                                    $id,
                                    <$payload as $crate::Payload>::from_literal($value),
                                ),
                            )+
                        ])
                    })
                    .as_ref()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::IdCodable::id(self))
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                $crate::IdCodable::id(self)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::DecodeError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::IdCodable>::decode_id(s)
            }
        }

        impl ::core::convert::TryFrom<&str> for $name {
            type Error = $crate::DecodeError;

            fn try_from(s: &str) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::IdCodable>::decode_id(s)
            }
        }

        $crate::__id_codable_serde!($name);
    };
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __id_codable_serde {
    ($name:ident) => {
        impl $crate::__private::serde::serde_crate::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::serde_crate::Serializer,
            {
                $crate::serde::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::serde_crate::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::serde_crate::Deserializer<'de>,
            {
                $crate::serde::deserialize(deserializer)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __id_codable_serde {
    ($name:ident) => {};
}
