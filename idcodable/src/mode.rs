//! The serialization mode and the per-thread context it is read from.
//!
//! The mode is not part of the serialized data. It is installed for the duration of
//! one encode or decode operation, and every [IdCodable](crate::IdCodable) value
//! reached during that operation uses it.
//!
//! ```rust
//! use idcodable::mode::{self, SerializationMode};
//!
//! assert_eq!(mode::current(), SerializationMode::ById);
//! mode::scoped(SerializationMode::ByCodable, || {
//!     assert_eq!(mode::current(), SerializationMode::ByCodable);
//! });
//! assert_eq!(mode::current(), SerializationMode::ById);
//! ```

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::ParseModeError;

/// Selects which representation governs encoding and decoding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SerializationMode {
    /// Use the case's id.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "id"))]
    ById,
    /// Use the case's payload.
    #[cfg_attr(feature = "serde", serde(rename = "codable"))]
    ByCodable,
}

impl SerializationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ById => "id",
            Self::ByCodable => "codable",
        }
    }
}

impl fmt::Display for SerializationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SerializationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::ById),
            "codable" => Ok(Self::ByCodable),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

thread_local! {
    static CURRENT_MODE: Cell<Option<SerializationMode>> = const { Cell::new(None) };
}

/// The mode installed on this thread, if any.
pub fn explicit() -> Option<SerializationMode> {
    CURRENT_MODE.with(Cell::get)
}

/// The mode installed on this thread, or [SerializationMode::ById] when none is.
pub fn current() -> SerializationMode {
    explicit().unwrap_or_default()
}

/// Runs `f` with `mode` installed on this thread.
pub fn scoped<F, R>(mode: SerializationMode, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ModeGuard::enter(mode);
    f()
}

/// Installs a mode on the current thread until dropped, then restores the previous one.
///
/// Guards must be dropped in reverse order of creation.
#[must_use = "the mode is uninstalled as soon as the guard is dropped"]
pub struct ModeGuard {
    previous: Option<SerializationMode>,
    // Tied to the thread whose context it modified.
    _thread: PhantomData<*const ()>,
}

impl ModeGuard {
    pub fn enter(mode: SerializationMode) -> Self {
        let previous = CURRENT_MODE.with(|current| current.replace(Some(mode)));
        Self {
            previous,
            _thread: PhantomData,
        }
    }
}

impl Drop for ModeGuard {
    fn drop(&mut self) {
        CURRENT_MODE.with(|current| current.set(self.previous));
    }
}
