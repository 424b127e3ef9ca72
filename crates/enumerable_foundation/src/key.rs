//! Collection keys: integers or strings.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Key of a collection entry.
///
/// Strings holding a canonical decimal integer (`"5"`, `"-3"`, but not
/// `"05"`, `"+5"` or `"5.0"`) are normalized to [`Key::Int`] on conversion,
/// so `"5"` and `5` address the same slot.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key.
    Int(i64),
    /// String key.
    Str(Arc<str>),
}

impl Key {
    /// Builds a key from a string, normalizing canonical integers.
    #[must_use]
    pub fn normalized(s: &str) -> Self {
        match parse_canonical_int(s) {
            Some(n) => Self::Int(n),
            None => Self::Str(Arc::from(s)),
        }
    }

    /// Converts a value into a key the way key-producing operations do.
    ///
    /// Ints are kept, strings are normalized, floats are truncated toward
    /// zero, booleans become 0/1 and null becomes the empty string.
    /// Collections, arrays and objects cannot be keys.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(Self::Int(*n)),
            Value::String(s) => Some(Self::normalized(s)),
            Value::Float(f) if f.is_finite() => Some(Self::Int(f.trunc() as i64)),
            Value::Bool(b) => Some(Self::Int(i64::from(*b))),
            Value::Null => Some(Self::Str(Arc::from(""))),
            _ => None,
        }
    }

    /// Returns true if this is an integer key.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Attempts to extract the integer key.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    /// Attempts to extract the string key.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }

    /// Converts this key into a value (int or string).
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Int(n) => Value::Int(*n),
            Self::Str(s) => Value::String(Arc::clone(s)),
        }
    }
}

fn parse_canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if s == "-0" {
        return None;
    }
    s.parse().ok()
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Int(_), Self::Str(_)) => Ordering::Less,
            (Self::Str(_), Self::Int(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Key {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::normalized(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::normalized(&s)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}
