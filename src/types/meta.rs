//! Ordered key/value metadata attached to an [`EnhancedError`](crate::EnhancedError).
//!
//! Metadata is an append-only list of `(key, value)` string pairs. Values are
//! stringified at insertion time through [`MetaValue`], so an entry is always
//! a plain string regardless of the caller-supplied type. Entries keep their
//! insertion order; entries with an empty key are silently dropped.

use chrono::{DateTime, SecondsFormat, Utc};
use smallvec::SmallVec;
use std::fmt;
use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SmallVec-backed storage for metadata entries.
///
/// Inline storage for up to 4 entries avoids heap allocation for the common
/// case of an error carrying a handful of diagnostic pairs.
pub type MetaVec = SmallVec<[MetaEntry; 4]>;

/// A single `key: value` metadata pair. The value is always a string.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    pub(crate) key: String,
    pub(crate) value: String,
}

impl MetaEntry {
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for MetaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", self.key, self.value)
    }
}

/// Ordered, append-only metadata list.
///
/// # Examples
///
/// ```
/// use richerr::Meta;
///
/// let mut meta = Meta::new();
/// meta.push("attempt", 3);
/// meta.push("host", "db-1");
/// meta.push("", "dropped"); // empty key: silently ignored
///
/// assert_eq!(meta.len(), 2);
/// assert_eq!(meta.get("attempt"), Some("3"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta(pub(crate) MetaVec);

impl Meta {
    #[inline]
    pub fn new() -> Self {
        Self(MetaVec::new())
    }

    /// Appends an entry, stringifying the value.
    ///
    /// Entries with an empty key are dropped without error.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        self.0.push(MetaEntry { key, value: value.into().into_string() });
    }

    /// Returns the value of the first entry with the given key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|e| e.key == key).map(|e| e.value.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over entries in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, MetaEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Meta {
    type Item = &'a MetaEntry;
    type IntoIter = core::slice::Iter<'a, MetaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, MetaValue)> for Meta {
    fn from_iter<I: IntoIterator<Item = (String, MetaValue)>>(iter: I) -> Self {
        let mut meta = Meta::new();
        for (key, value) in iter {
            meta.push(key, value);
        }
        meta
    }
}

/// A metadata value prior to stringification.
///
/// Conversion rules: integers render base-10, floats via their shortest
/// round-trip `Display` form, booleans as `true`/`false`, byte sequences as
/// raw text (lossy UTF-8), timestamps as RFC 3339. For everything else use
/// [`MetaValue::display`] if the type has its own string conversion, or
/// [`MetaValue::debug`] as the fallback.
///
/// Note that `u8` is an integer like the rest and renders base-10, not as a
/// character; use `char` (or `&[u8]` for text) when a character is meant.
///
/// # Examples
///
/// ```
/// use richerr::MetaValue;
///
/// let v: MetaValue = 42u64.into();
/// let t: MetaValue = MetaValue::display(std::net::Ipv4Addr::LOCALHOST);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Str(String),
    Char(char),
    Int(i64),
    Uint(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Time(DateTime<Utc>),
}

impl MetaValue {
    /// Stringifies via the value's own `Display` implementation.
    pub fn display<T: fmt::Display>(value: T) -> Self {
        Self::Str(value.to_string())
    }

    /// Stringifies via `Debug`, for types without a `Display` form.
    pub fn debug<T: fmt::Debug>(value: T) -> Self {
        Self::Str(format!("{value:?}"))
    }

    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Char(c) => c.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Uint(u) => u.to_string(),
            Self::F32(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Bytes(b) => String::from_utf8_lossy(&b).into_owned(),
            Self::Time(t) => t.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<char> for MetaValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for MetaValue {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<&[u8]> for MetaValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for MetaValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<DateTime<Utc>> for MetaValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl From<SystemTime> for MetaValue {
    fn from(value: SystemTime) -> Self {
        Self::Time(value.into())
    }
}

macro_rules! impl_meta_value_int {
    ($variant:ident: $wide:ty => $($ty:ty),+) => {
        $(
            impl From<$ty> for MetaValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $wide)
                }
            }
        )+
    };
}

impl_meta_value_int!(Int: i64 => i8, i16, i32, i64, isize);
impl_meta_value_int!(Uint: u64 => u8, u16, u32, u64, usize);
