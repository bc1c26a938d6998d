//! The enhanced error value: a message plus optional structured context.
//!
//! [`EnhancedError`] carries a human message, an optional free-form
//! description, the call-site [`Location`] captured at construction, an
//! optional occurrence timestamp, ordered [`Meta`] pairs, and a strictly
//! linear chain to a previously wrapped error. Values are created through
//! the constructors and configured with the consuming `with_*` builder
//! methods; caller-supplied order is application order, so later calls
//! override scalar fields and append metadata.

use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::location::Location;
use crate::types::meta::{Meta, MetaValue};
use crate::types::render;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boxed dynamic error, the exchange type at the crate boundary.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error value with structured diagnostic context.
///
/// The plain text form (`Display`, `{}`) is exactly the message, so the type
/// drops into code that treats it like an ordinary error. The alternate form
/// (`{:#}`) is the multi-line verbose dump described at [`verbose`].
///
/// Equality compares the message only: context is diagnostic metadata about
/// *where* and *how* an error arose, not *what* the error is.
///
/// # Examples
///
/// ```
/// use richerr::EnhancedError;
///
/// let err = EnhancedError::new("database connection failed")
///     .with_description("primary replica unreachable")
///     .with_meta("attempt", 3)
///     .with_occur();
///
/// assert_eq!(err.to_string(), "database connection failed");
///
/// let verbose = format!("{err:#}");
/// assert!(verbose.contains("ERRO      = database connection failed"));
/// assert!(verbose.contains("DESC      = primary replica unreachable"));
/// assert!(verbose.contains("META      = [attempt: 3]"));
/// ```
///
/// [`verbose`]: EnhancedError::verbose
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct EnhancedError {
    pub(crate) message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) location: Option<Location>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) occurred_at: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Meta::is_empty"))]
    pub(crate) meta: Meta,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) wrapped: Option<Box<Cause>>,
}

impl EnhancedError {
    fn bare(message: String) -> Self {
        Self {
            message,
            description: None,
            location: None,
            occurred_at: None,
            meta: Meta::new(),
            wrapped: None,
        }
    }

    /// Creates an enhanced error, capturing the caller's location.
    ///
    /// The recorded frame is the immediate caller of `new`. Location capture
    /// is best-effort: when the frame cannot be resolved the error simply
    /// carries no location.
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        let mut err = Self::bare(message.into());
        err.location = Location::capture(1);
        err
    }

    /// Creates a sentinel error: no location, no timestamp.
    ///
    /// Intended for static/package-level error constants, where a captured
    /// call site would point at initialization code and mean nothing. The
    /// full builder surface remains available for overrides.
    ///
    /// # Examples
    ///
    /// ```
    /// use richerr::EnhancedError;
    ///
    /// let sentinel = EnhancedError::define("not found");
    /// assert!(sentinel.location().is_none());
    /// assert!(sentinel.occurred_at().is_none());
    /// ```
    pub fn define(message: impl Into<String>) -> Self {
        Self::bare(message.into())
    }

    /// Promotes a plain error to enhanced form.
    ///
    /// An input that is already an [`EnhancedError`] is deep-copied first, so
    /// builder calls on the result never alias the caller's original; its
    /// location is then re-captured at this call site. A foreign error
    /// contributes its message.
    ///
    /// Optional inputs map through `Option`:
    /// `maybe_err.map(|e| EnhancedError::from_error(e))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use richerr::EnhancedError;
    ///
    /// let io = std::io::Error::other("disk full");
    /// let err = EnhancedError::from_error(&io).with_meta("path", "/var/db");
    /// assert_eq!(err.to_string(), "disk full");
    /// ```
    #[inline(never)]
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut promoted = match err.downcast_ref::<EnhancedError>() {
            Some(enhanced) => enhanced.clone(),
            None => Self::bare(err.to_string()),
        };
        promoted.location = Location::capture(1);
        promoted
    }

    /// Replaces the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends one metadata pair. Entries with an empty key are dropped.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.meta.push(key, value);
        self
    }

    /// Appends metadata pairs in order, e.g. from the [`meta!`](crate::meta!)
    /// macro.
    pub fn with_meta_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, MetaValue)>,
    {
        for (key, value) in entries {
            self.meta.push(key, value);
        }
        self
    }

    /// Sets the occurrence timestamp to now.
    pub fn with_occur(mut self) -> Self {
        self.occurred_at = Some(Utc::now());
        self
    }

    /// Sets an explicit occurrence timestamp.
    pub fn with_occur_at(mut self, at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(at);
        self
    }

    /// Clears the occurrence timestamp.
    pub fn without_occur(mut self) -> Self {
        self.occurred_at = None;
        self
    }

    /// Re-captures the location `depth` frames above the immediate caller.
    ///
    /// `depth = 0` records the caller of this method. Library code that
    /// constructs errors on behalf of its own caller passes 1 or more so the
    /// recorded frame is the one that matters.
    #[inline(never)]
    pub fn with_location_depth(mut self, depth: usize) -> Self {
        self.location = Location::capture(depth + 1);
        self
    }

    /// Removes any captured location.
    pub fn without_location(mut self) -> Self {
        self.location = None;
        self
    }

    /// Attaches a cause at the tail of the wrap chain.
    ///
    /// Wrapping descends to the first unset slot and never overwrites an
    /// existing link; an opaque (foreign) tail accepts no further links.
    ///
    /// # Examples
    ///
    /// ```
    /// use richerr::EnhancedError;
    ///
    /// let err = EnhancedError::new("request failed")
    ///     .wrap(EnhancedError::define("connect timeout"));
    /// assert_eq!(err.wrapped().unwrap().message(), "connect timeout");
    /// ```
    pub fn wrap(mut self, cause: impl Into<Cause>) -> Self {
        self.attach(cause.into());
        self
    }

    /// Attaches a concrete foreign error at the tail of the wrap chain.
    ///
    /// An [`EnhancedError`] argument becomes a structured link; anything else
    /// becomes an opaque, message-only link that terminates the chain.
    pub fn wrap_err<E>(self, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.wrap(Cause::from(Box::new(err) as BoxError))
    }

    pub(crate) fn attach(&mut self, cause: Cause) {
        match &mut self.wrapped {
            None => self.wrapped = Some(Box::new(cause)),
            Some(next) => match next.as_mut() {
                Cause::Enhanced(inner) => inner.attach(cause),
                // A foreign link carries no further wrap; the chain ends here.
                Cause::Opaque(_) => {}
            },
        }
    }

    /// Boxes into the crate's dynamic exchange type.
    #[inline]
    pub fn boxed(self) -> BoxError {
        Box::new(self)
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    #[inline]
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        self.occurred_at
    }

    #[inline]
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    #[inline]
    pub fn wrapped(&self) -> Option<&Cause> {
        self.wrapped.as_deref()
    }

    /// The captured call site as `(function, file, line)`, if any.
    pub fn stack(&self) -> Option<(&str, &str, u32)> {
        self.location.as_ref().map(|l| (l.function(), l.file(), l.line()))
    }

    /// Iterates the chain from this error to the innermost cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use richerr::EnhancedError;
    ///
    /// let err = EnhancedError::define("a")
    ///     .wrap(EnhancedError::define("b").wrap(EnhancedError::define("c")));
    /// let messages: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    /// assert_eq!(messages, ["a", "b", "c"]);
    /// ```
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self as &(dyn StdError + 'static)) }
    }

    /// The multi-line verbose rendering, equivalent to `format!("{self:#}")`.
    ///
    /// One delimited block per chain link, outermost first, with fields in
    /// fixed order: `ERRO`, then `DESC`, `META`, `OCCU`, `FUNC`/`SEEK` when
    /// present. A foreign link renders as a single plain-message line.
    #[must_use]
    pub fn verbose(&self) -> String {
        render::render_verbose(self)
    }

    /// The chain-equality hook: strict message equality against either an
    /// enhanced or a foreign target.
    pub(crate) fn matches(&self, target: &(dyn StdError + 'static)) -> bool {
        match target.downcast_ref::<EnhancedError>() {
            Some(enhanced) => self.message == enhanced.message,
            None => self.message == target.to_string(),
        }
    }
}

impl fmt::Display for EnhancedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&render::render_verbose(self))
        } else {
            f.write_str(&self.message)
        }
    }
}

impl StdError for EnhancedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.wrapped.as_deref().map(Cause::as_dyn)
    }
}

impl PartialEq for EnhancedError {
    /// Message-only equality; description, location, timestamp, metadata,
    /// and the wrapped chain are diagnostic context, not identity.
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for EnhancedError {}

impl Hash for EnhancedError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

/// One link of the wrap chain.
///
/// A link is either *structured* (a full [`EnhancedError`]) or *opaque* (the
/// plain message of a foreign error). Chain walking and rendering branch on
/// this tag; an opaque link always terminates the chain.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum Cause {
    Enhanced(EnhancedError),
    Opaque(OpaqueError),
}

impl Cause {
    /// An opaque link from a foreign error's message.
    pub fn opaque(message: impl Into<String>) -> Self {
        Self::Opaque(OpaqueError { message: message.into() })
    }

    /// The link's plain message.
    pub fn message(&self) -> &str {
        match self {
            Self::Enhanced(e) => &e.message,
            Self::Opaque(o) => &o.message,
        }
    }

    /// The structured form of this link, if it has one.
    pub fn as_enhanced(&self) -> Option<&EnhancedError> {
        match self {
            Self::Enhanced(e) => Some(e),
            Self::Opaque(_) => None,
        }
    }

    pub(crate) fn as_dyn(&self) -> &(dyn StdError + 'static) {
        match self {
            Self::Enhanced(e) => e,
            Self::Opaque(o) => o,
        }
    }
}

impl From<EnhancedError> for Cause {
    fn from(err: EnhancedError) -> Self {
        Self::Enhanced(err)
    }
}

impl From<&(dyn StdError + 'static)> for Cause {
    fn from(err: &(dyn StdError + 'static)) -> Self {
        match err.downcast_ref::<EnhancedError>() {
            Some(enhanced) => Self::Enhanced(enhanced.clone()),
            None => Self::opaque(err.to_string()),
        }
    }
}

impl From<BoxError> for Cause {
    fn from(err: BoxError) -> Self {
        match err.downcast::<EnhancedError>() {
            Ok(enhanced) => Self::Enhanced(*enhanced),
            Err(foreign) => Self::opaque(foreign.to_string()),
        }
    }
}

/// A foreign error reduced to its plain message.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueError {
    pub(crate) message: String,
}

impl OpaqueError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for OpaqueError {}

/// Iterator over a wrap chain, outermost link first.
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.source();
        Some(current)
    }
}
