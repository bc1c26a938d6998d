//! Chain operations over dynamic errors.
//!
//! These free functions work on `&(dyn Error + 'static)` so they accept any
//! error value, enhanced or foreign. Unwrapping follows the host convention:
//! one [`source`](std::error::Error::source) link per step.
//!
//! # Examples
//!
//! ```
//! use richerr::{is, join, unwrap_once, EnhancedError};
//!
//! let merged = join([
//!     Some(EnhancedError::new("request failed").boxed()),
//!     None,
//!     Some(EnhancedError::new("connect timeout").boxed()),
//! ])
//! .unwrap();
//!
//! assert_eq!(merged.to_string(), "request failed");
//! assert!(is(&merged, &EnhancedError::define("connect timeout")));
//! assert_eq!(unwrap_once(&merged).unwrap().to_string(), "connect timeout");
//! ```

use std::error::Error as StdError;

use crate::types::enhanced::{BoxError, Cause, EnhancedError};
use crate::types::location::Location;

/// Right-folds a sequence of optional errors into one linear chain.
///
/// The first non-`None` entry becomes the outermost (returned) value and
/// each later non-`None` entry is nested one level deeper, attached at the
/// chain tail. Foreign errors are promoted to enhanced form first. Returns
/// `None` for an empty or all-`None` sequence.
pub fn join<I>(errs: I) -> Option<EnhancedError>
where
    I: IntoIterator<Item = Option<BoxError>>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut assembled: Option<EnhancedError> = None;
    for err in errs.into_iter().rev().flatten() {
        let mut link = match err.downcast::<EnhancedError>() {
            Ok(enhanced) => *enhanced,
            Err(foreign) => promote(foreign.to_string()),
        };
        if let Some(inner) = assembled.take() {
            link.attach(Cause::Enhanced(inner));
        }
        assembled = Some(link);
    }
    assembled
}

#[inline(never)]
fn promote(message: String) -> EnhancedError {
    let mut err = EnhancedError::define(message);
    err.location = Location::capture(1);
    err
}

/// Whether `err` is, or wraps, an error with the same message as `target`.
///
/// The fast path compares plain messages regardless of concrete type; after
/// that each chain link is consulted in turn, using the enhanced equality
/// hook (strict message equality) for structured links and plain text
/// comparison for foreign ones.
///
/// # Examples
///
/// ```
/// use richerr::{is, EnhancedError};
///
/// let a = EnhancedError::new("timeout").with_meta("attempt", 2);
/// let b = EnhancedError::define("timeout");
/// assert!(is(&a, &b));
///
/// let chained = EnhancedError::new("outer").wrap(EnhancedError::define("inner"));
/// assert!(is(&chained, &EnhancedError::define("inner")));
/// assert!(!is(&chained, &EnhancedError::define("absent")));
/// ```
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    let want = target.to_string();
    if err.to_string() == want {
        return true;
    }
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(link) = current {
        match link.downcast_ref::<EnhancedError>() {
            Some(enhanced) => {
                if enhanced.matches(target) {
                    return true;
                }
            }
            None => {
                if link.to_string() == want {
                    return true;
                }
            }
        }
        current = link.source();
    }
    false
}

/// Finds the first chain link of concrete type `T`.
///
/// The dynamic-type chain search: walks `err` and its `source()` links,
/// returning the first that downcasts to `T`.
///
/// # Examples
///
/// ```
/// use richerr::{find_cause, EnhancedError};
///
/// let err = EnhancedError::new("wrapper").wrap_err(std::fmt::Error);
/// assert!(find_cause::<std::fmt::Error>(&err).is_none()); // foreign links are opaque
/// assert!(find_cause::<EnhancedError>(&err).is_some());
/// ```
pub fn find_cause<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(link) = current {
        if let Some(found) = link.downcast_ref::<T>() {
            return Some(found);
        }
        current = link.source();
    }
    None
}

/// Single-step unwrap: the next link of the chain, if any.
#[inline]
pub fn unwrap_once<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

/// Downcasts the top-level value to [`EnhancedError`], without walking.
#[inline]
pub fn as_enhanced<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a EnhancedError> {
    err.downcast_ref::<EnhancedError>()
}

/// The outermost link's captured call site as `(function, file, line)`.
///
/// Only the top-level value is inspected; a foreign outer error yields
/// `None` even when an enhanced link sits deeper in the chain.
pub fn stack_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<(&'a str, &'a str, u32)> {
    as_enhanced(err).and_then(EnhancedError::stack)
}

/// Checked deep copy of `src` into `dst`.
///
/// Returns `false` without touching anything when either side is absent.
/// For the common case, [`EnhancedError`] is `Clone` and `clone()` is the
/// deep copy: every field owns its storage, including the wrapped chain.
///
/// # Examples
///
/// ```
/// use richerr::{copy, EnhancedError};
///
/// let src = EnhancedError::define("original").with_meta("k", "v");
/// let mut dst = EnhancedError::define("placeholder");
/// assert!(copy(Some(&mut dst), Some(&src)));
/// assert_eq!(dst.meta().get("k"), Some("v"));
///
/// assert!(!copy(None, Some(&src)));
/// assert!(!copy(Some(&mut dst), None));
/// ```
pub fn copy(dst: Option<&mut EnhancedError>, src: Option<&EnhancedError>) -> bool {
    match (dst, src) {
        (Some(dst), Some(src)) => {
            *dst = src.clone();
            true
        }
        _ => false,
    }
}
