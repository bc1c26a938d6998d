//! Ergonomic shorthand for attaching metadata.

/// Builds metadata entries for
/// [`with_meta_entries`](crate::EnhancedError::with_meta_entries).
///
/// Values go through [`MetaValue::from`](crate::MetaValue); for types with
/// only a `Display` or `Debug` form, pass `MetaValue::display(..)` or
/// `MetaValue::debug(..)` explicitly.
///
/// # Examples
///
/// ```
/// use richerr::{meta, EnhancedError};
///
/// let err = EnhancedError::new("insert failed").with_meta_entries(meta!(
///     "table" => "users",
///     "attempt" => 3,
///     "fatal" => false,
/// ));
/// assert_eq!(err.meta().len(), 3);
/// ```
#[macro_export]
macro_rules! meta {
    ($($key:expr => $value:expr),* $(,)?) => {
        [$((
            ::std::string::String::from($key),
            $crate::MetaValue::from($value),
        )),*]
    };
}
