//! Enhanced error values with structured context.
//!
//! `richerr` augments a plain error with optional diagnostics: a human
//! message, free-form description, call-site location, creation timestamp,
//! ordered key/value metadata, and a linear chain to a previously wrapped
//! error. The plain text form stays exactly the message, so enhanced errors
//! drop into code built around `std::error::Error`.
//!
//! # Examples
//!
//! ## Building an error with context
//!
//! ```
//! use richerr::EnhancedError;
//!
//! let err = EnhancedError::new("load config failed")
//!     .with_description("no readable candidate path")
//!     .with_meta("path", "/etc/app.toml")
//!     .with_meta("attempt", 2)
//!     .with_occur();
//!
//! assert_eq!(err.to_string(), "load config failed");
//! println!("{err:#}"); // multi-line verbose dump
//! ```
//!
//! ## Wrapping and inspecting a chain
//!
//! ```
//! use richerr::{is, stack_of, EnhancedError};
//!
//! let io = std::io::Error::other("permission denied");
//! let err = EnhancedError::new("open socket failed").wrap_err(io);
//!
//! assert!(is(&err, &EnhancedError::define("permission denied")));
//! assert!(stack_of(&err).is_some());
//! ```
//!
//! ## Joining a sequence of errors
//!
//! ```
//! use richerr::{join, EnhancedError};
//!
//! let merged = join([
//!     Some(EnhancedError::new("handler failed").boxed()),
//!     None,
//!     Some(EnhancedError::new("rollback failed").boxed()),
//! ])
//! .unwrap();
//!
//! assert_eq!(merged.to_string(), "handler failed");
//! assert_eq!(merged.chain().count(), 2);
//! ```

/// Chain operations: join, equality, downcast search, unwrapping, copy.
pub mod chain;
/// Metadata shorthand macros.
pub mod macros;
/// Convenience re-exports for quick starts.
pub mod prelude;
/// Core data types: enhanced error, location, metadata.
pub mod types;

mod pool;

pub use chain::{as_enhanced, copy, find_cause, is, join, stack_of, unwrap_once};
pub use types::{
    BoxError, Cause, Chain, EnhancedError, Location, Meta, MetaEntry, MetaValue, MetaVec,
    OpaqueError,
};
