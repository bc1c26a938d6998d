//! Convenience re-exports for quick starts.
//!
//! ```
//! use richerr::prelude::*;
//!
//! let err = EnhancedError::new("boom").with_meta("k", "v");
//! assert!(is(&err, &EnhancedError::define("boom")));
//! ```

pub use crate::chain::{as_enhanced, copy, find_cause, is, join, stack_of, unwrap_once};
pub use crate::types::{BoxError, Cause, EnhancedError, Location, Meta, MetaValue};
