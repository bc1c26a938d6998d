//! Core data types: the enhanced error value, location capture, metadata.

pub mod enhanced;
pub mod location;
pub mod meta;

pub(crate) mod render;

pub use enhanced::{BoxError, Cause, Chain, EnhancedError, OpaqueError};
pub use location::Location;
pub use meta::{Meta, MetaEntry, MetaValue, MetaVec};
