//! Stable vocabulary types shared across the attrmatch workspace.
//!
//! This crate is intentionally boring:
//! - identity newtypes for types, coercion strategies, and capabilities
//! - the expected-type forms understood by the constraint builder
//! - the attribute value model used for declared defaults
//! - stable string IDs for matchers

#![forbid(unsafe_code)]

pub mod ids;
pub mod name;
pub mod value;

pub use name::{CapabilityId, CoercerId, ExpectedType, TypeName};
pub use value::AttrValue;
