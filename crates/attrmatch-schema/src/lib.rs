//! Declared-attribute metadata model.
//!
//! This crate is the collaborator the matcher engine reads: subject types
//! and their attribute descriptors, constructed elsewhere and handed in
//! fully formed. It is IO-free and never inspects instances, only
//! declarations.

#![forbid(unsafe_code)]

pub mod descriptor;
pub mod subject;

pub use descriptor::{AttributeDescriptor, DeclarationError, DefaultValue, DescriptorBuilder};
pub use subject::{AttributeLookup, CapabilityLookup, Subject, SubjectType};
