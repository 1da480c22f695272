//! Pure matcher evaluation (no IO).
//!
//! Input: subject types exposing declared-attribute metadata.
//! Output: boolean verdicts plus deterministic description and failure
//! strings for the assertion framework driving the match.

#![forbid(unsafe_code)]

mod adopt_capability;
mod have_attribute;
mod matcher;
mod report;

pub use adopt_capability::{AdoptCapability, adopt_capability};
pub use have_attribute::{HaveAttribute, have_attribute, have_attribute_of_type};
pub use matcher::Matcher;
pub use report::MatchReport;

#[cfg(test)]
mod proptest;
