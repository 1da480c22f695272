//! Stable identifiers for matchers.
//!
//! `matcher_id` is a dotted namespace, stable across releases so reports can
//! be deduplicated and trended by consumers.

pub const MATCHER_HAVE_ATTRIBUTE: &str = "matchers.have_attribute";
pub const MATCHER_ADOPT_CAPABILITY: &str = "matchers.adopt_capability";
