use crate::matcher::{Matcher, failure_for};
use attrmatch_schema::{AttributeDescriptor, AttributeLookup, Subject};
use attrmatch_types::ids;
use attrmatch_types::{AttrValue, CoercerId, ExpectedType};

/// Matches when a subject type declares an attribute satisfying every
/// layered expectation.
///
/// Construction fixes the attribute name and, optionally, an expected
/// type. `coerced_with`, `with_default`, and `strict` layer further
/// expectations; each takes and returns the builder so calls chain, and a
/// repeated call overwrites the previous value. Expectations left unset
/// never cause a mismatch.
///
/// A parametrized container expectation (`ExpectedType::Container`)
/// evaluates shape only: the container kind and the declared element type.
/// Coercer, default, and strict expectations set on the same builder are
/// skipped on that path.
#[derive(Clone, Debug)]
pub struct HaveAttribute {
    name: String,
    expected_type: Option<ExpectedType>,
    expected_coercer: Option<CoercerId>,
    expected_default: Option<AttrValue>,
    expected_strict: bool,

    /// Subject type name captured by the most recent `matches` call.
    evaluated: Option<String>,
}

pub fn have_attribute<S: Into<String>>(name: S) -> HaveAttribute {
    HaveAttribute::new(name)
}

pub fn have_attribute_of_type<S: Into<String>>(name: S, expected: ExpectedType) -> HaveAttribute {
    HaveAttribute::of_type(name, expected)
}

impl HaveAttribute {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            expected_type: None,
            expected_coercer: None,
            expected_default: None,
            expected_strict: false,
            evaluated: None,
        }
    }

    pub fn of_type<S: Into<String>>(name: S, expected: ExpectedType) -> Self {
        let mut matcher = Self::new(name);
        matcher.expected_type = Some(expected);
        matcher
    }

    /// Expect the attribute's coercion strategy, compared by identity.
    pub fn coerced_with<C: Into<CoercerId>>(mut self, coercer: C) -> Self {
        self.expected_coercer = Some(coercer.into());
        self
    }

    /// Expect the attribute's declared default, compared structurally.
    pub fn with_default<V: Into<AttrValue>>(mut self, default: V) -> Self {
        self.expected_default = Some(default.into());
        self
    }

    /// Require the attribute to enforce strict coercion.
    pub fn strict(mut self) -> Self {
        self.expected_strict = true;
        self
    }

    fn matches_descriptor(&self, descriptor: &AttributeDescriptor) -> bool {
        if let Some(ExpectedType::Container { kind, element }) = &self.expected_type {
            // Container expectations check shape only; the remaining
            // expectations are deliberately not consulted on this path.
            return descriptor.primitive == *kind && descriptor.element.as_ref() == Some(element);
        }

        self.named_type_matches(descriptor)
            && self.coercer_matches(descriptor)
            && self.default_matches(descriptor)
            && self.strict_matches(descriptor)
    }

    fn named_type_matches(&self, descriptor: &AttributeDescriptor) -> bool {
        match &self.expected_type {
            Some(ExpectedType::Named(name)) => descriptor.primitive == *name,
            // Absent, or a container form already handled by the fast path.
            _ => true,
        }
    }

    fn coercer_matches(&self, descriptor: &AttributeDescriptor) -> bool {
        match &self.expected_coercer {
            Some(expected) => descriptor.coercer.as_ref() == Some(expected),
            None => true,
        }
    }

    fn default_matches(&self, descriptor: &AttributeDescriptor) -> bool {
        match &self.expected_default {
            Some(expected) => descriptor.default_value().as_ref() == Some(expected),
            None => true,
        }
    }

    fn strict_matches(&self, descriptor: &AttributeDescriptor) -> bool {
        !self.expected_strict || descriptor.strict
    }

    /// What the matcher expects, rendered in fixed clause order.
    pub fn description(&self) -> String {
        let mut out = format!("have attribute {}", self.name);
        if let Some(expected) = &self.expected_type {
            out.push_str(&format!(" of type {expected}"));
        }
        if let Some(coercer) = &self.expected_coercer {
            out.push_str(&format!(" coerced with {coercer}"));
        }
        if let Some(default) = &self.expected_default {
            out.push_str(&format!(" with default \"{default}\""));
        }
        if self.expected_strict {
            out.push_str(" and is strict");
        }
        out
    }

    /// Failure message for the most recent evaluation, `None` before any.
    pub fn failure_message(&self) -> Option<String> {
        self.evaluated
            .as_ref()
            .map(|subject| failure_for(subject, &self.description()))
    }
}

impl<S: AttributeLookup> Matcher<S> for HaveAttribute {
    fn id(&self) -> &'static str {
        ids::MATCHER_HAVE_ATTRIBUTE
    }

    fn matches(&mut self, subject: &S) -> bool {
        self.evaluated = Some(subject.type_name().to_string());
        match subject.attribute(&self.name) {
            Some(descriptor) => self.matches_descriptor(descriptor),
            None => false,
        }
    }

    fn description(&self) -> String {
        HaveAttribute::description(self)
    }

    fn failure_message(&self) -> Option<String> {
        HaveAttribute::failure_message(self)
    }
}
