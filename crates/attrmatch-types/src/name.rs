use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nominal type name declared for an attribute (`"String"`, `"Array"`, ...).
///
/// Names are opaque and compared verbatim: no aliasing, no normalization.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this name denotes a container kind understood by the
    /// declaration model (a parametrized type carrying an element type).
    pub fn is_container(&self) -> bool {
        matches!(self.0.as_str(), "Array" | "Set" | "Hash")
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(value: &str) -> Self {
        TypeName::new(value)
    }
}

/// Identity of a coercion strategy.
///
/// Equality is identity of the strategy name, not of the types it converts
/// between.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CoercerId(String);

impl CoercerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoercerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CoercerId {
    fn from(value: &str) -> Self {
        CoercerId::new(value)
    }
}

/// Identity of a capability marker a subject type may adopt.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CapabilityId(String);

impl CapabilityId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CapabilityId {
    fn from(value: &str) -> Self {
        CapabilityId::new(value)
    }
}

/// Expected type form accepted by the constraint builder.
///
/// A `Container` expectation carries exactly one element type and routes
/// evaluation through the container fast path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedType {
    Named(TypeName),
    Container { kind: TypeName, element: TypeName },
}

impl ExpectedType {
    pub fn named<T: Into<TypeName>>(name: T) -> Self {
        ExpectedType::Named(name.into())
    }

    pub fn container_of<K: Into<TypeName>, E: Into<TypeName>>(kind: K, element: E) -> Self {
        ExpectedType::Container {
            kind: kind.into(),
            element: element.into(),
        }
    }

    /// The common parametrized form: an ordered sequence of `element`.
    pub fn array_of<E: Into<TypeName>>(element: E) -> Self {
        ExpectedType::container_of("Array", element)
    }
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedType::Named(name) => write!(f, "{name}"),
            ExpectedType::Container { kind, element } => write!(f, "{kind}[{element}]"),
        }
    }
}
