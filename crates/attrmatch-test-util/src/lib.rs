//! Shared fixtures for matcher tests.
//!
//! The canonical fixture is [`example_subject`], a subject type exercising
//! every descriptor facet: untyped, simple, container, coerced, defaulted,
//! and strict attributes.

#![forbid(unsafe_code)]

use attrmatch_schema::{AttributeDescriptor, DefaultValue, SubjectType};
use attrmatch_types::AttrValue;

/// Capability marker adopted by value-object-like subjects.
pub const VALUE_OBJECT: &str = "value_object";

pub fn attr(primitive: &str) -> AttributeDescriptor {
    AttributeDescriptor::of(primitive).build().unwrap()
}

pub fn container_attr(kind: &str, element: &str) -> AttributeDescriptor {
    AttributeDescriptor::of(kind).element(element).build().unwrap()
}

pub fn coerced_attr(primitive: &str, coercer: &str) -> AttributeDescriptor {
    AttributeDescriptor::of(primitive)
        .coercer(coercer)
        .build()
        .unwrap()
}

pub fn defaulted_attr<V: Into<AttrValue>>(primitive: &str, default: V) -> AttributeDescriptor {
    AttributeDescriptor::of(primitive)
        .default_value(default)
        .build()
        .unwrap()
}

pub fn strict_attr(primitive: &str) -> AttributeDescriptor {
    AttributeDescriptor::of(primitive).strict().build().unwrap()
}

/// Subject type used across matcher tests.
pub fn example_subject() -> SubjectType {
    SubjectType::new("Example")
        .declare("any", attr("Object"))
        .declare("foo", attr("String"))
        .declare("bar", container_attr("Array", "String"))
        .declare("baz", attr("Array"))
        .declare("lol", coerced_attr("DateTime", "FakeCoercer"))
        .declare("hello", defaulted_attr("String", "Hello"))
        .declare("hi_no_default", attr("String"))
        .declare("locked", strict_attr("String"))
        .declare(
            "tags",
            AttributeDescriptor::of("Array")
                .element("String")
                .default_provider(DefaultValue::provided(|| AttrValue::list(["a", "b"])))
                .build()
                .unwrap(),
        )
        .declare(
            "every",
            AttributeDescriptor::of("String")
                .coercer("FakeCoercer")
                .default_value("x")
                .strict()
                .build()
                .unwrap(),
        )
}

/// A subject that has adopted the value-object capability.
pub fn value_object_subject() -> SubjectType {
    SubjectType::new("ExampleValueObject").adopt(VALUE_OBJECT)
}

/// A subject with no declarations at all.
pub fn bare_subject() -> SubjectType {
    SubjectType::new("Plain")
}
