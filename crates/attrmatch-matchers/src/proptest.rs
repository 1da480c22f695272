//! Property-based tests for the matcher engine.
//!
//! These tests use proptest to verify invariants around:
//! - The existence gate (undeclared attributes never match)
//! - Vacuous truth for name-only matchers
//! - Conjunction correctness on the general path
//! - Description determinism across evaluations

use crate::matcher::Matcher;
use crate::have_attribute::{HaveAttribute, have_attribute, have_attribute_of_type};
use attrmatch_schema::{AttributeDescriptor, SubjectType};
use attrmatch_types::{AttrValue, CoercerId, ExpectedType, TypeName};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for attribute names.
fn arb_attr_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

/// Strategy for non-container nominal type names.
fn arb_type_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("String".to_string()),
        Just("Integer".to_string()),
        Just("Float".to_string()),
        Just("DateTime".to_string()),
        Just("Object".to_string()),
    ]
}

/// Strategy for coercer identities.
fn arb_coercer() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Za-z]{0,11}Coercer").unwrap()
}

/// Strategy for scalar default values.
fn arb_default() -> impl Strategy<Value = AttrValue> {
    prop_oneof![
        any::<bool>().prop_map(AttrValue::Bool),
        any::<i64>().prop_map(AttrValue::Int),
        prop::string::string_regex("[a-z]{1,8}")
            .unwrap()
            .prop_map(AttrValue::Str),
    ]
}

/// Which facet of the general path to flip from matching to mismatching.
#[derive(Clone, Copy, Debug)]
enum Flip {
    Type,
    Coercer,
    Default,
    Strict,
}

fn arb_flip() -> impl Strategy<Value = Flip> {
    prop_oneof![
        Just(Flip::Type),
        Just(Flip::Coercer),
        Just(Flip::Default),
        Just(Flip::Strict),
    ]
}

fn subject_with(name: &str, descriptor: AttributeDescriptor) -> SubjectType {
    SubjectType::new("Arbitrary").declare(name, descriptor)
}

/// Descriptor carrying every facet, strict unless the strict facet is the
/// one being flipped.
fn full_descriptor(primitive: &str, coercer: &str, default: &AttrValue, strict: bool) -> AttributeDescriptor {
    let builder = AttributeDescriptor::of(primitive)
        .coercer(coercer)
        .default_value(default.clone());
    let builder = if strict { builder.strict() } else { builder };
    builder.build().unwrap()
}

/// Matcher expecting every facet exactly as declared.
fn matching_constraints(
    name: &str,
    primitive: &str,
    coercer: &str,
    default: &AttrValue,
) -> HaveAttribute {
    have_attribute_of_type(name, ExpectedType::named(primitive))
        .coerced_with(coercer)
        .with_default(default.clone())
        .strict()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Any constraint set built from an undeclared name evaluates false.
    #[test]
    fn existence_gate_holds(
        name in arb_attr_name(),
        primitive in arb_type_name(),
        coercer in arb_coercer(),
        default in arb_default(),
    ) {
        let subject = SubjectType::new("Arbitrary");

        let mut matcher = matching_constraints(&name, &primitive, &coercer, &default);
        prop_assert!(!matcher.matches(&subject));

        let mut name_only = have_attribute(name);
        prop_assert!(!name_only.matches(&subject));
    }

    /// A name-only matcher accepts every declared descriptor.
    #[test]
    fn name_only_matcher_is_vacuously_true(
        name in arb_attr_name(),
        primitive in arb_type_name(),
        coercer in arb_coercer(),
        default in arb_default(),
        strict in any::<bool>(),
    ) {
        let subject = subject_with(&name, full_descriptor(&primitive, &coercer, &default, strict));

        let mut matcher = have_attribute(name);
        prop_assert!(matcher.matches(&subject));
    }

    /// With every facet declared and expected to match, the conjunction
    /// holds.
    #[test]
    fn matching_facets_never_fail(
        name in arb_attr_name(),
        primitive in arb_type_name(),
        coercer in arb_coercer(),
        default in arb_default(),
    ) {
        let subject = subject_with(&name, full_descriptor(&primitive, &coercer, &default, true));

        let mut matcher = matching_constraints(&name, &primitive, &coercer, &default);
        prop_assert!(matcher.matches(&subject));
    }

    /// Flipping exactly one facet from matching to mismatching flips the
    /// result to false.
    #[test]
    fn single_mismatched_facet_fails(
        name in arb_attr_name(),
        primitive in arb_type_name(),
        coercer in arb_coercer(),
        default in arb_default(),
        flip in arb_flip(),
    ) {
        let strict = !matches!(flip, Flip::Strict);
        let subject = subject_with(&name, full_descriptor(&primitive, &coercer, &default, strict));

        // Each flipped expectation is derived from the declared one, so it
        // is unequal by construction.
        let mut matcher = match flip {
            Flip::Type => have_attribute_of_type(
                name.as_str(),
                ExpectedType::Named(TypeName::new(format!("{primitive}X"))),
            )
            .coerced_with(coercer.as_str())
            .with_default(default.clone())
            .strict(),
            Flip::Coercer => have_attribute_of_type(name.as_str(), ExpectedType::named(primitive.as_str()))
                .coerced_with(CoercerId::new(format!("{coercer}X")))
                .with_default(default.clone())
                .strict(),
            Flip::Default => have_attribute_of_type(name.as_str(), ExpectedType::named(primitive.as_str()))
                .coerced_with(coercer.as_str())
                .with_default(AttrValue::list([default.clone()]))
                .strict(),
            Flip::Strict => matching_constraints(&name, &primitive, &coercer, &default),
        };
        prop_assert!(!matcher.matches(&subject));
    }

    /// The description is a pure function of builder state: unchanged by
    /// evaluation and by the subject evaluated against.
    #[test]
    fn description_is_deterministic(
        name in arb_attr_name(),
        primitive in arb_type_name(),
        coercer in arb_coercer(),
        default in arb_default(),
    ) {
        let mut matcher = matching_constraints(&name, &primitive, &coercer, &default);
        let before = matcher.description();

        matcher.matches(&SubjectType::new("First"));
        prop_assert_eq!(matcher.description(), before.clone());

        matcher.matches(&subject_with(&name, full_descriptor(&primitive, &coercer, &default, true)));
        prop_assert_eq!(matcher.description(), before);
    }
}
