use attrmatch_types::{AttrValue, CoercerId, TypeName};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Provider for an attribute's declared default.
///
/// Defaults may be literal values or computed on demand, so descriptors
/// store a provider rather than a value.
#[derive(Clone)]
pub struct DefaultValue(Arc<dyn Fn() -> AttrValue + Send + Sync>);

impl DefaultValue {
    pub fn literal<V: Into<AttrValue>>(value: V) -> Self {
        let value = value.into();
        Self(Arc::new(move || value.clone()))
    }

    pub fn provided<F>(provider: F) -> Self
    where
        F: Fn() -> AttrValue + Send + Sync + 'static,
    {
        Self(Arc::new(provider))
    }

    /// Yield the default.
    pub fn value(&self) -> AttrValue {
        (self.0)()
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultValue").field(&self.value()).finish()
    }
}

/// Declared metadata for one named attribute.
#[derive(Clone, Debug)]
pub struct AttributeDescriptor {
    /// Nominal type the attribute holds. May itself denote a container kind.
    pub primitive: TypeName,

    /// Declared member type; present only when `primitive` is a container.
    pub element: Option<TypeName>,

    /// Strategy used to convert raw input into `primitive`, if any.
    pub coercer: Option<CoercerId>,

    /// Declared default, if any.
    pub default: Option<DefaultValue>,

    /// Whether the attribute rejects uncoercible input rather than passing
    /// it through.
    pub strict: bool,
}

impl AttributeDescriptor {
    pub fn of<T: Into<TypeName>>(primitive: T) -> DescriptorBuilder {
        DescriptorBuilder::new(primitive)
    }

    /// Resolve the declared default, if one was declared.
    pub fn default_value(&self) -> Option<AttrValue> {
        self.default.as_ref().map(DefaultValue::value)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("attribute type name must not be empty")]
    EmptyTypeName,

    #[error("element type '{element}' declared for non-container primitive '{primitive}'")]
    ElementOnNonContainer {
        primitive: TypeName,
        element: TypeName,
    },
}

/// Fluent construction of [`AttributeDescriptor`]s.
///
/// `build` validates the declaration; the descriptor itself carries no
/// invalid-state checks after that.
#[derive(Clone, Debug)]
pub struct DescriptorBuilder {
    primitive: TypeName,
    element: Option<TypeName>,
    coercer: Option<CoercerId>,
    default: Option<DefaultValue>,
    strict: bool,
}

impl DescriptorBuilder {
    pub fn new<T: Into<TypeName>>(primitive: T) -> Self {
        Self {
            primitive: primitive.into(),
            element: None,
            coercer: None,
            default: None,
            strict: false,
        }
    }

    pub fn element<T: Into<TypeName>>(mut self, element: T) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn coercer<C: Into<CoercerId>>(mut self, coercer: C) -> Self {
        self.coercer = Some(coercer.into());
        self
    }

    pub fn default_value<V: Into<AttrValue>>(mut self, value: V) -> Self {
        self.default = Some(DefaultValue::literal(value));
        self
    }

    pub fn default_provider(mut self, provider: DefaultValue) -> Self {
        self.default = Some(provider);
        self
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn build(self) -> Result<AttributeDescriptor, DeclarationError> {
        if self.primitive.as_str().is_empty() {
            return Err(DeclarationError::EmptyTypeName);
        }
        if let Some(element) = &self.element {
            if !self.primitive.is_container() {
                return Err(DeclarationError::ElementOnNonContainer {
                    primitive: self.primitive.clone(),
                    element: element.clone(),
                });
            }
        }

        Ok(AttributeDescriptor {
            primitive: self.primitive,
            element: self.element,
            coercer: self.coercer,
            default: self.default,
            strict: self.strict,
        })
    }
}
