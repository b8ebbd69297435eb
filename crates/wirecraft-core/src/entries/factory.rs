//! Factory blueprint entries.

use crate::TypeDescriptor;

use super::{Parameter, ResolverSpec};

/// A property exposing a sub-factory whose resolvers may satisfy requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    /// Property name used as the access path.
    pub property_name: String,
    /// The delegated factory. Its `ty` is the property type.
    pub factory: FactorySpec,
}

impl Delegation {
    pub fn new(property_name: impl Into<String>, factory: FactorySpec) -> Self {
        Self {
            property_name: property_name.into(),
            factory,
        }
    }
}

/// A known constructor of a concrete type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorShape {
    /// The constructed type.
    pub ty: TypeDescriptor,
    /// Constructor parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

impl ConstructorShape {
    pub fn new(ty: TypeDescriptor) -> Self {
        Self {
            ty,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, ty: TypeDescriptor, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(ty, name));
        self
    }
}

/// Blueprint of one generated factory class.
///
/// # Example
///
/// ```
/// use wirecraft_core::{ConstructorShape, FactorySpec, ResolverSpec, TypeDescriptor};
///
/// let widget = TypeDescriptor::new("Game", "Widget");
/// let gear = TypeDescriptor::new("Game", "Gear");
///
/// let factory = FactorySpec::new(TypeDescriptor::new("Game", "WidgetFactory"))
///     .with_resolver(ResolverSpec::single("Single", widget).with_resolution(gear.clone()))
///     .with_constructor(
///         ConstructorShape::new(gear)
///             .with_parameter(TypeDescriptor::new("Game", "Logger"), "logger"),
///     );
/// assert_eq!(factory.resolvers.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorySpec {
    /// The factory class itself.
    pub ty: TypeDescriptor,
    /// Single resolvers in declaration order.
    pub resolvers: Vec<ResolverSpec>,
    /// Multi-resolvers in declaration order.
    pub multi_resolvers: Vec<ResolverSpec>,
    /// Delegated sub-factories.
    pub delegations: Vec<Delegation>,
    /// Base factories, nearest base first.
    pub inheritances: Vec<FactorySpec>,
    /// Known constructor shapes of types this blueprint may construct.
    pub constructors: Vec<ConstructorShape>,
}

impl FactorySpec {
    pub fn new(ty: TypeDescriptor) -> Self {
        Self {
            ty,
            resolvers: Vec::new(),
            multi_resolvers: Vec::new(),
            delegations: Vec::new(),
            inheritances: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Add a resolver, routed to `resolvers` or `multi_resolvers` by its kind.
    pub fn with_resolver(mut self, resolver: ResolverSpec) -> Self {
        if resolver.is_multi() {
            self.multi_resolvers.push(resolver);
        } else {
            self.resolvers.push(resolver);
        }
        self
    }

    pub fn with_multi_resolver(self, resolver: ResolverSpec) -> Self {
        debug_assert!(resolver.is_multi());
        self.with_resolver(resolver)
    }

    pub fn with_delegation(
        mut self,
        property_name: impl Into<String>,
        factory: FactorySpec,
    ) -> Self {
        self.delegations
            .push(Delegation::new(property_name, factory));
        self
    }

    pub fn with_inheritance(mut self, base: FactorySpec) -> Self {
        self.inheritances.push(base);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorShape) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// The nearest base factory, if any.
    pub fn direct_base(&self) -> Option<&FactorySpec> {
        self.inheritances.first()
    }

    /// Iterate over every resolver and multi-resolver, single resolvers first.
    pub fn all_resolvers(&self) -> impl Iterator<Item = &ResolverSpec> {
        self.resolvers.iter().chain(self.multi_resolvers.iter())
    }
}
