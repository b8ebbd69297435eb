//! Resolver method entries.
//!
//! A resolver is a factory method that declares what value it produces. A
//! single resolver produces one value; a multi-resolver produces a sequence
//! with one element per declared resolution.

use crate::{Accessibility, ResolverConfig, TypeDescriptor};

use super::Parameter;

/// Whether a resolver produces one value or a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResolverKind {
    Single,
    Multi,
}

/// A hook instance held by the generated factory for one resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookSpec {
    /// Hook type.
    pub ty: TypeDescriptor,
    /// Name of the field the hook instance is stored in.
    pub field_name: String,
}

impl HookSpec {
    pub fn new(ty: TypeDescriptor, field_name: impl Into<String>) -> Self {
        Self {
            ty,
            field_name: field_name.into(),
        }
    }
}

/// Blueprint of one resolver method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSpec {
    /// Method name.
    pub name: String,
    /// Single or multi.
    pub kind: ResolverKind,
    /// Produced type. For a multi-resolver this is the element type.
    pub return_type: TypeDescriptor,
    /// Formal parameters, in declaration order.
    pub parameters: Vec<Parameter>,
    /// Types declared to satisfy the return value, in declaration order.
    pub resolutions: Vec<TypeDescriptor>,
    /// Declared accessibility.
    pub accessibility: Accessibility,
    /// Hooks attached to this resolver.
    pub hooks: Vec<HookSpec>,
}

impl ResolverSpec {
    /// Create a single resolver returning `return_type`.
    pub fn single(name: impl Into<String>, return_type: TypeDescriptor) -> Self {
        Self::new(name, ResolverKind::Single, return_type)
    }

    /// Create a multi-resolver producing a sequence of `element_type`.
    pub fn multi(name: impl Into<String>, element_type: TypeDescriptor) -> Self {
        Self::new(name, ResolverKind::Multi, element_type)
    }

    fn new(name: impl Into<String>, kind: ResolverKind, return_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            kind,
            return_type,
            parameters: Vec::new(),
            resolutions: Vec::new(),
            accessibility: Accessibility::Public,
            hooks: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, ty: TypeDescriptor, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(ty, name));
        self
    }

    pub fn with_resolution(mut self, ty: TypeDescriptor) -> Self {
        self.resolutions.push(ty);
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn with_hook(mut self, ty: TypeDescriptor, field_name: impl Into<String>) -> Self {
        self.hooks.push(HookSpec::new(ty, field_name));
        self
    }

    pub fn is_multi(&self) -> bool {
        self.kind == ResolverKind::Multi
    }

    /// The type a single resolver actually constructs: the first declared
    /// resolution, or the return type when none is declared.
    pub fn actual_resolution(&self) -> &TypeDescriptor {
        self.resolutions.first().unwrap_or(&self.return_type)
    }

    /// The type a caller receives from this resolver.
    ///
    /// For a multi-resolver this is the configured sequence type over the
    /// element type.
    pub fn provided_type(&self, config: &ResolverConfig) -> TypeDescriptor {
        match self.kind {
            ResolverKind::Single => self.return_type.clone(),
            ResolverKind::Multi => config.sequence_of(&self.return_type),
        }
    }

    /// Types a crawl of this resolver must produce, in order.
    pub fn requested_types(&self) -> Vec<TypeDescriptor> {
        match self.kind {
            ResolverKind::Single => vec![self.actual_resolution().clone()],
            ResolverKind::Multi => self.resolutions.clone(),
        }
    }

    /// Types of the formal parameters, in order.
    pub fn parameter_types(&self) -> Vec<TypeDescriptor> {
        self.parameters.iter().map(|p| p.ty.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> TypeDescriptor {
        TypeDescriptor::new("Game", "Widget")
    }

    #[test]
    fn actual_resolution_prefers_first_declared() {
        let resolver = ResolverSpec::single("Single", widget())
            .with_resolution(TypeDescriptor::new("Game", "Gear"))
            .with_resolution(TypeDescriptor::new("Game", "Cog"));
        assert_eq!(resolver.actual_resolution().name, "Gear");
        assert_eq!(resolver.requested_types().len(), 1);
    }

    #[test]
    fn actual_resolution_falls_back_to_return_type() {
        let resolver = ResolverSpec::single("Single", widget());
        assert_eq!(resolver.actual_resolution(), &widget());
    }

    #[test]
    fn multi_requests_every_resolution_in_order() {
        let a = TypeDescriptor::global("A");
        let b = TypeDescriptor::global("B");
        let resolver = ResolverSpec::multi("All", widget())
            .with_resolution(a.clone())
            .with_resolution(b.clone())
            .with_resolution(a.clone());
        assert_eq!(resolver.requested_types(), vec![a.clone(), b, a]);
    }

    #[test]
    fn multi_provides_sequence() {
        let config = ResolverConfig::default();
        let resolver = ResolverSpec::multi("All", widget());
        let provided = resolver.provided_type(&config);
        assert_eq!(provided.name, "IEnumerable");
        assert_eq!(provided.type_arguments, vec![widget()]);

        let single = ResolverSpec::single("One", widget());
        assert_eq!(single.provided_type(&config), widget());
    }

    #[test]
    fn builder_defaults_to_public() {
        let resolver = ResolverSpec::single("One", widget());
        assert_eq!(resolver.accessibility, Accessibility::Public);
        assert!(!resolver.is_multi());
    }
}
