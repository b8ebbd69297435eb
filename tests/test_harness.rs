// tests/test_harness.rs
//! Shared fixtures for wirecraft integration tests
//!
//! Short constructors for the blueprint types plus a few assertions over a
//! resolved factory. Included by each test file with `mod test_harness;`.

#![allow(dead_code)]

use wirecraft::prelude::*;

/// Type in the `Game` namespace.
pub fn ty(name: &str) -> TypeDescriptor {
    TypeDescriptor::new("Game", name)
}

/// Factory type in the `Game` namespace.
pub fn factory(name: &str) -> FactorySpec {
    FactorySpec::new(ty(name))
}

/// Constructor of `name` taking the given `(type, parameter)` pairs.
pub fn ctor(name: &str, parameters: &[(&str, &str)]) -> ConstructorShape {
    parameters
        .iter()
        .fold(ConstructorShape::new(ty(name)), |shape, (t, p)| {
            shape.with_parameter(ty(t), *p)
        })
}

/// Resolve with the default configuration, panicking on error.
pub fn resolve(factory: &FactorySpec) -> ResolutionRoot<'_> {
    resolve_factory(factory)
        .unwrap_or_else(|e| panic!("Failed to resolve {}: {}", factory.ty.full_name(), e))
}

/// Code of every root of the resolver called `name`.
pub fn codes(root: &ResolutionRoot<'_>, name: &str) -> Vec<String> {
    root.roots_of(name)
        .unwrap_or_else(|| panic!("No resolver named {}", name))
        .iter()
        .map(Node::code)
        .collect()
}

/// Code of the single root of the resolver called `name`.
pub fn code(root: &ResolutionRoot<'_>, name: &str) -> String {
    let mut all = codes(root, name);
    assert_eq!(all.len(), 1, "Expected one root for {}", name);
    all.remove(0)
}

/// Field names of the aggregated dependencies, in order.
pub fn dependency_fields<'r>(root: &'r ResolutionRoot<'_>) -> Vec<&'r str> {
    root.injection
        .dependencies()
        .iter()
        .map(|d| d.field_name.as_str())
        .collect()
}
