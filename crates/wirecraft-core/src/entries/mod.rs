//! Blueprint entry types consumed by the resolution engine.
//!
//! - [`FactorySpec`] - One generated factory class
//! - [`ResolverSpec`] - A single or multi resolver method
//! - [`Delegation`] - A property exposing a sub-factory
//! - [`ConstructorShape`] - A known constructor of a concrete type
//! - [`Parameter`], [`HookSpec`] - Member types

mod factory;
mod parameter;
mod resolver;

pub use factory::{ConstructorShape, Delegation, FactorySpec};
pub use parameter::Parameter;
pub use resolver::{HookSpec, ResolverKind, ResolverSpec};
