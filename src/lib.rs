//! wirecraft
//!
//! Build-time factory wiring. A host describes a factory class as a
//! [`FactorySpec`]; wirecraft works out, for every resolver method, the
//! expression that constructs its value, and which values the factory must
//! receive from outside.
//!
//! ```
//! use wirecraft::prelude::*;
//!
//! let gear = TypeDescriptor::new("Game", "Gear");
//! let factory = FactorySpec::new(TypeDescriptor::new("Game", "WidgetFactory"))
//!     .with_resolver(
//!         ResolverSpec::single("Single", TypeDescriptor::new("Game", "Widget"))
//!             .with_resolution(gear.clone()),
//!     )
//!     .with_constructor(
//!         ConstructorShape::new(gear)
//!             .with_parameter(TypeDescriptor::new("Game", "Logger"), "logger"),
//!     );
//!
//! let root = wirecraft::resolve_factory(&factory).unwrap();
//! assert_eq!(root.roots_of("Single").unwrap()[0].code(), "new Gear(_logger)");
//! ```

pub use wirecraft_core::{
    Accessibility, ConstructorShape, Delegation, Disposability, FactorySpec, HookSpec, Parameter,
    ResolveError, ResolveResult, ResolverConfig, ResolverKind, ResolverSpec, TypeDescriptor,
    TypeHash,
};
pub use wirecraft_resolver::{
    ConstructorLayout, Dependency, DisposableInfo, DisposalTarget, ExpressionBuilder,
    InjectionResult, Node, ResolutionRoot, ResolverId,
};

/// Resolve `factory` with the default configuration.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn resolve_factory(factory: &FactorySpec) -> ResolveResult<ResolutionRoot<'_>> {
    ExpressionBuilder::new(factory).build()
}

/// Resolve `factory` with `config`.
pub fn resolve_factory_with(
    factory: &FactorySpec,
    config: ResolverConfig,
) -> ResolveResult<ResolutionRoot<'_>> {
    ExpressionBuilder::new(factory).with_config(config).build()
}

// Re-export main types
pub mod prelude {
    pub use crate::{resolve_factory, resolve_factory_with};
    pub use wirecraft_core::{
        Accessibility, ConstructorShape, Disposability, FactorySpec, ResolveError, ResolverConfig,
        ResolverSpec, TypeDescriptor,
    };
    pub use wirecraft_resolver::{Dependency, ExpressionBuilder, Node, ResolutionRoot, ResolverId};
}
