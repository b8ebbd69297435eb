//! wirecraft core types.
//!
//! The data model shared by the front end and the resolution engine:
//!
//! - [`TypeDescriptor`] / [`TypeHash`]: structural type identity
//! - [`entries`]: factory, resolver, delegation and constructor blueprints
//! - [`naming`]: field-name derivation for injected dependencies
//! - [`ResolverConfig`]: engine settings
//! - [`ResolveError`]: failures that cannot be expressed as data

mod accessibility;
mod config;
mod disposability;
pub mod entries;
mod error;
pub mod naming;
mod type_descriptor;
mod type_hash;

pub use accessibility::Accessibility;
pub use config::{
    DEFAULT_FIELD_PREFIX, DEFAULT_MAX_DEPTH, DEFAULT_SEQUENCE_NAME, DEFAULT_SEQUENCE_NAMESPACE,
    ResolverConfig,
};
pub use disposability::Disposability;
pub use entries::{
    ConstructorShape, Delegation, FactorySpec, HookSpec, Parameter, ResolverKind, ResolverSpec,
};
pub use error::{ResolveError, ResolveResult};
pub use type_descriptor::TypeDescriptor;
pub use type_hash::{TypeHash, hash_constants};
