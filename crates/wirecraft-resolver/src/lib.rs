//! wirecraft Resolver
//!
//! Turns a factory blueprint into creation expressions for each of its
//! resolvers, and aggregates what the generated factory has to receive from
//! outside.
//!
//! ## Passes
//!
//! - **Crawl**: every resolver is resolved type by type through the strategy
//!   chain, recursing for call arguments
//! - **Aggregate**: unsatisfied leaves become dependencies; disposal
//!   requirements, namespaces and the constructor layout are derived from them
//!
//! ## Modules
//!
//! - [`expr`]: Expression tree nodes
//! - [`context`]: Creation requests, per-type contexts, consumed parameters
//! - [`source`]: Factory and resolver sources for resolver calls
//! - [`strategy`]: The ordered strategy chain
//! - [`crawler`]: Recursive crawler with cycle and depth guards
//! - [`injection`]: Per-resolver trees and deduplicated dependencies
//! - [`layout`]: Constructor layout including base factory parameters
//! - [`disposal`]: Disposal requirements
//! - [`namespaces`]: Referenced namespaces
//! - [`builder`]: [`ExpressionBuilder`] entry point

pub mod builder;
pub mod context;
pub mod crawler;
pub mod disposal;
pub mod expr;
pub mod injection;
pub mod layout;
pub mod namespaces;
pub mod source;
pub mod strategy;

pub use builder::{ExpressionBuilder, ResolutionRoot};
pub use context::{ConsumedParameters, CreationContext, CreationRequest, ResolverId, ResolverRef};
pub use crawler::Crawler;
pub use disposal::{DisposableInfo, DisposalTarget};
pub use expr::{CreationExpTree, MultiCreationExpTree, Node};
pub use injection::{Dependency, InjectionResult};
pub use layout::ConstructorLayout;
pub use namespaces::collect_namespaces;
pub use source::{Candidate, FactorySource, ResolverSource};
pub use strategy::{CHAIN, Strategy};

// Re-export the error type for convenience
pub use wirecraft_core::{ResolveError, ResolveResult};
