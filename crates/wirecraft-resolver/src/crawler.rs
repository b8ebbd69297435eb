//! Recursive expression crawler.
//!
//! The crawler walks a [`CreationRequest`] head to tail, asking the strategy
//! chain for a node per type. Strategies that call something recurse back
//! through [`Crawler::crawl`] for the call's arguments, so one top-level
//! request yields a full tree.
//!
//! Recursion is bounded two ways: a type already on the request path is a
//! cycle, and argument crawls below the configured depth are rejected (see
//! [`CreationContext::crawl_arguments`]).
//!
//! Calls from one own resolver to another are recorded as they are
//! committed, so loops between resolver bodies can be found once every
//! resolver has been crawled.

use std::cell::RefCell;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};
use wirecraft_core::{
    ConstructorShape, FactorySpec, ResolveError, ResolveResult, ResolverConfig, TypeDescriptor,
    naming::field_name_for,
};

use crate::context::{CreationContext, CreationRequest, ResolverId, ResolverRef};
use crate::expr::Node;
use crate::strategy::CHAIN;

/// Builds creation expressions for one factory.
pub struct Crawler<'a> {
    factory: &'a FactorySpec,
    config: &'a ResolverConfig,
    /// Known constructors by type identity. First shape per type wins.
    constructors: FxHashMap<&'a TypeDescriptor, &'a ConstructorShape>,
    /// `(caller, callee)` pairs of own resolvers, first seen first.
    calls: RefCell<Vec<(ResolverId, ResolverId)>>,
}

impl<'a> Crawler<'a> {
    pub fn new(factory: &'a FactorySpec, config: &'a ResolverConfig) -> Self {
        let mut constructors = FxHashMap::default();
        let shapes = factory
            .constructors
            .iter()
            .chain(factory.inheritances.iter().flat_map(|b| b.constructors.iter()));
        for shape in shapes {
            constructors.entry(&shape.ty).or_insert(shape);
        }

        Self {
            factory,
            config,
            constructors,
            calls: RefCell::default(),
        }
    }

    pub fn factory(&self) -> &'a FactorySpec {
        self.factory
    }

    pub fn config(&self) -> &'a ResolverConfig {
        self.config
    }

    /// The known constructor of `ty`, if any.
    pub fn constructor_for(&self, ty: &TypeDescriptor) -> Option<&'a ConstructorShape> {
        self.constructors.get(ty).copied()
    }

    /// Note that the body of `caller` calls the own resolver `callee`.
    pub fn record_call(&self, caller: ResolverId, callee: ResolverId) {
        let mut calls = self.calls.borrow_mut();
        if !calls.contains(&(caller, callee)) {
            calls.push((caller, callee));
        }
    }

    /// Own-resolver calls committed so far.
    pub fn resolver_calls(&self) -> Vec<(ResolverId, ResolverId)> {
        self.calls.borrow().clone()
    }

    /// Crawl the body of `caller`: one node per requested type.
    pub fn crawl_resolver(&self, caller: ResolverRef<'a>) -> ResolveResult<Vec<Node>> {
        self.crawl(CreationRequest::root(caller))
    }

    /// Resolve every type of `request`, in order.
    ///
    /// Consumed parameters carry forward from one type to the next. A type
    /// no strategy can produce becomes an [`Node::UnsatisfiedField`].
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn crawl(&self, request: CreationRequest<'a>) -> ResolveResult<Vec<Node>> {
        let CreationRequest {
            caller,
            types_to_resolve,
            mut consumed,
            path,
        } = request;

        let mut nodes = Vec::with_capacity(types_to_resolve.len());
        for ty in &types_to_resolve {
            if path.contains(ty) {
                return Err(ResolveError::CyclicDependency {
                    ty: ty.full_name(),
                    path: path.iter().map(TypeDescriptor::full_name).collect(),
                });
            }
            let mut ctx = CreationContext {
                caller,
                ty,
                consumed: &mut consumed,
                path: &path,
                injector: self,
            };
            nodes.push(self.resolve_one(&mut ctx)?);
        }
        Ok(nodes)
    }

    fn resolve_one(&self, ctx: &mut CreationContext<'_, 'a>) -> ResolveResult<Node> {
        for strategy in &CHAIN {
            if let Some(node) = strategy.apply(ctx)? {
                trace!(
                    strategy = strategy.name(),
                    ty = %ctx.ty,
                    caller = %ctx.caller.spec.name,
                    "strategy committed"
                );
                return Ok(node);
            }
        }

        let field_name = field_name_for(ctx.ty, self.config.field_prefix());
        debug!(
            ty = %ctx.ty.full_name(),
            field = %field_name,
            caller = %ctx.caller.spec.name,
            "no local source, injecting"
        );
        Ok(Node::unsatisfied(ctx.ty.clone(), field_name))
    }
}
