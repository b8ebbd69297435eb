//! Creation requests and per-type contexts.
//!
//! A [`CreationRequest`] is an ordered list of types to build for one call
//! site, together with the parameters already consumed by earlier entries of
//! the same list and the chain of types whose construction led here. The
//! crawler turns each entry into a [`CreationContext`] and hands it to the
//! strategy chain.
//!
//! Requests are plain values threaded through the recursion. Tests can build
//! them directly without running a whole factory.

use wirecraft_core::{
    Parameter, ResolveError, ResolveResult, ResolverKind, ResolverSpec, TypeDescriptor,
};

use crate::crawler::Crawler;
use crate::expr::Node;

/// Position of a resolver within its factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolverId {
    pub kind: ResolverKind,
    /// Index into `resolvers` or `multi_resolvers`, depending on `kind`.
    pub index: usize,
}

impl ResolverId {
    pub fn single(index: usize) -> Self {
        Self {
            kind: ResolverKind::Single,
            index,
        }
    }

    pub fn multi(index: usize) -> Self {
        Self {
            kind: ResolverKind::Multi,
            index,
        }
    }
}

/// The resolver whose body an expression is generated for.
///
/// Its parameters are the values in scope for the whole crawl.
#[derive(Debug, Clone, Copy)]
pub struct ResolverRef<'a> {
    pub id: ResolverId,
    pub spec: &'a ResolverSpec,
}

impl<'a> ResolverRef<'a> {
    pub fn new(id: ResolverId, spec: &'a ResolverSpec) -> Self {
        Self { id, spec }
    }
}

/// Indices of caller parameters already claimed within one request.
///
/// Append-only: a claim is never released.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumedParameters {
    indices: Vec<usize>,
}

impl ConsumedParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn mark(&mut self, index: usize) {
        if !self.contains(index) {
            self.indices.push(index);
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Claim a parameter of type `ty`.
    ///
    /// An unconsumed match is preferred. When every match has already been
    /// claimed the first one is shared, so repeated requests for the same
    /// type are satisfied by the same input.
    pub fn claim<'p>(
        &mut self,
        parameters: &'p [Parameter],
        ty: &TypeDescriptor,
    ) -> Option<&'p Parameter> {
        let index = parameters
            .iter()
            .enumerate()
            .position(|(i, p)| p.ty == *ty && !self.contains(i))
            .or_else(|| parameters.iter().position(|p| p.ty == *ty))?;
        self.mark(index);
        parameters.get(index)
    }
}

/// An ordered list of types to build at one call site.
#[derive(Debug, Clone)]
pub struct CreationRequest<'a> {
    pub caller: ResolverRef<'a>,
    pub types_to_resolve: Vec<TypeDescriptor>,
    pub consumed: ConsumedParameters,
    /// Types whose construction led to this request, outermost first.
    pub path: Vec<TypeDescriptor>,
}

impl<'a> CreationRequest<'a> {
    /// The top-level request for a resolver's own body.
    pub fn root(caller: ResolverRef<'a>) -> Self {
        Self {
            types_to_resolve: caller.spec.requested_types(),
            caller,
            consumed: ConsumedParameters::new(),
            path: Vec::new(),
        }
    }
}

/// Everything a strategy needs to resolve one type.
pub struct CreationContext<'c, 'a> {
    pub caller: ResolverRef<'a>,
    /// The type being resolved.
    pub ty: &'c TypeDescriptor,
    /// Parameters consumed so far by the enclosing request.
    pub consumed: &'c mut ConsumedParameters,
    /// Types whose construction led here, outermost first. Does not include `ty`.
    pub path: &'c [TypeDescriptor],
    /// Handle back to the crawler for recursion.
    pub injector: &'c Crawler<'a>,
}

impl<'c, 'a> CreationContext<'c, 'a> {
    /// A request for the arguments of a call made while building `ty`.
    ///
    /// Same caller, fresh consumed set, path extended by `ty`.
    pub fn child_request(&self, types_to_resolve: Vec<TypeDescriptor>) -> CreationRequest<'a> {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(self.path);
        path.push(self.ty.clone());
        CreationRequest {
            caller: self.caller,
            types_to_resolve,
            consumed: ConsumedParameters::new(),
            path,
        }
    }

    /// Crawl argument nodes for a call whose formal parameters have `types`.
    ///
    /// Fails with [`ResolveError::DepthExceeded`] when the arguments would sit
    /// deeper than the configured maximum. A call without arguments never does.
    pub fn crawl_arguments(&self, types: Vec<TypeDescriptor>) -> ResolveResult<Vec<Node>> {
        if types.is_empty() {
            return Ok(Vec::new());
        }
        let max_depth = self.injector.config().max_depth();
        if self.path.len() >= max_depth {
            return Err(ResolveError::DepthExceeded {
                ty: self.ty.full_name(),
                depth: max_depth,
            });
        }
        self.injector.crawl(self.child_request(types))
    }
}
