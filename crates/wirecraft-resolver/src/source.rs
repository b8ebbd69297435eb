//! Where a requested type may come from.
//!
//! A [`FactorySource`] names a family of factories reachable from the one
//! being generated: the factory itself, its delegated sub-factories, or its
//! base factories. A [`ResolverSource`] picks single or multi resolvers
//! within them. Together they cover every "call an existing resolver"
//! strategy.

use wirecraft_core::{FactorySpec, ResolverConfig, ResolverKind, ResolverSpec, TypeDescriptor};

use crate::context::{ResolverId, ResolverRef};

/// Family of factories a resolver may be borrowed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorySource {
    /// The factory being generated, accessed through `this`.
    Root,
    /// A delegated sub-factory, accessed through its property.
    Delegation,
    /// A base factory, accessed through `base`.
    Inheritance,
}

/// Which resolver list of a factory to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverSource {
    Single,
    Multi,
}

impl ResolverSource {
    fn kind(self) -> ResolverKind {
        match self {
            ResolverSource::Single => ResolverKind::Single,
            ResolverSource::Multi => ResolverKind::Multi,
        }
    }

    fn list(self, factory: &FactorySpec) -> &[ResolverSpec] {
        match self {
            ResolverSource::Single => &factory.resolvers,
            ResolverSource::Multi => &factory.multi_resolvers,
        }
    }
}

/// A resolver that can be invoked, with the access prefix to reach it.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// `this`, `base`, or a delegation property name.
    pub prefix: &'a str,
    /// Position within the factory that declares the resolver.
    pub id: ResolverId,
    pub resolver: &'a ResolverSpec,
}

impl Candidate<'_> {
    /// Access path of the call, e.g. `Parts.Gear`.
    pub fn access(&self) -> String {
        format!("{}.{}", self.prefix, self.resolver.name)
    }
}

impl FactorySource {
    /// Whether a resolver with the given accessibility can be called from
    /// the generated factory.
    pub fn is_available(self, resolver: &ResolverSpec) -> bool {
        match self {
            FactorySource::Root => true,
            FactorySource::Delegation => resolver.accessibility.is_visible_to_delegator(),
            FactorySource::Inheritance => resolver.accessibility.is_visible_to_derived(),
        }
    }

    /// First resolver from this source whose provided type is `ty`.
    ///
    /// The caller is skipped when searching the root factory.
    pub fn find<'a>(
        self,
        root: &'a FactorySpec,
        source: ResolverSource,
        caller: ResolverRef<'_>,
        ty: &TypeDescriptor,
        config: &ResolverConfig,
    ) -> Option<Candidate<'a>> {
        self.candidates(root, source, caller)
            .find(|c| c.resolver.provided_type(config) == *ty)
    }

    /// Every available resolver from this source, in declaration order.
    pub fn candidates<'a>(
        self,
        root: &'a FactorySpec,
        source: ResolverSource,
        caller: ResolverRef<'_>,
    ) -> impl Iterator<Item = Candidate<'a>> {
        let factories: Vec<(&'a str, &'a FactorySpec)> = match self {
            FactorySource::Root => vec![("this", root)],
            FactorySource::Delegation => root
                .delegations
                .iter()
                .map(|d| (d.property_name.as_str(), &d.factory))
                .collect(),
            FactorySource::Inheritance => root.inheritances.iter().map(|b| ("base", b)).collect(),
        };
        let caller_id = caller.id;
        let kind = source.kind();

        factories.into_iter().flat_map(move |(prefix, factory)| {
            source
                .list(factory)
                .iter()
                .enumerate()
                .filter(move |(index, _)| {
                    self != FactorySource::Root || caller_id != ResolverId { kind, index: *index }
                })
                .filter(move |(_, resolver)| self.is_available(resolver))
                .map(move |(index, resolver)| Candidate {
                    prefix,
                    id: ResolverId { kind, index },
                    resolver,
                })
        })
    }
}
