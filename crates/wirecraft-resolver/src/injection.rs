//! Injection aggregation.
//!
//! Crawls every resolver of a factory and gathers the unsatisfied leaves of
//! all resulting trees into one deduplicated dependency list. Each entry
//! becomes a field (and constructor parameter) of the generated factory.
//!
//! Two distinct types may derive the same field name (`Ui.Logger` and
//! `Core.Logger` both give `_logger`). The later one is renamed with its
//! namespace appended, and every leaf of that type follows the rename, so no
//! two dependencies share a field.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;
use wirecraft_core::{
    FactorySpec, ResolveError, ResolveResult, ResolverConfig, ResolverKind, ResolverSpec,
    TypeDescriptor, naming::namespace_suffix,
};

use crate::context::{ResolverId, ResolverRef};
use crate::crawler::Crawler;
use crate::expr::{CreationExpTree, MultiCreationExpTree, Node};

/// A value the generated factory must receive from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub ty: TypeDescriptor,
    /// Backing field name, shared by every leaf of this type.
    pub field_name: String,
}

impl Dependency {
    pub fn new(ty: TypeDescriptor, field_name: impl Into<String>) -> Self {
        Self {
            ty,
            field_name: field_name.into(),
        }
    }
}

/// Expression trees of every resolver plus the aggregated dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionResult {
    resolvers: Vec<CreationExpTree>,
    multi_resolvers: Vec<MultiCreationExpTree>,
    dependencies: Vec<Dependency>,
}

impl InjectionResult {
    /// Crawl each single resolver, then each multi-resolver, every one with
    /// its own request.
    ///
    /// Fails when own resolvers end up calling each other in a loop.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn crawl(crawler: &Crawler<'_>) -> ResolveResult<Self> {
        let factory = crawler.factory();

        let mut resolvers = Vec::with_capacity(factory.resolvers.len());
        for (index, spec) in factory.resolvers.iter().enumerate() {
            let caller = ResolverRef::new(ResolverId::single(index), spec);
            let mut nodes = crawler.crawl_resolver(caller)?;
            // A single resolver always requests exactly one type.
            let root = nodes.swap_remove(0);
            resolvers.push(CreationExpTree { root });
        }

        let mut multi_resolvers = Vec::with_capacity(factory.multi_resolvers.len());
        for (index, spec) in factory.multi_resolvers.iter().enumerate() {
            let caller = ResolverRef::new(ResolverId::multi(index), spec);
            let roots = crawler.crawl_resolver(caller)?;
            multi_resolvers.push(MultiCreationExpTree { roots });
        }

        check_resolver_calls(factory, crawler.config(), &crawler.resolver_calls())?;

        let mut result = Self {
            resolvers,
            multi_resolvers,
            dependencies: Vec::new(),
        };
        result.collect_dependencies();
        Ok(result)
    }

    /// Tree of the single resolver at `index`.
    pub fn tree(&self, index: usize) -> Option<&CreationExpTree> {
        self.resolvers.get(index)
    }

    /// Trees of the multi-resolver at `index`.
    pub fn multi_tree(&self, index: usize) -> Option<&MultiCreationExpTree> {
        self.multi_resolvers.get(index)
    }

    /// Root nodes of any resolver. Empty for an unknown id.
    pub fn roots(&self, id: ResolverId) -> &[Node] {
        match id.kind {
            ResolverKind::Single => self
                .resolvers
                .get(id.index)
                .map(|t| std::slice::from_ref(&t.root))
                .unwrap_or_default(),
            ResolverKind::Multi => self
                .multi_resolvers
                .get(id.index)
                .map(|t| t.roots.as_slice())
                .unwrap_or_default(),
        }
    }

    pub fn trees(&self) -> &[CreationExpTree] {
        &self.resolvers
    }

    pub fn multi_trees(&self) -> &[MultiCreationExpTree] {
        &self.multi_resolvers
    }

    /// Deduplicated dependencies in first-seen order.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    fn all_roots(&self) -> impl Iterator<Item = &Node> {
        self.resolvers
            .iter()
            .map(|t| &t.root)
            .chain(self.multi_resolvers.iter().flat_map(|t| t.roots.iter()))
    }

    /// Walk every tree depth first and keep the first unsatisfied leaf per
    /// type, then point the leaves of renamed types at their new field.
    fn collect_dependencies(&mut self) {
        let mut leaves = Vec::new();
        for root in self.all_roots() {
            root.collect_unsatisfied(&mut leaves);
        }

        let mut seen: FxHashSet<&TypeDescriptor> = FxHashSet::default();
        let mut owners: FxHashMap<String, &TypeDescriptor> = FxHashMap::default();
        let mut dependencies = Vec::new();
        let mut renamed = Vec::new();
        for (ty, field_name) in leaves {
            if !seen.insert(ty) {
                continue;
            }
            let unique = match owners.get(field_name) {
                Some(other) => {
                    let unique = disambiguate(field_name, ty, &owners);
                    warn!(
                        field = field_name,
                        renamed = %unique,
                        first = %other.full_name(),
                        second = %ty.full_name(),
                        "distinct dependency types share a field name"
                    );
                    renamed.push((ty.clone(), unique.clone()));
                    unique
                }
                None => field_name.to_string(),
            };
            owners.insert(unique.clone(), ty);
            dependencies.push(Dependency::new(ty.clone(), unique));
        }

        for (ty, field_name) in &renamed {
            for tree in &mut self.resolvers {
                tree.root.rename_field(ty, field_name);
            }
            for tree in &mut self.multi_resolvers {
                for root in &mut tree.roots {
                    root.rename_field(ty, field_name);
                }
            }
        }
        self.dependencies = dependencies;
    }
}

/// A field name for `ty` that no earlier dependency owns: the namespace is
/// appended, then a counter if that is taken too.
fn disambiguate(
    field_name: &str,
    ty: &TypeDescriptor,
    owners: &FxHashMap<String, &TypeDescriptor>,
) -> String {
    let qualified = format!("{field_name}{}", namespace_suffix(ty));
    if !owners.contains_key(&qualified) {
        return qualified;
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{qualified}{counter}");
        if !owners.contains_key(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

fn spec_of(factory: &FactorySpec, id: ResolverId) -> Option<&ResolverSpec> {
    match id.kind {
        ResolverKind::Single => factory.resolvers.get(id.index),
        ResolverKind::Multi => factory.multi_resolvers.get(id.index),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Reject loops in the graph of calls between own resolvers.
///
/// Each resolver body is crawled on its own, so `A => this.B()` and
/// `B => this.A()` both crawl fine but would recurse forever at run time.
fn check_resolver_calls(
    factory: &FactorySpec,
    config: &ResolverConfig,
    calls: &[(ResolverId, ResolverId)],
) -> ResolveResult<()> {
    let mut edges: FxHashMap<ResolverId, Vec<ResolverId>> = FxHashMap::default();
    for &(caller, callee) in calls {
        edges.entry(caller).or_default().push(callee);
    }

    let mut starts: Vec<ResolverId> = edges.keys().copied().collect();
    starts.sort_unstable();

    let mut visits = FxHashMap::default();
    let mut stack = Vec::new();
    for start in starts {
        let Some(cycle) = find_cycle(start, &edges, &mut visits, &mut stack) else {
            continue;
        };
        let access = |id: ResolverId| {
            spec_of(factory, id)
                .map(|spec| format!("this.{}", spec.name))
                .unwrap_or_default()
        };
        let ty = spec_of(factory, cycle[0])
            .map(|spec| spec.provided_type(config).full_name())
            .unwrap_or_default();
        return Err(ResolveError::CyclicDependency {
            ty,
            path: cycle.into_iter().map(access).collect(),
        });
    }
    Ok(())
}

/// Depth-first search from `id`. Returns the resolvers of the first loop
/// found, starting at the one that is entered twice.
fn find_cycle(
    id: ResolverId,
    edges: &FxHashMap<ResolverId, Vec<ResolverId>>,
    visits: &mut FxHashMap<ResolverId, Visit>,
    stack: &mut Vec<ResolverId>,
) -> Option<Vec<ResolverId>> {
    match visits.get(&id) {
        Some(Visit::Done) => return None,
        Some(Visit::InProgress) => {
            let start = stack.iter().position(|&on_stack| on_stack == id)?;
            return Some(stack[start..].to_vec());
        }
        None => {}
    }

    visits.insert(id, Visit::InProgress);
    stack.push(id);
    for &callee in edges.get(&id).into_iter().flatten() {
        if let Some(cycle) = find_cycle(callee, edges, visits, stack) {
            return Some(cycle);
        }
    }
    stack.pop();
    visits.insert(id, Visit::Done);
    None
}
