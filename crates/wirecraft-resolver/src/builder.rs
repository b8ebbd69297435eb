//! Entry point of the resolution engine.
//!
//! [`ExpressionBuilder`] runs every pass over one factory blueprint and
//! returns a [`ResolutionRoot`] holding everything a renderer needs.

use tracing::debug;
use wirecraft_core::{FactorySpec, ResolveResult, ResolverConfig};

use crate::context::ResolverId;
use crate::crawler::Crawler;
use crate::disposal::DisposableInfo;
use crate::expr::Node;
use crate::injection::InjectionResult;
use crate::layout::ConstructorLayout;
use crate::namespaces::collect_namespaces;

/// Builds the resolution result for one factory.
///
/// # Example
///
/// ```
/// use wirecraft_core::{ConstructorShape, FactorySpec, ResolverSpec, TypeDescriptor};
/// use wirecraft_resolver::ExpressionBuilder;
///
/// let gear = TypeDescriptor::new("Game", "Gear");
/// let factory = FactorySpec::new(TypeDescriptor::new("Game", "WidgetFactory"))
///     .with_resolver(
///         ResolverSpec::single("Single", TypeDescriptor::new("Game", "Widget"))
///             .with_resolution(gear.clone()),
///     )
///     .with_constructor(
///         ConstructorShape::new(gear)
///             .with_parameter(TypeDescriptor::new("Game", "Logger"), "logger"),
///     );
///
/// let root = ExpressionBuilder::new(&factory).build().unwrap();
/// assert_eq!(root.injection.tree(0).unwrap().root.code(), "new Gear(_logger)");
/// assert_eq!(root.injection.dependencies()[0].field_name, "_logger");
/// ```
pub struct ExpressionBuilder<'f> {
    factory: &'f FactorySpec,
    config: ResolverConfig,
}

impl<'f> ExpressionBuilder<'f> {
    pub fn new(factory: &'f FactorySpec) -> Self {
        Self {
            factory,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Crawl every resolver and aggregate the results.
    ///
    /// Fails only on a cyclic or overly deep resolution.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn build(self) -> ResolveResult<ResolutionRoot<'f>> {
        let factory = self.factory;
        debug!(
            factory = %factory.ty.full_name(),
            resolvers = factory.resolvers.len(),
            multi_resolvers = factory.multi_resolvers.len(),
            "building factory"
        );

        let crawler = Crawler::new(factory, &self.config);
        let injection = InjectionResult::crawl(&crawler)?;

        let base_parameters = match factory.direct_base() {
            Some(base) => ExpressionBuilder::new(base)
                .with_config(self.config.clone())
                .build()?
                .constructor
                .all_parameters()
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        let dependencies = injection.dependencies().to_vec();
        let constructor = ConstructorLayout::new(base_parameters, dependencies);

        let namespaces = collect_namespaces(factory, injection.dependencies(), &self.config);
        let disposable = DisposableInfo::aggregate(factory, injection.dependencies());

        debug!(
            factory = %factory.ty.full_name(),
            dependencies = injection.dependencies().len(),
            namespaces = namespaces.len(),
            "factory built"
        );

        Ok(ResolutionRoot {
            factory,
            injection,
            constructor,
            namespaces,
            disposable,
        })
    }
}

/// Everything resolved for one factory.
#[derive(Debug, Clone)]
pub struct ResolutionRoot<'f> {
    pub factory: &'f FactorySpec,
    pub injection: InjectionResult,
    pub constructor: ConstructorLayout,
    /// Referenced namespaces in first-use order.
    pub namespaces: Vec<String>,
    pub disposable: DisposableInfo,
}

impl ResolutionRoot<'_> {
    /// Id of the resolver or multi-resolver called `name`.
    pub fn resolver_id(&self, name: &str) -> Option<ResolverId> {
        if let Some(index) = self.factory.resolvers.iter().position(|r| r.name == name) {
            return Some(ResolverId::single(index));
        }
        self.factory
            .multi_resolvers
            .iter()
            .position(|r| r.name == name)
            .map(ResolverId::multi)
    }

    /// Root nodes of the resolver called `name`.
    pub fn roots_of(&self, name: &str) -> Option<&[Node]> {
        self.resolver_id(name).map(|id| self.injection.roots(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirecraft_core::{ResolverSpec, TypeDescriptor};

    fn ty(name: &str) -> TypeDescriptor {
        TypeDescriptor::new("Game", name)
    }

    #[test]
    fn lookup_by_name() {
        let factory = FactorySpec::new(ty("WidgetFactory"))
            .with_resolver(ResolverSpec::single("Gear", ty("Gear")))
            .with_resolver(ResolverSpec::multi("Parts", ty("IPart")).with_resolution(ty("Cog")));
        let root = ExpressionBuilder::new(&factory).build().unwrap();

        assert_eq!(root.resolver_id("Gear"), Some(ResolverId::single(0)));
        assert_eq!(root.resolver_id("Parts"), Some(ResolverId::multi(0)));
        assert_eq!(root.resolver_id("Missing"), None);
        assert_eq!(root.roots_of("Parts").map(|r| r.len()), Some(1));
    }

    #[test]
    fn derived_factory_forwards_base_parameters() {
        let base = FactorySpec::new(ty("BaseFactory"))
            .with_resolver(ResolverSpec::single("Clock", ty("Clock")));
        let derived = FactorySpec::new(ty("WidgetFactory"))
            .with_resolver(ResolverSpec::single("Gear", ty("Gear")))
            .with_resolver(
                ResolverSpec::single("Pair", ty("Pair")).with_parameter(ty("Clock"), "c"),
            )
            .with_inheritance(base);
        let root = ExpressionBuilder::new(&derived).build().unwrap();

        let names: Vec<&str> = root
            .constructor
            .all_parameters()
            .iter()
            .map(|d| d.field_name.as_str())
            .collect();
        assert_eq!(names, vec!["_clock", "_gear", "_pair"]);
        assert!(root.constructor.has_base());
    }

    #[test]
    fn custom_prefix_reaches_field_names() {
        let factory = FactorySpec::new(ty("WidgetFactory"))
            .with_resolver(ResolverSpec::single("Gear", ty("Gear")));
        let root = ExpressionBuilder::new(&factory)
            .with_config(ResolverConfig::new().with_field_prefix("m_"))
            .build()
            .unwrap();
        assert_eq!(root.injection.dependencies()[0].field_name, "m_gear");
    }
}
