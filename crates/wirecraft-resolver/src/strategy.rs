//! The ordered strategy chain.
//!
//! Each strategy looks at one requested type and either commits to a node or
//! declines. The crawler evaluates [`CHAIN`] in order and takes the first
//! node offered. Strategies that call a method or constructor recurse into
//! the crawler for the call's arguments.

use wirecraft_core::{ResolveResult, TypeDescriptor};

use crate::context::CreationContext;
use crate::expr::Node;
use crate::source::{Candidate, FactorySource, ResolverSource};

/// One way of producing a value for a requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A parameter of the caller with the requested type.
    Parameter,
    /// The factory being generated, as `this`.
    FactoryItself,
    /// A delegated sub-factory, as its property.
    DelegationItself,
    /// A resolver whose provided type is the requested type.
    FactoryResolver {
        factory: FactorySource,
        resolver: ResolverSource,
    },
    /// An own single resolver that declares the requested type among its
    /// resolutions.
    RootResolver,
    /// A known constructor of the requested type.
    Constructor,
}

/// Strategies in evaluation order. The first to produce a node wins.
pub const CHAIN: [Strategy; 11] = [
    Strategy::Parameter,
    Strategy::FactoryItself,
    Strategy::FactoryResolver {
        factory: FactorySource::Root,
        resolver: ResolverSource::Single,
    },
    Strategy::DelegationItself,
    Strategy::FactoryResolver {
        factory: FactorySource::Delegation,
        resolver: ResolverSource::Single,
    },
    Strategy::FactoryResolver {
        factory: FactorySource::Delegation,
        resolver: ResolverSource::Multi,
    },
    Strategy::RootResolver,
    Strategy::FactoryResolver {
        factory: FactorySource::Root,
        resolver: ResolverSource::Multi,
    },
    Strategy::FactoryResolver {
        factory: FactorySource::Inheritance,
        resolver: ResolverSource::Single,
    },
    Strategy::FactoryResolver {
        factory: FactorySource::Inheritance,
        resolver: ResolverSource::Multi,
    },
    Strategy::Constructor,
];

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Parameter => "parameter",
            Strategy::FactoryItself => "factory-itself",
            Strategy::DelegationItself => "delegation-itself",
            Strategy::FactoryResolver { factory, resolver } => match (factory, resolver) {
                (FactorySource::Root, ResolverSource::Single) => "factory-resolver",
                (FactorySource::Root, ResolverSource::Multi) => "factory-multi-resolver",
                (FactorySource::Delegation, ResolverSource::Single) => "delegation-resolver",
                (FactorySource::Delegation, ResolverSource::Multi) => "delegation-multi-resolver",
                (FactorySource::Inheritance, ResolverSource::Single) => "inheritance-resolver",
                (FactorySource::Inheritance, ResolverSource::Multi) => {
                    "inheritance-multi-resolver"
                }
            },
            Strategy::RootResolver => "root-resolver",
            Strategy::Constructor => "constructor",
        }
    }

    /// Try to produce a node for `ctx.ty`.
    ///
    /// `Ok(None)` declines. Errors only come from a recursive crawl.
    pub fn apply(&self, ctx: &mut CreationContext<'_, '_>) -> ResolveResult<Option<Node>> {
        let root = ctx.injector.factory();
        match *self {
            Strategy::Parameter => Ok(ctx
                .consumed
                .claim(&ctx.caller.spec.parameters, ctx.ty)
                .map(|p| Node::variable(p.name.clone()))),

            Strategy::FactoryItself => Ok((root.ty == *ctx.ty).then(|| Node::variable("this"))),

            Strategy::DelegationItself => Ok(root
                .delegations
                .iter()
                .find(|d| d.factory.ty == *ctx.ty)
                .map(|d| Node::variable(d.property_name.clone()))),

            Strategy::FactoryResolver { factory, resolver } => {
                let config = ctx.injector.config();
                match factory.find(root, resolver, ctx.caller, ctx.ty, config) {
                    Some(candidate) => call_resolver(ctx, factory, candidate),
                    None => Ok(None),
                }
            }

            Strategy::RootResolver => {
                let found = FactorySource::Root
                    .candidates(root, ResolverSource::Single, ctx.caller)
                    .find(|c| c.resolver.resolutions.contains(ctx.ty));
                match found {
                    Some(candidate) => call_resolver(ctx, FactorySource::Root, candidate),
                    None => Ok(None),
                }
            }

            Strategy::Constructor => match ctx.injector.constructor_for(ctx.ty) {
                Some(shape) => {
                    let types = shape.parameters.iter().map(|p| p.ty.clone()).collect();
                    invoke(ctx, format!("new {}", shape.ty), types)
                }
                None => Ok(None),
            },
        }
    }
}

/// Call a resolver found in `source`. Calls between own resolvers are
/// recorded on the crawler.
fn call_resolver(
    ctx: &CreationContext<'_, '_>,
    source: FactorySource,
    candidate: Candidate<'_>,
) -> ResolveResult<Option<Node>> {
    if source == FactorySource::Root {
        ctx.injector.record_call(ctx.caller.id, candidate.id);
    }
    let parameter_types = candidate.resolver.parameter_types();
    invoke(ctx, candidate.access(), parameter_types)
}

fn invoke(
    ctx: &CreationContext<'_, '_>,
    access: String,
    parameter_types: Vec<TypeDescriptor>,
) -> ResolveResult<Option<Node>> {
    let arguments = ctx.crawl_arguments(parameter_types)?;
    Ok(Some(Node::invocation(access, arguments)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ConsumedParameters, ResolverId, ResolverRef};
    use crate::crawler::Crawler;
    use wirecraft_core::{
        Accessibility, ConstructorShape, FactorySpec, ResolverConfig, ResolverSpec,
    };

    fn ty(name: &str) -> TypeDescriptor {
        TypeDescriptor::new("Game", name)
    }

    /// Run one strategy against `target` with the factory's first single
    /// resolver as the caller.
    fn run(strategy: Strategy, factory: &FactorySpec, target: &TypeDescriptor) -> Option<Node> {
        let config = ResolverConfig::default();
        let crawler = Crawler::new(factory, &config);
        let caller = ResolverRef::new(ResolverId::single(0), &factory.resolvers[0]);
        let mut consumed = ConsumedParameters::new();
        let mut ctx = CreationContext {
            caller,
            ty: target,
            consumed: &mut consumed,
            path: &[],
            injector: &crawler,
        };
        strategy.apply(&mut ctx).unwrap()
    }

    fn caller() -> ResolverSpec {
        ResolverSpec::single("Single", ty("Widget")).with_parameter(ty("Logger"), "logger")
    }

    #[test]
    fn chain_starts_with_parameter_and_ends_with_constructor() {
        assert_eq!(CHAIN[0], Strategy::Parameter);
        assert_eq!(CHAIN[CHAIN.len() - 1], Strategy::Constructor);
        assert_eq!(CHAIN[6], Strategy::RootResolver);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = CHAIN.iter().map(Strategy::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CHAIN.len());
    }

    #[test]
    fn parameter_matches_caller_argument() {
        let factory = FactorySpec::new(ty("WidgetFactory")).with_resolver(caller());
        let node = run(Strategy::Parameter, &factory, &ty("Logger"));
        assert_eq!(node, Some(Node::variable("logger")));
        assert_eq!(run(Strategy::Parameter, &factory, &ty("Gear")), None);
    }

    #[test]
    fn factory_itself_is_this() {
        let factory = FactorySpec::new(ty("WidgetFactory")).with_resolver(caller());
        let node = run(Strategy::FactoryItself, &factory, &ty("WidgetFactory"));
        assert_eq!(node.map(|n| n.code()), Some("this".to_string()));
    }

    #[test]
    fn delegation_itself_is_property() {
        let factory = FactorySpec::new(ty("WidgetFactory"))
            .with_resolver(caller())
            .with_delegation("Parts", FactorySpec::new(ty("PartsFactory")));
        let node = run(Strategy::DelegationItself, &factory, &ty("PartsFactory"));
        assert_eq!(node, Some(Node::variable("Parts")));
    }

    #[test]
    fn own_resolver_arguments_come_from_caller() {
        let factory = FactorySpec::new(ty("WidgetFactory"))
            .with_resolver(caller())
            .with_resolver(
                ResolverSpec::single("Gear", ty("Gear")).with_parameter(ty("Logger"), "log"),
            );
        let strategy = Strategy::FactoryResolver {
            factory: FactorySource::Root,
            resolver: ResolverSource::Single,
        };
        let node = run(strategy, &factory, &ty("Gear")).unwrap();
        assert_eq!(node.code(), "this.Gear(logger)");
    }

    #[test]
    fn delegated_private_resolver_is_skipped() {
        let parts = FactorySpec::new(ty("PartsFactory")).with_resolver(
            ResolverSpec::single("Gear", ty("Gear")).with_accessibility(Accessibility::Private),
        );
        let factory = FactorySpec::new(ty("WidgetFactory"))
            .with_resolver(caller())
            .with_delegation("Parts", parts);
        let strategy = Strategy::FactoryResolver {
            factory: FactorySource::Delegation,
            resolver: ResolverSource::Single,
        };
        assert_eq!(run(strategy, &factory, &ty("Gear")), None);
    }

    #[test]
    fn root_resolver_matches_declared_resolution() {
        let factory = FactorySpec::new(ty("WidgetFactory"))
            .with_resolver(caller())
            .with_resolver(ResolverSpec::single("Part", ty("IPart")).with_resolution(ty("Gear")));
        let node = run(Strategy::RootResolver, &factory, &ty("Gear")).unwrap();
        assert_eq!(node.code(), "this.Part()");
    }

    #[test]
    fn root_resolver_never_calls_caller() {
        let factory = FactorySpec::new(ty("WidgetFactory"))
            .with_resolver(caller().with_resolution(ty("Gear")));
        assert_eq!(run(Strategy::RootResolver, &factory, &ty("Gear")), None);
    }

    #[test]
    fn constructor_leaves_unknown_arguments_unsatisfied() {
        let factory = FactorySpec::new(ty("WidgetFactory"))
            .with_resolver(caller())
            .with_constructor(
                ConstructorShape::new(ty("Gear"))
                    .with_parameter(ty("Logger"), "logger")
                    .with_parameter(ty("Cog"), "cog"),
            );
        let node = run(Strategy::Constructor, &factory, &ty("Gear")).unwrap();
        assert_eq!(node.code(), "new Gear(logger, _cog)");
    }
}
