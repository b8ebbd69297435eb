//! Namespace collection.
//!
//! Every namespace the generated factory refers to, in first-use order, so a
//! renderer can emit its imports without walking the blueprint again.

use rustc_hash::FxHashSet;
use wirecraft_core::{FactorySpec, ResolverConfig, TypeDescriptor};

use crate::injection::Dependency;

#[derive(Default)]
struct NamespaceSet<'a> {
    seen: FxHashSet<&'a str>,
    ordered: Vec<String>,
}

impl<'a> NamespaceSet<'a> {
    fn add(&mut self, namespace: &'a str) {
        if !namespace.is_empty() && self.seen.insert(namespace) {
            self.ordered.push(namespace.to_string());
        }
    }

    fn add_type(&mut self, ty: &'a TypeDescriptor) {
        for namespace in ty.namespaces() {
            self.add(namespace);
        }
    }
}

/// Collect namespaces in visit order: single resolvers, multi-resolvers,
/// delegations, hooks, then dependencies.
pub fn collect_namespaces(
    factory: &FactorySpec,
    dependencies: &[Dependency],
    config: &ResolverConfig,
) -> Vec<String> {
    let mut set = NamespaceSet::default();

    for resolver in &factory.resolvers {
        set.add_type(&resolver.return_type);
        for parameter in &resolver.parameters {
            set.add_type(&parameter.ty);
        }
        for resolution in &resolver.resolutions {
            set.add_type(resolution);
        }
    }

    for resolver in &factory.multi_resolvers {
        set.add(config.sequence_namespace());
        set.add_type(&resolver.return_type);
        for parameter in &resolver.parameters {
            set.add_type(&parameter.ty);
        }
        for resolution in &resolver.resolutions {
            set.add_type(resolution);
        }
    }

    for delegation in &factory.delegations {
        set.add_type(&delegation.factory.ty);
    }

    for hook in factory.all_resolvers().flat_map(|r| r.hooks.iter()) {
        set.add_type(&hook.ty);
    }

    for dependency in dependencies {
        set.add_type(&dependency.ty);
    }

    set.ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirecraft_core::ResolverSpec;

    #[test]
    fn order_and_dedup() {
        let factory = FactorySpec::new(TypeDescriptor::new("App", "WidgetFactory"))
            .with_resolver(
                ResolverSpec::single("Widget", TypeDescriptor::new("Game", "Widget"))
                    .with_parameter(TypeDescriptor::new("Game.Io", "Clock"), "clock")
                    .with_resolution(TypeDescriptor::new("Game", "Gear")),
            )
            .with_resolver(
                ResolverSpec::multi("Parts", TypeDescriptor::new("Game", "IPart"))
                    .with_resolution(TypeDescriptor::new("Parts", "Cog")),
            )
            .with_delegation(
                "Tools",
                FactorySpec::new(TypeDescriptor::new("Tools", "ToolFactory")),
            );
        let logger = TypeDescriptor::new("Logging", "Logger");
        let deps = [Dependency::new(logger, "_logger")];

        let namespaces = collect_namespaces(&factory, &deps, &ResolverConfig::default());
        assert_eq!(
            namespaces,
            vec![
                "Game",
                "Game.Io",
                "System.Collections.Generic",
                "Parts",
                "Tools",
                "Logging"
            ]
        );
    }

    #[test]
    fn global_types_and_generic_arguments() {
        let list = TypeDescriptor::generic(
            "Collections",
            "List",
            vec![TypeDescriptor::new("Game", "Gear")],
        );
        let factory = FactorySpec::new(TypeDescriptor::global("Factory"))
            .with_resolver(ResolverSpec::single("Gears", list))
            .with_resolver(ResolverSpec::single("Count", TypeDescriptor::global("int")));
        let namespaces = collect_namespaces(&factory, &[], &ResolverConfig::default());
        assert_eq!(namespaces, vec!["Collections", "Game"]);
    }

    #[test]
    fn hooks_are_collected() {
        let factory = FactorySpec::new(TypeDescriptor::global("Factory")).with_resolver(
            ResolverSpec::single("Widget", TypeDescriptor::global("Widget"))
                .with_hook(TypeDescriptor::new("Hooks", "Audit"), "_audit"),
        );
        let namespaces = collect_namespaces(&factory, &[], &ResolverConfig::default());
        assert_eq!(namespaces, vec!["Hooks"]);
    }
}
