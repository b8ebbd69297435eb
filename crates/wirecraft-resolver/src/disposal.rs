//! Disposal aggregation.
//!
//! The generated factory owns its injected dependencies and its hook
//! instances. This module decides which of those fields need disposing and
//! whether sync or async disposal must be generated. No code is emitted here.

use rustc_hash::FxHashMap;
use wirecraft_core::{Disposability, FactorySpec};

use crate::injection::Dependency;

/// A field the generated factory must dispose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisposalTarget {
    pub field_name: String,
    pub disposability: Disposability,
}

/// Disposal requirements of one factory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisposableInfo {
    /// Any owned field implements synchronous disposal.
    pub has_disposable: bool,
    /// Any owned field implements asynchronous disposal.
    pub has_async_disposable: bool,
    /// Disposable fields: dependencies first, then hooks, each field once.
    /// A field named twice carries the union of both disposabilities.
    pub targets: Vec<DisposalTarget>,
}

impl DisposableInfo {
    pub fn aggregate(factory: &FactorySpec, dependencies: &[Dependency]) -> Self {
        let mut info = Self::default();
        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();

        let fields = dependencies
            .iter()
            .map(|d| (d.field_name.as_str(), d.ty.disposability))
            .chain(
                factory
                    .all_resolvers()
                    .flat_map(|r| r.hooks.iter())
                    .map(|h| (h.field_name.as_str(), h.ty.disposability)),
            );

        for (field_name, disposability) in fields {
            if !disposability.is_disposable() {
                continue;
            }
            info.has_disposable |= disposability.is_sync();
            info.has_async_disposable |= disposability.is_async();

            if let Some(&index) = seen.get(field_name) {
                info.targets[index].disposability |= disposability;
                continue;
            }
            seen.insert(field_name, info.targets.len());
            info.targets.push(DisposalTarget {
                field_name: field_name.to_string(),
                disposability,
            });
        }
        info
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
