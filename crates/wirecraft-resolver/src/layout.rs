//! Constructor layout of the generated factory.

use rustc_hash::FxHashSet;

use crate::injection::Dependency;

/// Parameters of the generated factory's constructor.
///
/// A derived factory forwards its base factory's parameters to the base
/// constructor and appends its own dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructorLayout {
    /// Full constructor parameter list of the nearest base factory.
    pub base_parameters: Vec<Dependency>,
    /// Own dependencies of this factory.
    pub parameters: Vec<Dependency>,
}

impl ConstructorLayout {
    pub fn new(base_parameters: Vec<Dependency>, parameters: Vec<Dependency>) -> Self {
        Self {
            base_parameters,
            parameters,
        }
    }

    /// Base parameters, then own dependencies not already passed to the base.
    pub fn all_parameters(&self) -> Vec<&Dependency> {
        let base: FxHashSet<_> = self.base_parameters.iter().map(|d| &d.ty).collect();
        self.base_parameters
            .iter()
            .chain(self.parameters.iter().filter(|d| !base.contains(&d.ty)))
            .collect()
    }

    pub fn has_base(&self) -> bool {
        !self.base_parameters.is_empty()
    }
}
