//! Resolution engine configuration.

use crate::TypeDescriptor;

/// Default prefix for injected field names.
pub const DEFAULT_FIELD_PREFIX: &str = "_";
/// Default namespace of the sequence type produced by multi-resolvers.
pub const DEFAULT_SEQUENCE_NAMESPACE: &str = "System.Collections.Generic";
/// Default name of the sequence type produced by multi-resolvers.
pub const DEFAULT_SEQUENCE_NAME: &str = "IEnumerable";
/// Default recursion backstop.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings shared by every resolution pass of one engine run.
///
/// ```
/// use wirecraft_core::ResolverConfig;
///
/// let config = ResolverConfig::new()
///     .with_field_prefix("m_")
///     .with_max_depth(16);
/// assert_eq!(config.field_prefix(), "m_");
/// assert_eq!(config.max_depth(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    field_prefix: String,
    sequence_namespace: String,
    sequence_name: String,
    max_depth: usize,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self {
            field_prefix: DEFAULT_FIELD_PREFIX.to_string(),
            sequence_namespace: DEFAULT_SEQUENCE_NAMESPACE.to_string(),
            sequence_name: DEFAULT_SEQUENCE_NAME.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_field_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.field_prefix = prefix.into();
        self
    }

    /// Use a different generic sequence type for multi-resolvers.
    pub fn with_sequence_type(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.sequence_namespace = namespace.into();
        self.sequence_name = name.into();
        self
    }

    /// Set the recursion backstop. Values below 1 are raised to 1.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    pub fn field_prefix(&self) -> &str {
        &self.field_prefix
    }

    pub fn sequence_namespace(&self) -> &str {
        &self.sequence_namespace
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Instantiate the sequence type over `element`.
    pub fn sequence_of(&self, element: &TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::generic(
            self.sequence_namespace.clone(),
            self.sequence_name.clone(),
            vec![element.clone()],
        )
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.field_prefix(), "_");
        assert_eq!(config.max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(config.sequence_namespace(), "System.Collections.Generic");
    }

    #[test]
    fn sequence_of_wraps_element() {
        let config = ResolverConfig::default();
        let seq = config.sequence_of(&TypeDescriptor::new("Game", "Gear"));
        assert_eq!(
            seq.full_name(),
            "System.Collections.Generic.IEnumerable<Game.Gear>"
        );
    }

    #[test]
    fn custom_sequence_type() {
        let config = ResolverConfig::new().with_sequence_type("Std", "Vec");
        let seq = config.sequence_of(&TypeDescriptor::global("u8"));
        assert_eq!(seq.full_name(), "Std.Vec<u8>");
    }

    #[test]
    fn max_depth_has_floor() {
        let config = ResolverConfig::new().with_max_depth(0);
        assert_eq!(config.max_depth(), 1);
    }
}
