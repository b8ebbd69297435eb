//! Error types for factory resolution.
//!
//! Resolution is soft by default: a type that no strategy can produce becomes
//! an injected constructor dependency, not an error. The variants here cover
//! the cases that cannot be expressed as data:
//!
//! ```text
//! ResolveError
//! ├── CyclicDependency     - a type's construction requires itself
//! ├── DepthExceeded        - recursion backstop tripped
//! └── InvalidAccessibility - unknown front-end accessibility code
//! ```

use thiserror::Error;

/// Errors raised while resolving a factory blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Constructing a type requires constructing the same type again, or
    /// resolvers of the factory call each other in a loop.
    #[error("unsatisfiable: cyclic dependency on type '{ty}' (via {})", .path.join(" -> "))]
    CyclicDependency {
        /// The type that was requested while already being resolved.
        ty: String,
        /// Types being resolved when the cycle was found, outermost first.
        /// For a resolver loop, the `this.Name` calls that form it.
        path: Vec<String>,
    },

    /// Resolution recursed deeper than the configured limit.
    #[error("resolution of '{ty}' exceeded the maximum depth of {depth}")]
    DepthExceeded {
        /// The type being resolved when the limit was hit.
        ty: String,
        /// The configured maximum depth.
        depth: usize,
    },

    /// A raw accessibility code from the front end is not recognised.
    #[error("invalid accessibility code {0}")]
    InvalidAccessibility(u8),
}

/// Result alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
