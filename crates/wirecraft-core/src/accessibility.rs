//! Declared accessibility of resolver methods.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::ResolveError;

/// Declared accessibility of a resolver method.
///
/// Discriminants follow the front end's raw accessibility codes, so a host can
/// convert with [`Accessibility::from_code`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive,
)]
#[repr(u8)]
pub enum Accessibility {
    NotApplicable = 0,
    #[default]
    Private = 1,
    ProtectedAndInternal = 2,
    Protected = 3,
    Internal = 4,
    ProtectedOrInternal = 5,
    Public = 6,
}

impl Accessibility {
    /// Convert a raw front-end accessibility code.
    pub fn from_code(code: u8) -> Result<Self, ResolveError> {
        Self::try_from(code).map_err(|_| ResolveError::InvalidAccessibility(code))
    }

    /// Whether a resolver with this accessibility can be called through a
    /// delegation property from another factory.
    pub fn is_visible_to_delegator(self) -> bool {
        matches!(
            self,
            Accessibility::Public | Accessibility::Internal | Accessibility::ProtectedOrInternal
        )
    }

    /// Whether a resolver with this accessibility can be called from a derived
    /// factory through `base`.
    pub fn is_visible_to_derived(self) -> bool {
        self.is_visible_to_delegator()
            || matches!(
                self,
                Accessibility::Protected | Accessibility::ProtectedAndInternal
            )
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessibility::NotApplicable => write!(f, "not applicable"),
            Accessibility::Private => write!(f, "private"),
            Accessibility::ProtectedAndInternal => write!(f, "private protected"),
            Accessibility::Protected => write!(f, "protected"),
            Accessibility::Internal => write!(f, "internal"),
            Accessibility::ProtectedOrInternal => write!(f, "protected internal"),
            Accessibility::Public => write!(f, "public"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_round_trips_known_codes() {
        assert_eq!(Accessibility::from_code(6), Ok(Accessibility::Public));
        assert_eq!(Accessibility::from_code(3), Ok(Accessibility::Protected));
        assert_eq!(u8::from(Accessibility::Internal), 4);
    }

    #[test]
    fn from_code_rejects_unknown() {
        let err = Accessibility::from_code(7).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidAccessibility(7)));
    }

    #[test]
    fn delegator_visibility() {
        assert!(Accessibility::Public.is_visible_to_delegator());
        assert!(Accessibility::Internal.is_visible_to_delegator());
        assert!(Accessibility::ProtectedOrInternal.is_visible_to_delegator());
        assert!(!Accessibility::Protected.is_visible_to_delegator());
        assert!(!Accessibility::ProtectedAndInternal.is_visible_to_delegator());
        assert!(!Accessibility::Private.is_visible_to_delegator());
    }

    #[test]
    fn derived_visibility() {
        assert!(Accessibility::Protected.is_visible_to_derived());
        assert!(Accessibility::ProtectedAndInternal.is_visible_to_derived());
        assert!(Accessibility::Public.is_visible_to_derived());
        assert!(!Accessibility::Private.is_visible_to_derived());
        assert!(!Accessibility::NotApplicable.is_visible_to_derived());
    }
}
