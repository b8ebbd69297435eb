//! Method and constructor parameters.

use std::fmt;

use crate::TypeDescriptor;

/// A typed, named input of a resolver method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Parameter type.
    pub ty: TypeDescriptor,
    /// Parameter name as declared.
    pub name: String,
}

impl Parameter {
    pub fn new(ty: TypeDescriptor, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}
