//! Structural type identity.
//!
//! [`TypeDescriptor`] is the key the whole engine resolves by. It is built by
//! the front end once per occurrence of a type, so two descriptors for the same
//! type are distinct values that must still compare equal. Equality and
//! hashing therefore look only at the namespace, the bare name and the type
//! arguments (recursively). The [`Disposability`] capability rides along but
//! is not part of the identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Disposability, TypeHash};

/// Identity of a (possibly generic) type.
///
/// # Examples
///
/// ```
/// use wirecraft_core::{Disposability, TypeDescriptor};
///
/// let gear = TypeDescriptor::new("Game", "Gear");
/// let list = TypeDescriptor::generic("System.Collections.Generic", "List", vec![gear.clone()]);
/// assert_eq!(list.to_string(), "List<Gear>");
/// assert_eq!(list.full_name(), "System.Collections.Generic.List<Game.Gear>");
///
/// // Capabilities are not part of identity.
/// let disposable = gear.clone().with_disposability(Disposability::SYNC);
/// assert_eq!(gear, disposable);
/// ```
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Dot-separated namespace, empty for the global namespace.
    pub namespace: String,
    /// Bare type name without namespace or arity suffix.
    pub name: String,
    /// Type arguments in declaration order.
    pub type_arguments: Vec<TypeDescriptor>,
    /// Disposal interfaces implemented by the type.
    pub disposability: Disposability,
}

impl TypeDescriptor {
    /// Create a non-generic type descriptor.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            type_arguments: Vec::new(),
            disposability: Disposability::empty(),
        }
    }

    /// Create a type descriptor in the global namespace.
    pub fn global(name: impl Into<String>) -> Self {
        Self::new(String::new(), name)
    }

    /// Create a generic type descriptor.
    pub fn generic(
        namespace: impl Into<String>,
        name: impl Into<String>,
        type_arguments: Vec<TypeDescriptor>,
    ) -> Self {
        Self {
            type_arguments,
            ..Self::new(namespace, name)
        }
    }

    /// Create from a dot-qualified name (e.g., `"Game.Parts.Gear"`).
    ///
    /// The last segment is the name, the rest is the namespace.
    pub fn from_qualified(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::global(qualified),
        }
    }

    /// Attach disposal capabilities.
    pub fn with_disposability(mut self, disposability: Disposability) -> Self {
        self.disposability = disposability;
        self
    }

    /// Whether this type lives in the global namespace.
    pub fn is_global(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Whether this type has type arguments.
    pub fn is_generic(&self) -> bool {
        !self.type_arguments.is_empty()
    }

    /// Compute the structural identity hash.
    pub fn type_hash(&self) -> TypeHash {
        let args: Vec<TypeHash> = self.type_arguments.iter().map(Self::type_hash).collect();
        TypeHash::from_parts(&self.namespace, &self.name, &args)
    }

    /// Fully qualified name including qualified type arguments.
    pub fn full_name(&self) -> String {
        let mut out = String::new();
        self.write_full_name(&mut out);
        out
    }

    fn write_full_name(&self, out: &mut String) {
        if !self.namespace.is_empty() {
            out.push_str(&self.namespace);
            out.push('.');
        }
        out.push_str(&self.name);
        if !self.type_arguments.is_empty() {
            out.push('<');
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                arg.write_full_name(out);
            }
            out.push('>');
        }
    }

    /// Namespaces mentioned by this type and its type arguments, depth first.
    ///
    /// Empty (global) namespaces are skipped. Duplicates are not removed.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_namespaces(&mut out);
        out
    }

    fn collect_namespaces<'a>(&'a self, out: &mut Vec<&'a str>) {
        if !self.namespace.is_empty() {
            out.push(&self.namespace);
        }
        for arg in &self.type_arguments {
            arg.collect_namespaces(out);
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace
            && self.name == other.name
            && self.type_arguments == other.type_arguments
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_hash().hash(state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.type_arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl From<&str> for TypeDescriptor {
    fn from(s: &str) -> Self {
        Self::from_qualified(s)
    }
}
