//! Creation expression trees.
//!
//! The crawler's output. Each resolver gets one tree (or one tree per declared
//! resolution for a multi-resolver) describing how its value is built:
//!
//! - [`Node::Invocation`] - call a method or constructor with argument nodes
//! - [`Node::Variable`] - reference something already in scope (`this`, a parameter, a property)
//! - [`Node::UnsatisfiedField`] - a leaf that will be filled by an injected field
//!
//! Every node prints its own code fragment through `Display`, which is the
//! only text the engine produces. Everything else is left to the renderer.

use std::fmt;

use wirecraft_core::TypeDescriptor;

/// One node of a creation expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `access(arguments...)`.
    Invocation {
        /// Callee access path, e.g. `this.Gear` or `new Gear`.
        access: String,
        /// Argument nodes, left to right.
        arguments: Vec<Node>,
    },
    /// A direct reference, no call.
    Variable {
        /// The referenced expression, e.g. a parameter name or `this`.
        access: String,
    },
    /// A type that cannot be constructed locally and will be supplied
    /// through the named injected field.
    UnsatisfiedField {
        /// The requested type.
        ty: TypeDescriptor,
        /// The backing field name.
        field_name: String,
    },
}

impl Node {
    pub fn invocation(access: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::Invocation {
            access: access.into(),
            arguments,
        }
    }

    pub fn variable(access: impl Into<String>) -> Self {
        Node::Variable {
            access: access.into(),
        }
    }

    pub fn unsatisfied(ty: TypeDescriptor, field_name: impl Into<String>) -> Self {
        Node::UnsatisfiedField {
            ty,
            field_name: field_name.into(),
        }
    }

    pub fn is_unsatisfied(&self) -> bool {
        matches!(self, Node::UnsatisfiedField { .. })
    }

    /// The code fragment for this node and its arguments.
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// Collect every unsatisfied leaf, depth first, arguments left to right.
    pub fn collect_unsatisfied<'a>(&'a self, out: &mut Vec<(&'a TypeDescriptor, &'a str)>) {
        match self {
            Node::UnsatisfiedField { ty, field_name } => out.push((ty, field_name.as_str())),
            Node::Invocation { arguments, .. } => {
                for arg in arguments {
                    arg.collect_unsatisfied(out);
                }
            }
            Node::Variable { .. } => {}
        }
    }

    /// Point every unsatisfied leaf of type `ty` at `field_name`.
    pub fn rename_field(&mut self, ty: &TypeDescriptor, field_name: &str) {
        match self {
            Node::UnsatisfiedField {
                ty: leaf,
                field_name: name,
            } if *leaf == *ty => *name = field_name.to_string(),
            Node::Invocation { arguments, .. } => {
                for arg in arguments {
                    arg.rename_field(ty, field_name);
                }
            }
            _ => {}
        }
    }

    /// Depth of the tree rooted at this node (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            Node::Invocation { arguments, .. } => {
                1 + arguments.iter().map(Node::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Invocation { access, arguments } => {
                write!(f, "{}(", access)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Node::Variable { access } => write!(f, "{}", access),
            Node::UnsatisfiedField { field_name, .. } => write!(f, "{}", field_name),
        }
    }
}

/// Expression tree of a single resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationExpTree {
    pub root: Node,
}

/// Expression trees of a multi-resolver, one root per declared resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiCreationExpTree {
    pub roots: Vec<Node>,
}
