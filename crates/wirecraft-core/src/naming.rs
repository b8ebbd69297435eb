//! Field-name derivation for injected dependencies.

use crate::TypeDescriptor;

/// Lower-case the first character of `s`.
pub fn to_lower_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character of `s`.
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the backing field name for an injected value of type `ty`.
///
/// The bare name is lower-camel-cased and every type argument's name is
/// appended in Pascal case, depth first, so `List<Gear>` becomes `_listGear`
/// with the default prefix. The namespace does not participate.
///
/// ```
/// use wirecraft_core::{TypeDescriptor, naming::field_name_for};
///
/// let logger = TypeDescriptor::new("Game.Diagnostics", "Logger");
/// assert_eq!(field_name_for(&logger, "_"), "_logger");
/// ```
pub fn field_name_for(ty: &TypeDescriptor, prefix: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + ty.name.len());
    name.push_str(prefix);
    name.push_str(&to_lower_camel_case(&ty.name));
    for arg in &ty.type_arguments {
        push_argument_names(&mut name, arg);
    }
    name
}

/// Pascal-case join of the namespace segments of `ty`.
///
/// Appended to a field name when two distinct dependency types would
/// otherwise share it. The global namespace yields `Global`.
pub fn namespace_suffix(ty: &TypeDescriptor) -> String {
    if ty.is_global() {
        return "Global".to_string();
    }
    ty.namespace.split('.').map(to_pascal_case).collect()
}

fn push_argument_names(out: &mut String, ty: &TypeDescriptor) {
    out.push_str(&to_pascal_case(&ty.name));
    for arg in &ty.type_arguments {
        push_argument_names(out, arg);
    }
}
