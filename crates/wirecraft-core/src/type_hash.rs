//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash computed from a type's namespace, name and
//! type arguments. Descriptors are rebuilt independently by the front end for
//! every occurrence of a type, so identity has to be structural: the same
//! namespace, name and arguments always produce the same hash, regardless of
//! which occurrence it was computed from.
//!
//! # Examples
//!
//! ```
//! use wirecraft_core::TypeHash;
//!
//! let a = TypeHash::from_parts("Game", "Gear", &[]);
//! let b = TypeHash::from_parts("Game", "Gear", &[]);
//! assert_eq!(a, b);
//!
//! let list_a = TypeHash::from_parts("System", "List", &[a]);
//! let cog = TypeHash::from_parts("Game", "Cog", &[]);
//! let list_b = TypeHash::from_parts("System", "List", &[cog]);
//! assert_ne!(list_a, list_b);
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant between namespace and name.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Type argument position mixing constants.
    /// Each position gets its own constant so that argument order matters.
    pub const ARG_MARKERS: [u64; 8] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
        0xe7037ed1a0b428db,
        0xc6a4a7935bd1e995,
        0x8648dbbc94d49b8d,
        0xa2b48b2c69e0d657,
    ];
}

/// A deterministic 64-bit hash identifying a type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Compute the hash of a type from its namespace, bare name and the hashes
    /// of its type arguments.
    ///
    /// Argument order matters: `Map<A, B>` and `Map<B, A>` hash differently.
    #[inline]
    pub fn from_parts(namespace: &str, name: &str, args: &[TypeHash]) -> Self {
        let mut hash = hash_constants::TYPE ^ xxh64(namespace.as_bytes(), 0);
        hash = hash
            .wrapping_mul(hash_constants::SEP)
            .wrapping_add(xxh64(name.as_bytes(), 0));
        for (i, arg) in args.iter().enumerate() {
            let marker = hash_constants::ARG_MARKERS
                .get(i)
                .copied()
                .unwrap_or_else(|| hash_constants::ARG_MARKERS[0].wrapping_add(i as u64));
            hash = hash.wrapping_mul(hash_constants::SEP).wrapping_add(marker ^ arg.0);
        }
        TypeHash(hash)
    }

    /// Check if this is the empty hash.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl From<u64> for TypeHash {
    fn from(value: u64) -> Self {
        TypeHash(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_parts_same_hash() {
        let a = TypeHash::from_parts("Game", "Gear", &[]);
        let b = TypeHash::from_parts("Game", "Gear", &[]);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn namespace_participates() {
        let a = TypeHash::from_parts("Game", "Logger", &[]);
        let b = TypeHash::from_parts("Tools", "Logger", &[]);
        assert_ne!(a, b);
    }

    #[test]
    fn namespace_and_name_boundary_matters() {
        let a = TypeHash::from_parts("Ab", "C", &[]);
        let b = TypeHash::from_parts("A", "bC", &[]);
        assert_ne!(a, b);
    }

    #[test]
    fn argument_order_matters() {
        let a = TypeHash::from_parts("", "A", &[]);
        let b = TypeHash::from_parts("", "B", &[]);
        let ab = TypeHash::from_parts("System", "Map", &[a, b]);
        let ba = TypeHash::from_parts("System", "Map", &[b, a]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn generic_differs_from_plain() {
        let plain = TypeHash::from_parts("System", "List", &[]);
        let arg = TypeHash::from_parts("Game", "Gear", &[]);
        let generic = TypeHash::from_parts("System", "List", &[arg]);
        assert_ne!(plain, generic);
    }

    #[test]
    fn many_arguments_do_not_panic() {
        let arg = TypeHash::from_parts("", "T", &[]);
        let args = vec![arg; 12];
        let hash = TypeHash::from_parts("", "Tuple", &args);
        assert!(!hash.is_empty());
    }
}
