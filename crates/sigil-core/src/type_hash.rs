//! Deterministic hash-based type identity.
//!
//! This module provides [`TypeHash`], a 64-bit hash that identifies registered
//! native types and their signals. Unlike sequential IDs, hashes are computed
//! deterministically from names, enabling:
//!
//! - Forward references (hash computed before registration)
//! - No registration order dependencies
//! - Single map lookups (no secondary name→id maps)
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants so a type named
//! `"Button"` and a signal named `"Button"` can never collide.
//!
//! # Examples
//!
//! ```
//! use sigil_core::TypeHash;
//!
//! let button = TypeHash::from_name("Button");
//! assert_eq!(button, TypeHash::from_name("Button"));  // Deterministic
//!
//! // Signal identity incorporates the owning type
//! let clicked = TypeHash::from_signal(button, "clicked");
//! let other = TypeHash::from_signal(TypeHash::from_name("Window"), "clicked");
//! assert_ne!(clicked, other);
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
///
/// These constants ensure that different entity kinds (types vs signals)
/// produce distinct hashes even when they share the same name.
pub mod hash_constants {
    /// Separator constant mixed between path components.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for signal hashes
    pub const SIGNAL: u64 = 0x6b1d42e89ca3f075;
}

/// A deterministic 64-bit hash identifying a native type or a signal on one.
///
/// Computed from the qualified name (for types) or owner+name (for signals).
/// The same input always produces the same hash, so lookups never depend on
/// registration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a qualified type name.
    ///
    /// The same name always produces the same hash.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigil_core::TypeHash;
    ///
    /// let hash1 = TypeHash::from_name("Button");
    /// let hash2 = TypeHash::from_name("Button");
    /// assert_eq!(hash1, hash2);
    ///
    /// let qualified = TypeHash::from_name("Gtk::Button");
    /// ```
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a signal hash from the owning type and the signal name.
    ///
    /// Signals live in their own hash domain, so a signal named `"clicked"`
    /// never collides with a type named `"clicked"`, and the same signal name
    /// on two different owners produces two different hashes.
    #[inline]
    pub fn from_signal(owner: TypeHash, name: &str) -> Self {
        let hash = hash_constants::SIGNAL ^ xxh64(name.as_bytes(), 0);
        // wrapping_mul keeps owner/name mixing non-commutative
        TypeHash(hash.wrapping_mul(hash_constants::SEP).wrapping_add(owner.0))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
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
