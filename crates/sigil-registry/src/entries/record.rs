//! Record type entry.

use sigil_core::TypeHash;

/// Registry entry for a plain record (struct) type.
///
/// Records carry no signals; resolving a signal against one always misses.
/// A record may be registered as boxed, meaning the native side copies it
/// through a registered copy/free pair rather than by memcpy.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEntry {
    /// Type name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Whether the record is a registered boxed type.
    pub boxed: bool,
}

impl RecordEntry {
    /// Create a plain record entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            boxed: false,
        }
    }

    /// Create a boxed record entry.
    pub fn boxed(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            boxed: true,
        }
    }

    /// Check if the record is a registered boxed type.
    pub fn is_boxed(&self) -> bool {
        self.boxed
    }
}
