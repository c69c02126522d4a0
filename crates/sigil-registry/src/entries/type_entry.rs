//! TypeEntry enum for unified type storage.
//!
//! This module provides `TypeEntry`, a single enum wrapping all entry kinds
//! for unified storage and lookup in the repository.

use sigil_core::TypeHash;

use crate::signal::SignalSpec;

use super::{EnumEntry, InterfaceEntry, ObjectEntry, RecordEntry};

/// Unified type entry for repository storage.
///
/// Only object and interface entries carry signal tables; enum and record
/// entries exist so lookups against them miss cleanly instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeEntry {
    /// Instantiable object type.
    Object(ObjectEntry),
    /// Interface type.
    Interface(InterfaceEntry),
    /// Enumeration type.
    Enum(EnumEntry),
    /// Plain record (struct) type.
    Record(RecordEntry),
}

impl TypeEntry {
    /// Get the type hash for this entry.
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeEntry::Object(e) => e.type_hash,
            TypeEntry::Interface(e) => e.type_hash,
            TypeEntry::Enum(e) => e.type_hash,
            TypeEntry::Record(e) => e.type_hash,
        }
    }

    /// Get the type name.
    pub fn name(&self) -> &str {
        match self {
            TypeEntry::Object(e) => &e.name,
            TypeEntry::Interface(e) => &e.name,
            TypeEntry::Enum(e) => &e.name,
            TypeEntry::Record(e) => &e.name,
        }
    }

    /// Find a declared signal by name.
    ///
    /// Only object and interface entries are searched; the other variants
    /// never match.
    pub fn find_signal(&self, name: &str) -> Option<&SignalSpec> {
        match self {
            TypeEntry::Object(e) => e.find_signal(name),
            TypeEntry::Interface(e) => e.find_signal(name),
            TypeEntry::Enum(_) | TypeEntry::Record(_) => None,
        }
    }

    // === Type Checks ===

    /// Check if this is an object type.
    pub fn is_object(&self) -> bool {
        matches!(self, TypeEntry::Object(_))
    }

    /// Check if this is an interface type.
    pub fn is_interface(&self) -> bool {
        matches!(self, TypeEntry::Interface(_))
    }

    /// Check if this is an enum type.
    pub fn is_enum(&self) -> bool {
        matches!(self, TypeEntry::Enum(_))
    }

    /// Check if this is a record type.
    pub fn is_record(&self) -> bool {
        matches!(self, TypeEntry::Record(_))
    }

    // === Downcasting ===

    /// Get as an object entry.
    pub fn as_object(&self) -> Option<&ObjectEntry> {
        match self {
            TypeEntry::Object(e) => Some(e),
            _ => None,
        }
    }

    /// Get as an interface entry.
    pub fn as_interface(&self) -> Option<&InterfaceEntry> {
        match self {
            TypeEntry::Interface(e) => Some(e),
            _ => None,
        }
    }

    /// Get as an enum entry.
    pub fn as_enum(&self) -> Option<&EnumEntry> {
        match self {
            TypeEntry::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// Get as a record entry.
    pub fn as_record(&self) -> Option<&RecordEntry> {
        match self {
            TypeEntry::Record(e) => Some(e),
            _ => None,
        }
    }
}

// === From Implementations ===

impl From<ObjectEntry> for TypeEntry {
    fn from(entry: ObjectEntry) -> Self {
        TypeEntry::Object(entry)
    }
}

impl From<InterfaceEntry> for TypeEntry {
    fn from(entry: InterfaceEntry) -> Self {
        TypeEntry::Interface(entry)
    }
}

impl From<EnumEntry> for TypeEntry {
    fn from(entry: EnumEntry) -> Self {
        TypeEntry::Enum(entry)
    }
}

impl From<RecordEntry> for TypeEntry {
    fn from(entry: RecordEntry) -> Self {
        TypeEntry::Record(entry)
    }
}
