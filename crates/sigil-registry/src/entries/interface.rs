//! Interface type entry.
//!
//! This module provides `InterfaceEntry`, the second entry kind that carries
//! a signal table.

use sigil_core::TypeHash;

use crate::signal::SignalSpec;

/// Registry entry for an interface type.
///
/// Interfaces cannot be instantiated; object types implement them. Like
/// objects they may declare signals, found by
/// [`find_signal`](InterfaceEntry::find_signal) during resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceEntry {
    /// Type name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Prerequisite type hashes an implementor must also satisfy.
    pub prerequisites: Vec<TypeHash>,
    /// Declared signals.
    pub signals: Vec<SignalSpec>,
}

impl InterfaceEntry {
    /// Create a new interface entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            prerequisites: Vec::new(),
            signals: Vec::new(),
        }
    }

    /// Add a prerequisite type.
    pub fn with_prerequisite(mut self, prerequisite: TypeHash) -> Self {
        self.prerequisites.push(prerequisite);
        self
    }

    /// Declare a signal on this interface.
    pub fn with_signal(mut self, signal: SignalSpec) -> Self {
        self.signals.push(signal);
        self
    }

    /// Find a declared signal by name.
    pub fn find_signal(&self, name: &str) -> Option<&SignalSpec> {
        self.signals.iter().find(|s| s.name == name)
    }

    /// Check if this interface requires a specific prerequisite.
    pub fn has_prerequisite(&self, prerequisite: TypeHash) -> bool {
        self.prerequisites.contains(&prerequisite)
    }
}
