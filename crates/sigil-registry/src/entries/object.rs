//! Object type entry.
//!
//! This module provides `ObjectEntry` for instantiable native object types,
//! the kind of entry that carries a signal table.

use sigil_core::TypeHash;

use crate::signal::SignalSpec;

/// Registry entry for a native object type.
///
/// Object types sit in a single-inheritance chain and may implement any
/// number of interfaces. Signals declared here are found by
/// [`find_signal`](ObjectEntry::find_signal) during resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectEntry {
    /// Type name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Parent type hash, if any.
    pub parent: Option<TypeHash>,
    /// Implemented interface type hashes.
    pub interfaces: Vec<TypeHash>,
    /// Declared signals.
    pub signals: Vec<SignalSpec>,
}

impl ObjectEntry {
    /// Create a new object entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            parent: None,
            interfaces: Vec::new(),
            signals: Vec::new(),
        }
    }

    /// Set the parent type.
    pub fn with_parent(mut self, parent: TypeHash) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Add an implemented interface.
    pub fn with_interface(mut self, interface: TypeHash) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Declare a signal on this type.
    pub fn with_signal(mut self, signal: SignalSpec) -> Self {
        self.signals.push(signal);
        self
    }

    /// Find a declared signal by name.
    pub fn find_signal(&self, name: &str) -> Option<&SignalSpec> {
        self.signals.iter().find(|s| s.name == name)
    }

    /// Check if this type implements a specific interface.
    pub fn has_interface(&self, interface: TypeHash) -> bool {
        self.interfaces.contains(&interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_core::TypeDesc;

    #[test]
    fn object_entry_creation() {
        let entry = ObjectEntry::new("Button");

        assert_eq!(entry.name, "Button");
        assert_eq!(entry.type_hash, TypeHash::from_name("Button"));
        assert!(entry.parent.is_none());
        assert!(entry.interfaces.is_empty());
        assert!(entry.signals.is_empty());
    }

    #[test]
    fn object_entry_with_parent_and_interface() {
        let parent = TypeHash::from_name("Widget");
        let activatable = TypeHash::from_name("Activatable");
        let entry = ObjectEntry::new("Button")
            .with_parent(parent)
            .with_interface(activatable);

        assert_eq!(entry.parent, Some(parent));
        assert!(entry.has_interface(activatable));
        assert!(!entry.has_interface(TypeHash::from_name("Scrollable")));
    }

    #[test]
    fn object_entry_find_signal() {
        let entry = ObjectEntry::new("Button")
            .with_signal(SignalSpec::new("clicked", vec![], TypeDesc::Void))
            .with_signal(SignalSpec::new(
                "activate",
                vec![TypeDesc::Int32],
                TypeDesc::Void,
            ));

        assert!(entry.find_signal("clicked").is_some());
        assert_eq!(entry.find_signal("activate").unwrap().param_count(), 1);
        assert!(entry.find_signal("nonexistent").is_none());
    }
}
