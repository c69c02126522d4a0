//! Enum type entry.

use sigil_core::TypeHash;

/// A named enum value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Integer value.
    pub value: i64,
}

impl EnumValue {
    /// Create a new enum value.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Registry entry for an enumeration type.
///
/// Enums carry no signals; resolving a signal against one always misses.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumEntry {
    /// Type name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Enum values.
    pub values: Vec<EnumValue>,
}

impl EnumEntry {
    /// Create a new enum entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            values: Vec::new(),
        }
    }

    /// Add a value to the enum.
    pub fn with_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push(EnumValue::new(name, value));
        self
    }

    /// Look up a value by name.
    pub fn get_value(&self, name: &str) -> Option<i64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    /// Look up a name by value.
    pub fn get_name(&self, value: i64) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.name.as_str())
    }
}
