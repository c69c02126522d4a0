//! Per-slot type descriptors for signal parameters and returns.

use std::fmt;

use crate::TypeHash;

/// Describes the native type of a single signal parameter or return slot.
///
/// Descriptors come from introspection metadata; the marshal engine never
/// invents them, it only routes values through them. Integer widths are
/// explicit because the native side stores each one in a cell of exactly
/// that width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    Void,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float,
    Double,
    Str,
    /// Reference to a registered native type, identified by hash.
    Object(TypeHash),
}

impl TypeDesc {
    /// Get the name of this descriptor.
    pub const fn name(self) -> &'static str {
        match self {
            TypeDesc::Void => "void",
            TypeDesc::Bool => "bool",
            TypeDesc::Int8 => "int8",
            TypeDesc::Int16 => "int16",
            TypeDesc::Int32 => "int32",
            TypeDesc::Int64 => "int64",
            TypeDesc::Uint8 => "uint8",
            TypeDesc::Uint16 => "uint16",
            TypeDesc::Uint32 => "uint32",
            TypeDesc::Uint64 => "uint64",
            TypeDesc::Float => "float",
            TypeDesc::Double => "double",
            TypeDesc::Str => "string",
            TypeDesc::Object(_) => "object",
        }
    }

    /// Whether this descriptor is the void type.
    pub const fn is_void(self) -> bool {
        matches!(self, TypeDesc::Void)
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
