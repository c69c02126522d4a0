//! Width-precise values on the native side of the boundary.

use crate::dynamic::ObjectRef;

/// A typed native slot, as it crosses the boundary during an emission.
///
/// Unlike [`Dynamic`](crate::Dynamic), this keeps the exact width the
/// native side declared. `Unset` is the state of a freshly allocated
/// return slot before anything has been written into it.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    /// No value has been written yet
    Unset,
    /// Boolean
    Bool(bool),
    /// Signed 8-bit integer
    Int8(i8),
    /// Signed 16-bit integer
    Int16(i16),
    /// Signed 32-bit integer
    Int32(i32),
    /// Signed 64-bit integer
    Int64(i64),
    /// Unsigned 8-bit integer
    Uint8(u8),
    /// Unsigned 16-bit integer
    Uint16(u16),
    /// Unsigned 32-bit integer
    Uint32(u32),
    /// Unsigned 64-bit integer
    Uint64(u64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// String
    Str(String),
    /// Reference to a native object instance
    Object(ObjectRef),
}

impl NativeValue {
    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            NativeValue::Unset => "unset",
            NativeValue::Bool(_) => "bool",
            NativeValue::Int8(_) => "int8",
            NativeValue::Int16(_) => "int16",
            NativeValue::Int32(_) => "int32",
            NativeValue::Int64(_) => "int64",
            NativeValue::Uint8(_) => "uint8",
            NativeValue::Uint16(_) => "uint16",
            NativeValue::Uint32(_) => "uint32",
            NativeValue::Uint64(_) => "uint64",
            NativeValue::Float(_) => "float",
            NativeValue::Double(_) => "double",
            NativeValue::Str(_) => "string",
            NativeValue::Object(_) => "object",
        }
    }

    /// Check if this slot has not been written yet.
    pub fn is_unset(&self) -> bool {
        matches!(self, NativeValue::Unset)
    }
}

impl Default for NativeValue {
    fn default() -> Self {
        NativeValue::Unset
    }
}
