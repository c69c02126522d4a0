//! Dynamic values delivered to and returned from callbacks.

/// Opaque reference to a native object instance.
///
/// The marshal engine never looks inside an instance; it only carries the
/// reference across the boundary, so identity is all this type holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ObjectRef(pub u64);

impl ObjectRef {
    /// Create an object reference from a raw instance id.
    pub const fn new(id: u64) -> Self {
        ObjectRef(id)
    }

    /// Get the raw instance id.
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// A value in the dynamic callback environment.
///
/// All integer widths collapse into `Int` and both float widths into
/// `Float`; the precise native width lives in the signal descriptor, not in
/// the value itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
    /// Void/empty; also the "no result" a callback returns by default.
    Void,
    /// Boolean value
    Bool(bool),
    /// Integer value (i8..i64, u8..u64 all stored as i64)
    Int(i64),
    /// Floating point value (f32, f64 both stored as f64)
    Float(f64),
    /// String value (owned)
    Str(String),
    /// Reference to a native object instance
    Object(ObjectRef),
    /// Null handle
    Null,
}

impl Dynamic {
    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Void => "void",
            Dynamic::Bool(_) => "bool",
            Dynamic::Int(_) => "int",
            Dynamic::Float(_) => "float",
            Dynamic::Str(_) => "string",
            Dynamic::Object(_) => "object",
            Dynamic::Null => "null",
        }
    }

    /// Check if this value is void.
    pub fn is_void(&self) -> bool {
        matches!(self, Dynamic::Void)
    }

    /// Check if this value is the null handle.
    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }

    /// Whether this value counts as "no result" from a callback.
    ///
    /// The callback environment has two no-result sentinels; an emission
    /// treats both as "leave the return slot alone".
    pub fn is_absent(&self) -> bool {
        matches!(self, Dynamic::Void | Dynamic::Null)
    }
}
