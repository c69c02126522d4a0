//! Conversions between native slots and dynamic callback values.
//!
//! This module provides the two directions of the boundary crossing:
//! - [`native_to_dynamic`]: widen a typed native value into a [`Dynamic`]
//! - [`dynamic_to_native`]: narrow a callback result back into a [`NativeValue`]
//!
//! ## Widening rules
//!
//! - All integer widths become `Dynamic::Int` (i64)
//! - Both float widths become `Dynamic::Float` (f64)
//! - `uint64` is carried by reinterpreting its bits as i64
//!
//! ## Example
//!
//! ```
//! use sigil_core::{native_to_dynamic, Dynamic, NativeValue, TypeDesc};
//!
//! let value = NativeValue::Int32(42);
//! let dynamic = native_to_dynamic(&value, &TypeDesc::Int32)?;
//! assert_eq!(dynamic, Dynamic::Int(42));
//! # Ok::<(), sigil_core::ConversionError>(())
//! ```

use crate::dynamic::Dynamic;
use crate::error::ConversionError;
use crate::native_value::NativeValue;
use crate::type_desc::TypeDesc;

// ============================================================================
// Native to dynamic
// ============================================================================

/// Widen a native argument into its dynamic representation.
///
/// The descriptor decides which native shape is acceptable; a value whose
/// shape disagrees with its descriptor is a mismatch, never a coercion.
pub fn native_to_dynamic(
    value: &NativeValue,
    desc: &TypeDesc,
) -> Result<Dynamic, ConversionError> {
    match (desc, value) {
        (TypeDesc::Void, NativeValue::Unset) => Ok(Dynamic::Void),
        (TypeDesc::Bool, NativeValue::Bool(v)) => Ok(Dynamic::Bool(*v)),
        (TypeDesc::Int8, NativeValue::Int8(v)) => Ok(Dynamic::Int(i64::from(*v))),
        (TypeDesc::Int16, NativeValue::Int16(v)) => Ok(Dynamic::Int(i64::from(*v))),
        (TypeDesc::Int32, NativeValue::Int32(v)) => Ok(Dynamic::Int(i64::from(*v))),
        (TypeDesc::Int64, NativeValue::Int64(v)) => Ok(Dynamic::Int(*v)),
        (TypeDesc::Uint8, NativeValue::Uint8(v)) => Ok(Dynamic::Int(i64::from(*v))),
        (TypeDesc::Uint16, NativeValue::Uint16(v)) => Ok(Dynamic::Int(i64::from(*v))),
        (TypeDesc::Uint32, NativeValue::Uint32(v)) => Ok(Dynamic::Int(i64::from(*v))),
        // Reinterpret the bits - this allows full u64 range via i64
        (TypeDesc::Uint64, NativeValue::Uint64(v)) => Ok(Dynamic::Int(*v as i64)),
        (TypeDesc::Float, NativeValue::Float(v)) => Ok(Dynamic::Float(f64::from(*v))),
        (TypeDesc::Double, NativeValue::Double(v)) => Ok(Dynamic::Float(*v)),
        (TypeDesc::Str, NativeValue::Str(v)) => Ok(Dynamic::Str(v.clone())),
        (TypeDesc::Object(_), NativeValue::Object(r)) => Ok(Dynamic::Object(*r)),
        (expected, actual) => Err(ConversionError::type_mismatch(
            expected.name(),
            actual.type_name(),
        )),
    }
}

// ============================================================================
// Dynamic to native
// ============================================================================

/// Narrow a callback result back into a typed native slot.
///
/// The slot is written only when the whole conversion succeeds; on error it
/// keeps its previous contents.
pub fn dynamic_to_native(
    value: &Dynamic,
    desc: &TypeDesc,
    slot: &mut NativeValue,
) -> Result<(), ConversionError> {
    let converted = match desc {
        TypeDesc::Void => match value {
            Dynamic::Void => NativeValue::Unset,
            other => {
                return Err(ConversionError::type_mismatch("void", other.type_name()));
            }
        },
        TypeDesc::Bool => match value {
            Dynamic::Bool(v) => NativeValue::Bool(*v),
            other => {
                return Err(ConversionError::type_mismatch("bool", other.type_name()));
            }
        },
        TypeDesc::Int8 => NativeValue::Int8(narrow(expect_int(value)?, "int8")?),
        TypeDesc::Int16 => NativeValue::Int16(narrow(expect_int(value)?, "int16")?),
        TypeDesc::Int32 => NativeValue::Int32(narrow(expect_int(value)?, "int32")?),
        TypeDesc::Int64 => NativeValue::Int64(expect_int(value)?),
        TypeDesc::Uint8 => NativeValue::Uint8(narrow(expect_int(value)?, "uint8")?),
        TypeDesc::Uint16 => NativeValue::Uint16(narrow(expect_int(value)?, "uint16")?),
        TypeDesc::Uint32 => NativeValue::Uint32(narrow(expect_int(value)?, "uint32")?),
        // Reinterpret bits - this preserves full u64 range
        TypeDesc::Uint64 => NativeValue::Uint64(expect_int(value)? as u64),
        TypeDesc::Float => {
            let v = expect_float(value)?;
            // Infinities and NaN pass through; only finite overflow is an error
            if v.is_finite() && (v > f64::from(f32::MAX) || v < f64::from(f32::MIN)) {
                return Err(ConversionError::FloatConversion {
                    value: v,
                    target_type: "float",
                });
            }
            NativeValue::Float(v as f32)
        }
        TypeDesc::Double => NativeValue::Double(expect_float(value)?),
        TypeDesc::Str => match value {
            Dynamic::Str(v) => NativeValue::Str(v.clone()),
            Dynamic::Null => return Err(ConversionError::null_value("string")),
            other => {
                return Err(ConversionError::type_mismatch("string", other.type_name()));
            }
        },
        TypeDesc::Object(_) => match value {
            Dynamic::Object(r) => NativeValue::Object(*r),
            Dynamic::Null => return Err(ConversionError::null_value("object")),
            other => {
                return Err(ConversionError::type_mismatch("object", other.type_name()));
            }
        },
    };

    *slot = converted;
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn expect_int(value: &Dynamic) -> Result<i64, ConversionError> {
    match value {
        Dynamic::Int(v) => Ok(*v),
        other => Err(ConversionError::type_mismatch("int", other.type_name())),
    }
}

fn expect_float(value: &Dynamic) -> Result<f64, ConversionError> {
    match value {
        Dynamic::Float(v) => Ok(*v),
        // Ints promote into float targets
        Dynamic::Int(v) => Ok(*v as f64),
        other => Err(ConversionError::type_mismatch("float", other.type_name())),
    }
}

fn narrow<T: TryFrom<i64>>(value: i64, target_type: &'static str) -> Result<T, ConversionError> {
    T::try_from(value).map_err(|_| ConversionError::IntegerOverflow { value, target_type })
}
