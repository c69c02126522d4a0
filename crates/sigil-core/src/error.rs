//! Error types for the conversion boundary.

use thiserror::Error;

/// Errors produced when a value cannot cross the native/dynamic boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The value's runtime shape does not match the slot's descriptor.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Integer value does not fit the target width.
    #[error("integer overflow: value {value} does not fit in {target_type}")]
    IntegerOverflow { value: i64, target_type: &'static str },

    /// Float value does not fit the target width.
    #[error("float conversion error: value {value} cannot be represented as {target_type}")]
    FloatConversion {
        value: f64,
        target_type: &'static str,
    },

    /// Null handle where a concrete value is required.
    #[error("null value cannot be converted to {target_type}")]
    NullValue { target_type: &'static str },
}

impl ConversionError {
    /// Create a type mismatch error.
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        ConversionError::TypeMismatch { expected, actual }
    }

    /// Create a null value error.
    pub fn null_value(target_type: &'static str) -> Self {
        ConversionError::NullValue { target_type }
    }
}
