//! Core value and type model for the sigil marshalling engine.
//!
//! This crate holds the pieces shared by the descriptor registry and the
//! closure layer:
//! - [`TypeHash`]: stable 64-bit identity for named types and their signals
//! - [`TypeDesc`]: width-precise descriptors for signal parameters
//! - [`NativeValue`] and [`Dynamic`]: the two sides of the boundary
//! - [`native_to_dynamic`] / [`dynamic_to_native`]: the crossings between them

pub mod convert;
pub mod dynamic;
pub mod error;
pub mod native_value;
pub mod type_desc;
pub mod type_hash;

pub use convert::{dynamic_to_native, native_to_dynamic};
pub use dynamic::{Dynamic, ObjectRef};
pub use error::ConversionError;
pub use native_value::NativeValue;
pub use type_desc::TypeDesc;
pub use type_hash::{TypeHash, hash_constants};
