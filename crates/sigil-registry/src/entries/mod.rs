//! Repository entry types.
//!
//! This module provides the entry types stored in the introspection
//! repository:
//!
//! - [`TypeEntry`] - Unified enum wrapping all entry kinds
//! - [`ObjectEntry`] - Instantiable object types (carry signals)
//! - [`InterfaceEntry`] - Interface types (carry signals)
//! - [`EnumEntry`] - Enumeration types
//! - [`RecordEntry`] - Plain record (struct) types
//!
//! Supporting types:
//! - [`EnumValue`] - Named enum member

mod enumeration;
mod interface;
mod object;
mod record;
mod type_entry;

// Individual entry types
pub use enumeration::{EnumEntry, EnumValue};
pub use interface::InterfaceEntry;
pub use object::ObjectEntry;
pub use record::RecordEntry;

// Unified type entry
pub use type_entry::TypeEntry;
