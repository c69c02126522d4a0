//! Introspection registry for the sigil marshalling engine.
//!
//! This crate stores the type entries a native signal system describes
//! itself with and resolves signals against them:
//! - [`Repository`]: type storage plus the `resolve` operation
//! - [`TypeEntry`] and its kinds ([`ObjectEntry`], [`InterfaceEntry`],
//!   [`EnumEntry`], [`RecordEntry`]) - only the first two carry signals
//! - [`SignalSpec`] / [`SignalDescriptor`]: registered shape and resolved
//!   snapshot of a signal
//! - [`DescriptorTable`] / [`DescriptorRef`]: pin-counted descriptor slots

pub mod descriptor;
pub mod entries;
pub mod error;
pub mod repository;
pub mod signal;

pub use descriptor::{DescriptorRef, DescriptorTable};
pub use entries::{EnumEntry, EnumValue, InterfaceEntry, ObjectEntry, RecordEntry, TypeEntry};
pub use error::RegistrationError;
pub use repository::Repository;
pub use signal::{SignalDescriptor, SignalFlags, SignalSpec};
