//! Sigil bridges native signal emissions into script callbacks.
//!
//! The native side declares types and their signals in a
//! [`Repository`](sigil_registry::Repository), scripts register callbacks
//! with a [`ScriptHost`](crate::host::ScriptHost), and a
//! [`SignalClosure`](crate::closure::SignalClosure) ties one callback to
//! one resolved signal. Each emission flows through the closure's marshal
//! path: native values convert to dynamic values, the callback runs once,
//! and its return value converts back into the caller's slot.
//!
//! Failures never unwind toward the native caller. Marshal errors are
//! reported through the host's [`ErrorSink`](crate::sink::ErrorSink) and
//! the emission is abandoned.

pub mod closure;
pub mod host;
pub mod sink;

pub mod prelude {
    pub use crate::closure::*;
    pub use crate::host::*;
    pub use crate::sink::*;
    pub use sigil_core::{
        ConversionError, Dynamic, NativeValue, ObjectRef, TypeDesc, TypeHash, dynamic_to_native,
        native_to_dynamic,
    };
    pub use sigil_registry::{
        DescriptorRef, DescriptorTable, EnumEntry, EnumValue, InterfaceEntry, ObjectEntry,
        RecordEntry, RegistrationError, Repository, SignalDescriptor, SignalFlags, SignalSpec,
        TypeEntry,
    };
}
