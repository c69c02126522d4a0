//! Signal metadata: registered specs and resolved descriptors.

use bitflags::bitflags;
use sigil_core::{TypeDesc, TypeHash};

bitflags! {
    /// Emission-stage and behavior flags carried on signal metadata.
    ///
    /// These mirror the native signal system's registration flags. The
    /// marshal engine exposes them through the descriptor but never
    /// branches on them; stage ordering is the emitter's concern.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SignalFlags: u32 {
        /// Handler runs in the first emission stage.
        const RUN_FIRST = 1 << 0;
        /// Handler runs in the last emission stage.
        const RUN_LAST = 1 << 1;
        /// Handler runs in the cleanup stage.
        const RUN_CLEANUP = 1 << 2;
        /// Recursive emission on the same instance is blocked.
        const NO_RECURSE = 1 << 3;
        /// The signal supports a detail suffix on emission.
        const DETAILED = 1 << 4;
        /// The signal may be emitted as an object action.
        const ACTION = 1 << 5;
        /// Emission hooks are skipped for this signal.
        const NO_HOOKS = 1 << 6;
    }
}

impl Default for SignalFlags {
    fn default() -> Self {
        SignalFlags::RUN_LAST
    }
}

/// Registered shape of a signal: name, parameter types, return type, flags.
///
/// Specs live inside a type entry's signal table; resolution snapshots them
/// into [`SignalDescriptor`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSpec {
    /// Signal name, matched verbatim at resolution.
    pub name: String,
    /// Parameter types in positional order.
    pub params: Vec<TypeDesc>,
    /// Return type; `TypeDesc::Void` for no return.
    pub return_type: TypeDesc,
    /// Emission flags.
    pub flags: SignalFlags,
}

impl SignalSpec {
    /// Create a signal spec with the default `RUN_LAST` stage.
    pub fn new(name: impl Into<String>, params: Vec<TypeDesc>, return_type: TypeDesc) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            flags: SignalFlags::default(),
        }
    }

    /// Replace the emission flags.
    pub fn with_flags(mut self, flags: SignalFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Number of declared parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

/// Resolved, immutable snapshot of a signal on a concrete owner type.
///
/// Descriptors are owned by the
/// [`DescriptorTable`](crate::descriptor::DescriptorTable); closures hold a
/// [`DescriptorRef`](crate::descriptor::DescriptorRef) and read through it.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalDescriptor {
    /// Hash of the type the signal was resolved on.
    pub owner: TypeHash,
    /// Signal name.
    pub name: String,
    /// Parameter types in positional order.
    pub params: Vec<TypeDesc>,
    /// Return type; `TypeDesc::Void` for no return.
    pub return_type: TypeDesc,
    /// Emission flags.
    pub flags: SignalFlags,
}

impl SignalDescriptor {
    /// Snapshot a registered spec for a concrete owner.
    pub fn new(owner: TypeHash, spec: &SignalSpec) -> Self {
        Self {
            owner,
            name: spec.name.clone(),
            params: spec.params.clone(),
            return_type: spec.return_type,
            flags: spec.flags,
        }
    }

    /// Identity hash of this signal (owner plus name).
    pub fn signal_hash(&self) -> TypeHash {
        TypeHash::from_signal(self.owner, &self.name)
    }

    /// Number of declared parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Whether the signal declares no return value.
    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }
}
