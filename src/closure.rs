//! Signal closures: construction, marshalling, finalization.
//!
//! A [`SignalClosure`] binds one pinned callback to one pinned signal
//! descriptor. The native signal system constructs it once, drives
//! [`marshal`](SignalClosure::marshal) once per emission, and finalizes it
//! exactly once when the connection is discarded.

use thiserror::Error;

use sigil_core::{ConversionError, Dynamic, NativeValue, ObjectRef, TypeHash};
use sigil_core::{dynamic_to_native, native_to_dynamic};
use sigil_registry::{DescriptorRef, Repository, SignalFlags};

use crate::host::{CallbackEnv, CallbackId};

/// Per-emission context the native system hands to every closure.
///
/// Carried across the boundary for shape compatibility; the marshal engine
/// does not branch on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionHint {
    /// The emitting instance.
    pub instance: ObjectRef,
    /// The emission stage this dispatch runs in.
    pub run_stage: SignalFlags,
}

/// Errors produced while marshalling one emission.
///
/// These never unwind toward the native caller; `marshal` routes them
/// through [`CallbackEnv::report_uncatchable`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarshalError {
    /// The closure's descriptor is gone; it was used after finalization.
    #[error("signal closure used after finalization")]
    ClosureFinalized,

    /// The emission's value count disagrees with the signal's declaration.
    #[error(
        "argument count mismatch: signal '{signal}' declares {expected} parameters, emission carried {actual}"
    )]
    ArgumentCountMismatch {
        signal: String,
        expected: usize,
        actual: usize,
    },

    /// A native argument failed conversion into its dynamic form.
    #[error("cannot convert argument {index} of signal '{signal}': {source}")]
    ArgumentConversion {
        signal: String,
        index: usize,
        source: ConversionError,
    },

    /// The callback's return value failed conversion into the native slot.
    #[error("cannot convert return value of signal '{signal}' callback: {source}")]
    ReturnConversion {
        signal: String,
        source: ConversionError,
    },
}

/// One callback bound to one resolved signal.
///
/// Both handles are pinned from construction until finalization. The
/// closure itself is passive: it never initiates work, it only reacts to
/// the native system's marshal and finalize calls.
#[derive(Debug)]
pub struct SignalClosure {
    callback: Option<CallbackId>,
    descriptor: Option<DescriptorRef>,
}

impl SignalClosure {
    /// Construct a closure for a named signal on a type.
    ///
    /// Resolution misses and stale callback handles both yield `None` with
    /// no pins retained; construction failure never touches the error
    /// sink.
    pub fn create(
        repo: &mut Repository,
        env: &mut impl CallbackEnv,
        signal_type: TypeHash,
        signal_name: &str,
        callback: CallbackId,
    ) -> Option<SignalClosure> {
        let descriptor = repo.resolve(signal_type, signal_name)?;

        if !env.pin_callback(callback) {
            // Roll back the descriptor pin taken above
            repo.release(descriptor);
            return None;
        }

        Some(SignalClosure {
            callback: Some(callback),
            descriptor: Some(descriptor),
        })
    }

    /// The descriptor ref this closure pins, until finalization.
    pub fn descriptor_ref(&self) -> Option<DescriptorRef> {
        self.descriptor
    }

    /// The callback this closure pins, until finalization.
    pub fn callback_id(&self) -> Option<CallbackId> {
        self.callback
    }

    /// Check if this closure has been finalized.
    pub fn is_finalized(&self) -> bool {
        self.callback.is_none() && self.descriptor.is_none()
    }

    /// Marshal one emission through the callback.
    ///
    /// `params` carries the emission's native values; its length is the
    /// argument count. `return_slot` is the caller-owned cell for the
    /// callback's converted return value; it is written at most once, and
    /// only for a non-void signal whose callback produced a convertible
    /// value. `_hint` is accepted for boundary shape compatibility.
    ///
    /// Failures are reported through the environment's uncatchable channel
    /// and the emission is abandoned; nothing propagates to the caller.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn marshal(
        &self,
        repo: &Repository,
        env: &mut impl CallbackEnv,
        return_slot: &mut NativeValue,
        params: &[NativeValue],
        _hint: Option<&EmissionHint>,
    ) {
        if let Err(err) = self.try_marshal(repo, env, return_slot, params) {
            env.report_uncatchable(err.to_string());
        }
    }

    fn try_marshal(
        &self,
        repo: &Repository,
        env: &mut impl CallbackEnv,
        return_slot: &mut NativeValue,
        params: &[NativeValue],
    ) -> Result<(), MarshalError> {
        let (Some(callback), Some(descriptor_ref)) = (self.callback, self.descriptor) else {
            return Err(MarshalError::ClosureFinalized);
        };
        let descriptor = repo
            .descriptor(descriptor_ref)
            .ok_or(MarshalError::ClosureFinalized)?;

        // Checked before any conversion: a count disagreement means the
        // emission and the descriptor describe different signals
        if params.len() != descriptor.param_count() {
            return Err(MarshalError::ArgumentCountMismatch {
                signal: descriptor.name.clone(),
                expected: descriptor.param_count(),
                actual: params.len(),
            });
        }

        // All arguments convert before the callback observes any of them
        let mut args = Vec::with_capacity(params.len());
        for (index, (value, desc)) in params.iter().zip(&descriptor.params).enumerate() {
            let dynamic = native_to_dynamic(value, desc).map_err(|source| {
                MarshalError::ArgumentConversion {
                    signal: descriptor.name.clone(),
                    index,
                    source,
                }
            })?;
            args.push(dynamic);
        }

        // Exactly one invocation per emission. The receiver binding is
        // deliberately neutral: callbacks must not rely on it.
        let result = match env.invoke(callback, &Dynamic::Void, &args) {
            Ok(value) => value,
            // A raise is already visible through the host's sink; the
            // emission ends without a return value
            Err(_) => return Ok(()),
        };

        // No result leaves the slot alone, even for a non-void signal
        if result.is_absent() {
            return Ok(());
        }
        // Void signals never write the slot, whatever the callback returned
        if descriptor.returns_void() {
            return Ok(());
        }

        dynamic_to_native(&result, &descriptor.return_type, return_slot).map_err(|source| {
            MarshalError::ReturnConversion {
                signal: descriptor.name.clone(),
                source,
            }
        })
    }

    /// Release both pins. Called exactly once by the native system when the
    /// connection is discarded; a second call is a structural no-op.
    pub fn finalize(&mut self, repo: &mut Repository, env: &mut impl CallbackEnv) {
        if let Some(descriptor) = self.descriptor.take() {
            repo.release(descriptor);
        }
        if let Some(callback) = self.callback.take() {
            env.unpin_callback(callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScriptHost;
    use sigil_core::TypeDesc;
    use sigil_registry::{ObjectEntry, SignalSpec};

    fn repo_with_signal(params: Vec<TypeDesc>, return_type: TypeDesc) -> Repository {
        let mut repo = Repository::new();
        repo.register(
            ObjectEntry::new("Button").with_signal(SignalSpec::new("sig", params, return_type)),
        )
        .unwrap();
        repo
    }

    #[test]
    fn create_pins_both_handles() {
        let mut repo = repo_with_signal(vec![], TypeDesc::Void);
        let mut host = ScriptHost::new();
        let callback = host.register(|_, _| Ok(Dynamic::Void));

        let closure = SignalClosure::create(
            &mut repo,
            &mut host,
            TypeHash::from_name("Button"),
            "sig",
            callback,
        )
        .unwrap();

        assert!(!closure.is_finalized());
        assert_eq!(repo.live_descriptors(), 1);
        assert_eq!(host.callback_pins(callback), Some(1));
    }

    #[test]
    fn create_miss_is_side_effect_free() {
        let mut repo = repo_with_signal(vec![], TypeDesc::Void);
        let mut host = ScriptHost::new();
        let callback = host.register(|_, _| Ok(Dynamic::Void));

        let closure = SignalClosure::create(
            &mut repo,
            &mut host,
            TypeHash::from_name("Button"),
            "missing",
            callback,
        );

        assert!(closure.is_none());
        assert_eq!(repo.live_descriptors(), 0);
        assert_eq!(host.callback_pins(callback), Some(0));
        assert!(host.sink().is_empty());
    }

    #[test]
    fn create_with_stale_callback_rolls_back_descriptor_pin() {
        let mut repo = repo_with_signal(vec![], TypeDesc::Void);
        let mut host = ScriptHost::new();
        let callback = host.register(|_, _| Ok(Dynamic::Void));
        host.collect();

        let closure = SignalClosure::create(
            &mut repo,
            &mut host,
            TypeHash::from_name("Button"),
            "sig",
            callback,
        );

        assert!(closure.is_none());
        assert_eq!(repo.live_descriptors(), 0);
        assert!(host.sink().is_empty());
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut repo = repo_with_signal(vec![], TypeDesc::Void);
        let mut host = ScriptHost::new();
        let callback = host.register(|_, _| Ok(Dynamic::Void));

        let mut closure = SignalClosure::create(
            &mut repo,
            &mut host,
            TypeHash::from_name("Button"),
            "sig",
            callback,
        )
        .unwrap();

        closure.finalize(&mut repo, &mut host);
        assert!(closure.is_finalized());
        assert_eq!(repo.live_descriptors(), 0);
        assert_eq!(host.callback_pins(callback), Some(0));

        closure.finalize(&mut repo, &mut host);
        assert_eq!(repo.live_descriptors(), 0);
        assert_eq!(host.callback_pins(callback), Some(0));
    }
}
