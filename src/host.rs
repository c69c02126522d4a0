//! The callback environment: registration, pinning, invocation.
//!
//! [`ScriptHost`] models the dynamic side of the boundary. Callbacks live
//! in a generational heap; a freshly registered callback is transient and
//! disappears at the next [`collect`](ScriptHost::collect) unless a
//! closure pins it. Invocation is synchronous and failures surface both as
//! a [`CallError`] and as a record in the host's [`ErrorSink`].

use thiserror::Error;

use sigil_core::Dynamic;

use crate::sink::{ErrorSink, ReportKind};

/// A registered callback.
///
/// Receives the receiver binding and the positional arguments; returns a
/// value or the message it raised. Deliberately not `Send`/`Sync`: the
/// environment is single-threaded-cooperative.
pub type CallbackFn = Box<dyn FnMut(&Dynamic, &[Dynamic]) -> Result<Dynamic, String>>;

/// Handle to a registered callback.
///
/// This is a safe, copyable reference into the host's callback heap. The
/// generational index detects handles that outlive their callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId {
    /// Index into ScriptHost.slots
    pub index: u32,
    /// Generation for use-after-collect detection
    pub generation: u32,
}

impl CallbackId {
    /// Create a new callback id.
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Errors produced when invoking a callback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// The callback handle no longer points at a live callback.
    #[error("stale callback handle: callback at index {index} has been collected")]
    StaleCallback { index: u32 },

    /// The callback raised instead of returning a value.
    #[error("callback raised: {message}")]
    CallbackRaised { message: String },
}

/// Boundary the closure layer drives the callback environment through.
///
/// [`ScriptHost`] is the concrete implementation; closures only see this
/// surface.
pub trait CallbackEnv {
    /// Make a callback handle durable. Returns false for a stale handle,
    /// in which case nothing was pinned.
    fn pin_callback(&mut self, id: CallbackId) -> bool;

    /// Release one pin on a callback, permitting collection once no pins
    /// remain. Returns false for a stale handle.
    fn unpin_callback(&mut self, id: CallbackId) -> bool;

    /// Run a callback synchronously with the given receiver binding and
    /// positional arguments.
    fn invoke(
        &mut self,
        id: CallbackId,
        receiver: &Dynamic,
        args: &[Dynamic],
    ) -> Result<Dynamic, CallError>;

    /// Record a failure that has no handler to land in.
    fn report_uncatchable(&mut self, message: String);
}

struct CallbackSlot {
    generation: u32,
    value: Option<CallbackFn>,
    pin_count: u32,
}

/// Heap of registered callbacks plus the environment's error sink.
///
/// Callbacks are stored in a Vec with generation tracking. Collection
/// frees every unpinned slot and increments its generation, so handles
/// held past a collect read as stale. Pinned callbacks survive any number
/// of collections.
pub struct ScriptHost {
    slots: Vec<CallbackSlot>,
    free_list: Vec<u32>,
    sink: ErrorSink,
}

impl ScriptHost {
    /// Create a new host with no callbacks.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            sink: ErrorSink::new(),
        }
    }

    /// Register a callback.
    ///
    /// The callback starts unpinned: it survives only until the next
    /// [`collect`](ScriptHost::collect) unless pinned first.
    pub fn register<F>(&mut self, callback: F) -> CallbackId
    where
        F: FnMut(&Dynamic, &[Dynamic]) -> Result<Dynamic, String> + 'static,
    {
        let boxed: CallbackFn = Box::new(callback);

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            let generation = slot.generation;
            slot.value = Some(boxed);
            slot.pin_count = 0;
            CallbackId::new(index, generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(CallbackSlot {
                generation: 0,
                value: Some(boxed),
                pin_count: 0,
            });
            CallbackId::new(index, 0)
        }
    }

    /// Drop every unpinned callback and invalidate its handles.
    ///
    /// Returns the number of callbacks collected.
    pub fn collect(&mut self) -> usize {
        let mut collected = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.is_some() && slot.pin_count == 0 {
                slot.value = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free_list.push(index as u32);
                collected += 1;
            }
        }
        collected
    }

    /// Check if a handle points at a live callback.
    pub fn is_live(&self, id: CallbackId) -> bool {
        self.slots
            .get(id.index as usize)
            .is_some_and(|slot| slot.generation == id.generation && slot.value.is_some())
    }

    /// Get the pin count for a callback.
    pub fn callback_pins(&self, id: CallbackId) -> Option<u32> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation == id.generation && slot.value.is_some() {
            Some(slot.pin_count)
        } else {
            None
        }
    }

    /// Number of live callbacks, pinned or not.
    pub fn live_callbacks(&self) -> usize {
        self.slots.iter().filter(|s| s.value.is_some()).count()
    }

    /// Read the error sink.
    pub fn sink(&self) -> &ErrorSink {
        &self.sink
    }

    /// Mutable access to the error sink, for draining between emissions.
    pub fn sink_mut(&mut self) -> &mut ErrorSink {
        &mut self.sink
    }

    fn live_callback(&mut self, id: CallbackId) -> Option<&mut CallbackFn> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.value.as_mut()
    }
}

impl Default for ScriptHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CallbackEnv for ScriptHost {
    fn pin_callback(&mut self, id: CallbackId) -> bool {
        if let Some(slot) = self.slots.get_mut(id.index as usize)
            && slot.generation == id.generation
            && slot.value.is_some()
        {
            slot.pin_count = slot.pin_count.saturating_add(1);
            return true;
        }
        false
    }

    fn unpin_callback(&mut self, id: CallbackId) -> bool {
        if let Some(slot) = self.slots.get_mut(id.index as usize)
            && slot.generation == id.generation
            && slot.value.is_some()
        {
            slot.pin_count = slot.pin_count.saturating_sub(1);
            return true;
        }
        false
    }

    fn invoke(
        &mut self,
        id: CallbackId,
        receiver: &Dynamic,
        args: &[Dynamic],
    ) -> Result<Dynamic, CallError> {
        let Some(callback) = self.live_callback(id) else {
            return Err(CallError::StaleCallback { index: id.index });
        };
        match callback(receiver, args) {
            Ok(value) => Ok(value),
            Err(message) => {
                // The raise is visible in the sink even though the caller
                // treats it as an absent result
                self.sink.record(ReportKind::Raised, message.clone());
                Err(CallError::CallbackRaised { message })
            }
        }
    }

    fn report_uncatchable(&mut self, message: String) {
        self.sink.record(ReportKind::Uncatchable, message);
    }
}
