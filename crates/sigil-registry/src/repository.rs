//! Introspection repository: type storage and signal resolution.
//!
//! This module provides [`Repository`], the central store for introspection
//! type entries and the owner of the pin-counted [`DescriptorTable`].
//!
//! # Storage Model
//!
//! - **Types**: all entries (`TypeEntry`) stored in a single map by
//!   `TypeHash`, populated up front through `register`.
//! - **Descriptors**: resolved signal snapshots live in the descriptor
//!   table; `resolve` pins a slot, `release` unpins it. The entry borrow
//!   taken during resolution never outlives the call.
//!
//! # Example
//!
//! ```
//! use sigil_core::{TypeDesc, TypeHash};
//! use sigil_registry::{ObjectEntry, Repository, SignalSpec};
//!
//! let mut repo = Repository::new();
//! repo.register(
//!     ObjectEntry::new("Button")
//!         .with_signal(SignalSpec::new("clicked", vec![], TypeDesc::Void)),
//! )?;
//!
//! let handle = repo.resolve(TypeHash::from_name("Button"), "clicked").unwrap();
//! assert_eq!(repo.descriptor(handle).unwrap().name, "clicked");
//! repo.release(handle);
//! # Ok::<(), sigil_registry::RegistrationError>(())
//! ```

use rustc_hash::FxHashMap;
use sigil_core::TypeHash;

use crate::descriptor::{DescriptorRef, DescriptorTable};
use crate::entries::TypeEntry;
use crate::error::RegistrationError;
use crate::signal::SignalDescriptor;

/// Central store for introspection type entries and resolved descriptors.
#[derive(Default)]
pub struct Repository {
    /// Type entries by hash.
    types: FxHashMap<TypeHash, TypeEntry>,
    /// Pin-counted slots for resolved signals.
    descriptors: DescriptorTable,
}

impl Repository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type entry.
    ///
    /// The entry's hash is its identity; a second entry with the same hash
    /// is rejected.
    pub fn register(&mut self, entry: impl Into<TypeEntry>) -> Result<(), RegistrationError> {
        let entry = entry.into();
        let hash = entry.type_hash();
        if self.types.contains_key(&hash) {
            return Err(RegistrationError::DuplicateType(entry.name().to_string()));
        }
        self.types.insert(hash, entry);
        Ok(())
    }

    /// Get a registered type entry by hash.
    pub fn type_entry(&self, type_hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&type_hash)
    }

    /// Check if a type is registered.
    pub fn contains_type(&self, type_hash: TypeHash) -> bool {
        self.types.contains_key(&type_hash)
    }

    /// Resolve a signal on a type, pinning its descriptor.
    ///
    /// Misses are `None`, never an error: an unknown type, a type kind
    /// without signals (enum, record), or an unknown signal name all miss
    /// the same way. On a hit the returned ref carries one pin that the
    /// holder must release exactly once.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve(&mut self, type_hash: TypeHash, signal_name: &str) -> Option<DescriptorRef> {
        let spec = self.types.get(&type_hash)?.find_signal(signal_name)?;

        let signal = TypeHash::from_signal(type_hash, signal_name);
        if let Some(handle) = self.descriptors.pin_existing(signal) {
            return Some(handle);
        }
        let descriptor = SignalDescriptor::new(type_hash, spec);
        Some(self.descriptors.insert(descriptor))
    }

    /// Read a resolved descriptor.
    ///
    /// Returns None if the ref is stale.
    pub fn descriptor(&self, handle: DescriptorRef) -> Option<&SignalDescriptor> {
        self.descriptors.get(handle)
    }

    /// Release one pin on a resolved descriptor.
    ///
    /// Returns true if this was the last pin and the slot was freed.
    pub fn release(&mut self, handle: DescriptorRef) -> bool {
        self.descriptors.release(handle)
    }

    /// Get the pin count for a resolved descriptor.
    pub fn descriptor_pins(&self, handle: DescriptorRef) -> Option<u32> {
        self.descriptors.pin_count(handle)
    }

    /// Number of live resolved descriptors.
    pub fn live_descriptors(&self) -> usize {
        self.descriptors.live_count()
    }
}
