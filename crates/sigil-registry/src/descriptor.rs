//! Generational arena for pin-counted signal descriptors.

use std::fmt;

use rustc_hash::FxHashMap;
use sigil_core::TypeHash;

use crate::signal::SignalDescriptor;

/// Handle to a resolved signal descriptor.
///
/// This is a safe, copyable reference to a descriptor in the
/// `DescriptorTable`. The generational index prevents use-after-release
/// bugs: a ref held past the descriptor's last unpin reads as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DescriptorRef {
    /// Index into DescriptorTable.slots
    pub index: u32,
    /// Generation for use-after-release detection
    pub generation: u32,
}

impl DescriptorRef {
    /// Create a new descriptor ref.
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Slot storage for resolved descriptors with generational indices.
///
/// Descriptors are stored in a Vec with generation tracking. Each
/// resolution pins its slot; releasing the last pin frees the slot and
/// increments the generation, so stale refs are detected at runtime. A
/// signal resolved by several closures shares one slot.
pub struct DescriptorTable {
    slots: Vec<TableSlot>,
    free_list: Vec<u32>,
    /// Signal hash to live slot index. Holds only occupied slots.
    index: FxHashMap<TypeHash, u32>,
}

struct TableSlot {
    generation: u32,
    value: Option<SignalDescriptor>,
    ref_count: u32,
}

impl DescriptorTable {
    /// Create a new empty descriptor table.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Pin the live slot for a signal hash, if one exists.
    pub fn pin_existing(&mut self, signal: TypeHash) -> Option<DescriptorRef> {
        let index = *self.index.get(&signal)?;
        let slot = &mut self.slots[index as usize];
        slot.ref_count = slot.ref_count.saturating_add(1);
        Some(DescriptorRef::new(index, slot.generation))
    }

    /// Store a freshly resolved descriptor with one pin.
    ///
    /// If the descriptor's signal already has a live slot, that slot is
    /// pinned instead; the table never holds two copies of one signal.
    pub fn insert(&mut self, descriptor: SignalDescriptor) -> DescriptorRef {
        let signal = descriptor.signal_hash();
        if let Some(handle) = self.pin_existing(signal) {
            return handle;
        }

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            let generation = slot.generation;
            slot.value = Some(descriptor);
            slot.ref_count = 1;
            self.index.insert(signal, index);
            DescriptorRef::new(index, generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(TableSlot {
                generation: 0,
                value: Some(descriptor),
                ref_count: 1,
            });
            self.index.insert(signal, index);
            DescriptorRef::new(index, 0)
        }
    }

    /// Read a descriptor.
    ///
    /// Returns None if the ref is stale.
    pub fn get(&self, handle: DescriptorRef) -> Option<&SignalDescriptor> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()
    }

    /// Decrement pin count, free the slot at zero.
    ///
    /// Returns true if the descriptor was freed.
    pub fn release(&mut self, handle: DescriptorRef) -> bool {
        if let Some(slot) = self.slots.get_mut(handle.index as usize)
            && slot.generation == handle.generation
            && slot.value.is_some()
        {
            slot.ref_count = slot.ref_count.saturating_sub(1);
            if slot.ref_count == 0 {
                let freed = slot.value.take();
                slot.generation = slot.generation.wrapping_add(1);
                self.free_list.push(handle.index);
                if let Some(descriptor) = freed {
                    self.index.remove(&descriptor.signal_hash());
                }
                return true;
            }
        }
        false
    }

    /// Get the pin count for a descriptor.
    pub fn pin_count(&self, handle: DescriptorRef) -> Option<u32> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation == handle.generation && slot.value.is_some() {
            Some(slot.ref_count)
        } else {
            None
        }
    }

    /// Number of live descriptors.
    pub fn live_count(&self) -> usize {
        self.index.len()
    }
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DescriptorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorTable")
            .field("slot_count", &self.slots.len())
            .field("free_count", &self.free_list.len())
            .field("live_count", &self.index.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalSpec;
    use sigil_core::TypeDesc;

    fn descriptor(owner_name: &str, signal_name: &str) -> SignalDescriptor {
        let owner = TypeHash::from_name(owner_name);
        let spec = SignalSpec::new(signal_name, vec![TypeDesc::Int32], TypeDesc::Void);
        SignalDescriptor::new(owner, &spec)
    }

    #[test]
    fn insert_then_read() {
        let mut table = DescriptorTable::new();
        let handle = table.insert(descriptor("Button", "clicked"));

        let stored = table.get(handle).unwrap();
        assert_eq!(stored.name, "clicked");
        assert_eq!(table.pin_count(handle), Some(1));
        assert_eq!(table.live_count(), 1);
    }

    #[test]
    fn insert_same_signal_shares_slot() {
        let mut table = DescriptorTable::new();
        let first = table.insert(descriptor("Button", "clicked"));
        let second = table.insert(descriptor("Button", "clicked"));

        assert_eq!(first, second);
        assert_eq!(table.pin_count(first), Some(2));
        assert_eq!(table.live_count(), 1);
    }

    #[test]
    fn pin_existing_increments() {
        let mut table = DescriptorTable::new();
        let handle = table.insert(descriptor("Button", "clicked"));
        let signal = table.get(handle).unwrap().signal_hash();

        let again = table.pin_existing(signal).unwrap();
        assert_eq!(again, handle);
        assert_eq!(table.pin_count(handle), Some(2));

        assert!(table.pin_existing(TypeHash::from_name("absent")).is_none());
    }

    #[test]
    fn release_frees_at_zero() {
        let mut table = DescriptorTable::new();
        let handle = table.insert(descriptor("Button", "clicked"));
        table.pin_existing(table.get(handle).unwrap().signal_hash());

        assert!(!table.release(handle));
        assert_eq!(table.pin_count(handle), Some(1));

        assert!(table.release(handle));
        assert!(table.get(handle).is_none());
        assert_eq!(table.live_count(), 0);

        // Further releases on a stale ref are no-ops
        assert!(!table.release(handle));
    }

    #[test]
    fn freed_slot_is_reused_with_new_generation() {
        let mut table = DescriptorTable::new();
        let first = table.insert(descriptor("Button", "clicked"));
        table.release(first);

        let second = table.insert(descriptor("Window", "closed"));
        assert_eq!(second.index, first.index);
        assert_ne!(second.generation, first.generation);

        // The stale ref still reads as None
        assert!(table.get(first).is_none());
        assert_eq!(table.get(second).unwrap().name, "closed");
    }

    #[test]
    fn released_signal_can_be_resolved_again() {
        let mut table = DescriptorTable::new();
        let first = table.insert(descriptor("Button", "clicked"));
        let signal = table.get(first).unwrap().signal_hash();
        table.release(first);
        assert!(table.pin_existing(signal).is_none());

        let second = table.insert(descriptor("Button", "clicked"));
        assert_eq!(table.get(second).unwrap().signal_hash(), signal);
        assert_eq!(table.pin_count(second), Some(1));
    }

    #[test]
    fn distinct_signals_get_distinct_slots() {
        let mut table = DescriptorTable::new();
        let clicked = table.insert(descriptor("Button", "clicked"));
        let closed = table.insert(descriptor("Window", "closed"));

        assert_ne!(clicked, closed);
        assert_eq!(table.live_count(), 2);
        assert_eq!(table.get(clicked).unwrap().name, "clicked");
        assert_eq!(table.get(closed).unwrap().name, "closed");
    }
}
