//! Collaborator traits for the memory hierarchy.
//!
//! The translator and cache controller own their tables but delegate three
//! concerns outward. This module defines those seams:
//! 1. **Frame allocation:** `FrameAllocator`, consulted on a full translation miss.
//! 2. **Backing store:** `BackingStore`, consulted on a cache miss.
//! 3. **Observation:** `Observer`, notified of every resolution path.
//!
//! All calls are synchronous and complete before the lookup proceeds.

use crate::common::{Event, PhysAddr};

/// Source of physical frames for pages touched for the first time.
pub trait FrameAllocator {
    /// Returns the frame backing virtual page `vpn`.
    ///
    /// Called at most once per VPN between resets, and only when both the TLB
    /// and the page table miss. The returned frame must fit the 20-bit
    /// physical space (below 2048).
    fn allocate_frame(&mut self, vpn: u64) -> u64;

    /// Forgets all allocations. Called when the owning system is reset.
    fn reset(&mut self) {}
}

/// Word-granular main memory behind the data cache.
pub trait BackingStore {
    /// Returns the 4-byte word at `addr`.
    ///
    /// `addr` is always word aligned. Byte 0 of the word is bits 0..8.
    fn read_word(&mut self, addr: PhysAddr) -> u32;
}

/// Receiver for resolution events.
///
/// Purely a side channel: implementations must not influence lookups.
pub trait Observer {
    /// Records one resolution event.
    fn observe(&mut self, event: Event);
}

impl Observer for Vec<Event> {
    fn observe(&mut self, event: Event) {
        self.push(event);
    }
}

impl<T: Observer + ?Sized> Observer for &mut T {
    fn observe(&mut self, event: Event) {
        (**self).observe(event);
    }
}

impl<A: Observer, B: Observer> Observer for (A, B) {
    fn observe(&mut self, event: Event) {
        self.0.observe(event);
        self.1.observe(event);
    }
}

/// Observer that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn observe(&mut self, _event: Event) {}
}
