//! Resolution Events.
//!
//! Every lookup reports which authority resolved it. These events are used for:
//! 1. **Logging:** `TracingObserver` forwards them to `tracing`.
//! 2. **Statistics Tracking:** `SimStats` counts hits and misses per level.
//! 3. **Testing:** A `Vec<Event>` records them for assertions.
//!
//! Events are a side channel only; nothing in the lookup path reads them back.

use std::fmt;

/// Which path resolved a lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Translation satisfied by a valid, tag-matching TLB entry.
    AddressFromTlb,

    /// TLB missed; translation satisfied by a valid page table entry.
    AddressFromPageTable,

    /// TLB and page table both missed; a frame was allocated.
    AddressFromPageFaultHandler,

    /// Byte served by a valid, tag-matching cache line.
    DataFromCache,

    /// Cache missed; byte served from a word fetched from backing store.
    DataFromMemory,

    /// Virtual address rejected for exceeding the 18-bit space.
    IllegalVirtualAddress,

    /// Physical address rejected for exceeding the 20-bit space.
    IllegalPhysicalAddress,
}

impl EventKind {
    /// Returns the stable log label for this kind.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AddressFromTlb => "address_from_tlb",
            Self::AddressFromPageTable => "address_from_pagetable",
            Self::AddressFromPageFaultHandler => "address_from_page_fault_handler",
            Self::DataFromCache => "data_from_cache",
            Self::DataFromMemory => "data_from_memory",
            Self::IllegalVirtualAddress => "illegal_virtual",
            Self::IllegalPhysicalAddress => "illegal_physical",
        }
    }

    /// Returns `true` for the translation kinds, whose value is a physical address.
    pub const fn is_translation(&self) -> bool {
        matches!(
            self,
            Self::AddressFromTlb
                | Self::AddressFromPageTable
                | Self::AddressFromPageFaultHandler
                | Self::IllegalVirtualAddress
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single observation: what resolved the lookup and the resolved value.
///
/// For translation kinds `value` is the physical address; for data kinds it is
/// the byte; for the illegal kinds it is the rejected address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    /// Resolution path.
    pub kind: EventKind,
    /// Resolved address, byte, or rejected address.
    pub value: u64,
}

impl Event {
    /// Creates an event.
    pub const fn new(kind: EventKind, value: u64) -> Self {
        Self { kind, value }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:#x}", self.kind, self.value)
    }
}
