//! Memory Management Unit (MMU).
//!
//! This module implements virtual-to-physical address translation for the
//! 18-bit virtual space. A lookup consults, in order:
//! 1. **TLB:** a direct-mapped cache of recent mappings.
//! 2. **Page table:** one entry per virtual page, filled on first touch.
//! 3. **Fault handler:** the external frame allocator, for pages never seen.
//!
//! Every miss refills the TLB; only a full miss writes the page table.

/// Single-level page table with one entry per virtual page.
pub mod page_table;

/// Translation Lookaside Buffer (TLB) for caching virtual-to-physical address translations.
pub mod tlb;

use crate::common::{Event, EventKind, MemError, PhysAddr, VirtAddr, split_virtual_address};
use crate::soc::traits::{FrameAllocator, Observer};

use self::page_table::PageTable;
use self::tlb::Tlb;

/// Translates virtual addresses through the TLB and page table.
///
/// Owns both tables; the frame allocator and observer are borrowed per call.
#[derive(Clone, Debug, Default)]
pub struct AddressTranslator {
    /// Direct-mapped TLB.
    pub tlb: Tlb,
    /// Page table covering every virtual page.
    pub page_table: PageTable,
}

impl AddressTranslator {
    /// Creates a translator with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates a virtual address to a physical address.
    ///
    /// # Arguments
    ///
    /// * `vaddr` - Virtual address to translate
    /// * `frames` - Allocator consulted when both TLB and page table miss
    /// * `observer` - Receives exactly one event describing the resolution path
    ///
    /// # Errors
    ///
    /// Returns [`MemError::InvalidVirtualAddress`] if `vaddr` has bits above
    /// bit 17. No table is modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use memsim_core::common::VirtAddr;
    /// use memsim_core::core::units::mmu::AddressTranslator;
    /// use memsim_core::soc::allocator::SequentialFrameAllocator;
    /// use memsim_core::soc::traits::NullObserver;
    ///
    /// let mut mmu = AddressTranslator::new();
    /// let mut frames = SequentialFrameAllocator::new(7);
    ///
    /// let paddr = mmu
    ///     .translate(VirtAddr::new(0x0123), &mut frames, &mut NullObserver)
    ///     .unwrap();
    /// assert_eq!(paddr.val(), (7 << 9) | 0x123);
    /// ```
    pub fn translate(
        &mut self,
        vaddr: VirtAddr,
        frames: &mut dyn FrameAllocator,
        observer: &mut dyn Observer,
    ) -> Result<PhysAddr, MemError> {
        if !vaddr.is_valid() {
            observer.observe(Event::new(EventKind::IllegalVirtualAddress, vaddr.val()));
            return Err(MemError::InvalidVirtualAddress(vaddr.val()));
        }

        let fields = split_virtual_address(vaddr);
        tracing::trace!(
            vaddr = vaddr.val(),
            vpn = fields.vpn,
            vpo = fields.vpo,
            tlb_tag = fields.tlb_tag,
            tlb_index = fields.tlb_index,
            "translate"
        );

        let (frame, kind) = if let Some(frame) = self.tlb.lookup(fields.tlb_index, fields.tlb_tag)
        {
            (frame, EventKind::AddressFromTlb)
        } else if let Some(frame) = self.page_table.lookup(fields.vpn) {
            self.tlb.insert(fields.tlb_index, fields.tlb_tag, frame);
            (frame, EventKind::AddressFromPageTable)
        } else {
            let frame = frames.allocate_frame(fields.vpn);
            self.page_table.map(fields.vpn, frame);
            self.tlb.insert(fields.tlb_index, fields.tlb_tag, frame);
            (frame, EventKind::AddressFromPageFaultHandler)
        };

        let paddr = PhysAddr::from_frame(frame, fields.vpo);
        observer.observe(Event::new(kind, paddr.val()));
        Ok(paddr)
    }

    /// Invalidates every TLB and page table entry.
    pub fn reset(&mut self) {
        self.tlb.flush();
        self.page_table.clear();
    }
}
