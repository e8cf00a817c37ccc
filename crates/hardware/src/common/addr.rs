//! Physical and Virtual Address types.
//!
//! This module defines strong types for physical and virtual addresses to prevent
//! accidental mixing of address spaces. It provides the following:
//! 1. **Type Safety:** Distinguishes between virtual and physical address spaces at compile time.
//! 2. **Range Checks:** Rejects addresses wider than the simulated 18-bit / 20-bit spaces.
//! 3. **Decomposition:** Pure split functions returning the named fields used by the TLB and cache.

use std::fmt;

use super::constants::{
    CACHE_TAG_SHIFT, LINE_BYTES, LINE_OFFSET_BITS, PAGE_OFFSET_MASK, PAGE_SHIFT, PHYS_ADDR_BITS,
    SET_INDEX_BITS, TLB_INDEX_BITS, TLB_INDEX_MASK, VIRT_ADDR_BITS, VPN_MASK,
};

/// A virtual address in the simulated 18-bit address space.
///
/// The wrapper itself accepts any `u64`; [`VirtAddr::is_valid`] reports whether
/// the value fits the space, and the translator rejects it otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u64);

/// A physical address in the simulated 20-bit address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(pub u64);

impl VirtAddr {
    /// Creates a new virtual address from a raw value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }

    /// Returns `true` if no bit at or above bit 18 is set.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 >> VIRT_ADDR_BITS == 0
    }

    /// Extracts the page offset (low 9 bits).
    pub const fn page_offset(&self) -> u64 {
        self.0 & PAGE_OFFSET_MASK
    }
}

impl PhysAddr {
    /// Creates a new physical address from a raw value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }

    /// Returns `true` if no bit at or above bit 20 is set.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 >> PHYS_ADDR_BITS == 0
    }

    /// Builds the physical address of byte `offset` within `frame`.
    pub const fn from_frame(frame: u64, offset: u64) -> Self {
        Self((frame << PAGE_SHIFT) | (offset & PAGE_OFFSET_MASK))
    }

    /// Returns the address rounded down to the enclosing word.
    pub const fn word_aligned(&self) -> Self {
        Self(self.0 & !(LINE_BYTES - 1))
    }
}

impl fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07x}", self.0)
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07x}", self.0)
    }
}

/// Fields of a virtual address as consumed by the translator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VirtFields {
    /// Virtual page number (bits 9..18).
    pub vpn: u64,
    /// Page offset (bits 0..9).
    pub vpo: u64,
    /// TLB tag: the VPN bits above the index.
    pub tlb_tag: u64,
    /// TLB index: the low 4 VPN bits.
    pub tlb_index: usize,
}

impl VirtFields {
    /// Reassembles the VPN from the TLB index and tag.
    pub const fn recombined_vpn(&self) -> u64 {
        (self.tlb_tag << TLB_INDEX_BITS) | self.tlb_index as u64
    }
}

/// Fields of a physical address as consumed by the data cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysFields {
    /// Cache tag (bits 7..20).
    pub tag: u64,
    /// Set index (bits 2..7).
    pub set: usize,
    /// Byte offset within the cached word (bits 0..2).
    pub offset: usize,
}

/// Splits a virtual address into VPN, page offset, TLB tag and TLB index.
///
/// The index and tag partition the VPN exactly: every VPN bit lands in one of
/// them, so distinct VPNs never share an `(index, tag)` pair. Bits above the
/// 18-bit space are ignored here; range checking is the caller's job.
pub const fn split_virtual_address(vaddr: VirtAddr) -> VirtFields {
    let vpn = (vaddr.0 >> PAGE_SHIFT) & VPN_MASK;
    VirtFields {
        vpn,
        vpo: vaddr.0 & PAGE_OFFSET_MASK,
        tlb_tag: vpn >> TLB_INDEX_BITS,
        tlb_index: (vpn & TLB_INDEX_MASK) as usize,
    }
}

/// Splits a physical address into cache tag, set index and byte offset.
pub const fn split_physical_address(paddr: PhysAddr) -> PhysFields {
    PhysFields {
        tag: paddr.0 >> CACHE_TAG_SHIFT,
        set: ((paddr.0 >> LINE_OFFSET_BITS) & ((1 << SET_INDEX_BITS) - 1)) as usize,
        offset: (paddr.0 & ((1 << LINE_OFFSET_BITS) - 1)) as usize,
    }
}
