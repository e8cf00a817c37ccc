//! Global Geometry Constants.
//!
//! This module fixes the shape of the simulated memory hierarchy. It includes:
//! 1. **Virtual Space:** 18-bit addresses split into a 9-bit VPN and a 9-bit page offset.
//! 2. **TLB:** 16 direct-mapped entries indexed by the low 4 VPN bits.
//! 3. **Physical Space:** 20-bit addresses, 11-bit frame numbers.
//! 4. **Cache:** 32 sets of 2 ways, one 4-byte word per line.

/// Width of a virtual address in bits.
pub const VIRT_ADDR_BITS: u32 = 18;

/// Width of a physical address in bits.
pub const PHYS_ADDR_BITS: u32 = 20;

/// Number of bits to shift to convert between bytes and pages.
pub const PAGE_SHIFT: u32 = 9;

/// Page size in bytes (512 B).
pub const PAGE_SIZE: u64 = 1 << PAGE_SHIFT;

/// Mask for extracting the page offset from an address.
pub const PAGE_OFFSET_MASK: u64 = PAGE_SIZE - 1;

/// Width of the virtual page number in bits.
pub const VPN_BITS: u32 = VIRT_ADDR_BITS - PAGE_SHIFT;

/// Mask for extracting the virtual page number after shifting out the offset.
pub const VPN_MASK: u64 = (1 << VPN_BITS) - 1;

/// Number of page table entries (one per virtual page).
pub const PAGE_TABLE_ENTRIES: usize = 1 << VPN_BITS;

/// Number of VPN bits used to index the TLB.
pub const TLB_INDEX_BITS: u32 = 4;

/// Number of TLB entries.
pub const TLB_ENTRIES: usize = 1 << TLB_INDEX_BITS;

/// Mask for extracting the TLB index from a VPN.
pub const TLB_INDEX_MASK: u64 = (1 << TLB_INDEX_BITS) - 1;

/// Width of the TLB tag in bits; index and tag together cover the whole VPN.
pub const TLB_TAG_BITS: u32 = VPN_BITS - TLB_INDEX_BITS;

/// Number of addressable physical frames.
pub const FRAME_COUNT: u64 = 1 << (PHYS_ADDR_BITS - PAGE_SHIFT);

/// Size of the physical address space in bytes (1 MiB).
pub const PHYS_MEMORY_SIZE: usize = 1 << PHYS_ADDR_BITS;

/// Number of bytes held by one cache line (a single word).
pub const LINE_BYTES: u64 = 4;

/// Number of bits selecting the byte within a cache line.
pub const LINE_OFFSET_BITS: u32 = 2;

/// Number of bits selecting the cache set.
pub const SET_INDEX_BITS: u32 = 5;

/// Number of cache sets.
pub const CACHE_SETS: usize = 1 << SET_INDEX_BITS;

/// Associativity of the data cache.
pub const CACHE_WAYS: usize = 2;

/// Bit position of the cache tag inside a physical address.
pub const CACHE_TAG_SHIFT: u32 = LINE_OFFSET_BITS + SET_INDEX_BITS;
