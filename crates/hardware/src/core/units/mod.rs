//! Hardware units.
//!
//! This module contains the memory management unit (TLB and page table) and
//! the set-associative data cache.

/// Two-way set-associative data cache.
pub mod cache;

/// Memory Management Unit with TLB and page table.
pub mod mmu;
