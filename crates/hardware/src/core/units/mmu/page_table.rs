//! Single-level page table.
//!
//! One entry per virtual page. An entry is filled once, on the first fault
//! for its page, and stays valid until the table is reset.

use crate::common::constants::PAGE_TABLE_ENTRIES;

/// A page table entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    /// Set once the page has been faulted in.
    pub valid: bool,
    /// Physical frame number backing the page.
    pub frame: u64,
}

/// Page table covering all 512 virtual pages.
#[derive(Clone, Debug)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
}

impl PageTable {
    /// Creates a page table with every entry invalid.
    pub fn new() -> Self {
        Self {
            entries: vec![PageTableEntry::default(); PAGE_TABLE_ENTRIES],
        }
    }

    /// Returns the frame for `vpn` if its entry is valid.
    pub fn lookup(&self, vpn: u64) -> Option<u64> {
        self.entries
            .get(vpn as usize)
            .filter(|pte| pte.valid)
            .map(|pte| pte.frame)
    }

    /// Marks `vpn` valid and backed by `frame`.
    pub fn map(&mut self, vpn: u64, frame: u64) {
        if let Some(pte) = self.entries.get_mut(vpn as usize) {
            debug_assert!(!pte.valid, "page table entry {vpn} mapped twice");
            *pte = PageTableEntry { valid: true, frame };
        }
    }

    /// Returns a copy of the entry for `vpn`.
    pub fn entry(&self, vpn: u64) -> Option<PageTableEntry> {
        self.entries.get(vpn as usize).copied()
    }

    /// Number of mapped pages.
    pub fn mapped(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }

    /// Invalidates and zeroes every entry.
    pub fn clear(&mut self) {
        self.entries.fill(PageTableEntry::default());
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}
