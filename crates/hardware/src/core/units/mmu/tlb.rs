//! Translation Lookaside Buffer (TLB).
//!
//! A 16-entry direct-mapped cache of VPN-to-frame mappings. The entry is
//! selected by the low 4 VPN bits and confirmed by the remaining 5 VPN bits
//! stored as its tag. A fill always overwrites the indexed entry.

use crate::common::constants::TLB_ENTRIES;

/// A single entry in the TLB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TlbEntry {
    /// Entry validity flag.
    pub valid: bool,
    /// High VPN bits not covered by the index.
    pub tag: u64,
    /// Physical frame number (Data).
    pub frame: u64,
}

/// Translation Lookaside Buffer structure.
#[derive(Clone, Debug)]
pub struct Tlb {
    entries: [TlbEntry; TLB_ENTRIES],
}

impl Tlb {
    /// Creates a TLB with every entry invalid.
    pub fn new() -> Self {
        Self {
            entries: [TlbEntry::default(); TLB_ENTRIES],
        }
    }

    /// Looks up a mapping.
    ///
    /// # Arguments
    ///
    /// * `index` - TLB index (low VPN bits).
    /// * `tag` - TLB tag (high VPN bits).
    ///
    /// # Returns
    ///
    /// `Some(frame)` if the indexed entry is valid and its tag matches, otherwise `None`.
    #[inline]
    pub fn lookup(&self, index: usize, tag: u64) -> Option<u64> {
        self.entries
            .get(index)
            .filter(|entry| entry.valid && entry.tag == tag)
            .map(|entry| entry.frame)
    }

    /// Installs a mapping, replacing whatever occupied `index`.
    pub fn insert(&mut self, index: usize, tag: u64, frame: u64) {
        if let Some(entry) = self.entries.get_mut(index) {
            *entry = TlbEntry {
                valid: true,
                tag,
                frame,
            };
        }
    }

    /// Returns a copy of the entry at `index`.
    pub fn entry(&self, index: usize) -> Option<TlbEntry> {
        self.entries.get(index).copied()
    }

    /// Number of valid entries.
    pub fn occupancy(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }

    /// Invalidates and zeroes every entry.
    pub fn flush(&mut self) {
        self.entries.fill(TlbEntry::default());
    }
}

impl Default for Tlb {
    fn default() -> Self {
        Self::new()
    }
}
