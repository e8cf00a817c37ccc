//! Set-Associative Data Cache.
//!
//! This module implements the 2-way set-associative data cache in front of
//! main memory. Physical addresses are split into a 2-bit byte offset, a 5-bit
//! set index and a 13-bit tag. Each line holds one word. Misses fetch the
//! aligned word from the backing store and overwrite a victim line; nothing is
//! ever written back.

/// Two-way set and line types with recency-bit replacement.
pub mod set;

use crate::common::constants::CACHE_SETS;
use crate::common::{Event, EventKind, MemError, PhysAddr, split_physical_address};
use crate::soc::traits::{BackingStore, Observer};

pub use self::set::{CacheLine, CacheSet};

/// Resolves physical addresses to bytes through the data cache.
#[derive(Clone, Debug)]
pub struct CacheController {
    sets: [CacheSet; CACHE_SETS],
}

impl CacheController {
    /// Creates a cache with every line invalid.
    pub fn new() -> Self {
        Self {
            sets: [CacheSet::default(); CACHE_SETS],
        }
    }

    /// Reads the byte at a physical address.
    ///
    /// On a hit the byte is served from the cached word and no line changes,
    /// recency bits included. On a miss the aligned word is read from `memory`
    /// and installed in the set's victim way.
    ///
    /// # Arguments
    ///
    /// * `paddr` - Physical address of the byte
    /// * `memory` - Backing store consulted on a miss
    /// * `observer` - Receives exactly one event describing the resolution path
    ///
    /// # Errors
    ///
    /// Returns [`MemError::InvalidPhysicalAddress`] if `paddr` has bits above
    /// bit 19. No line is modified in that case.
    pub fn read(
        &mut self,
        paddr: PhysAddr,
        memory: &mut dyn BackingStore,
        observer: &mut dyn Observer,
    ) -> Result<u8, MemError> {
        if !paddr.is_valid() {
            observer.observe(Event::new(EventKind::IllegalPhysicalAddress, paddr.val()));
            return Err(MemError::InvalidPhysicalAddress(paddr.val()));
        }

        let fields = split_physical_address(paddr);
        tracing::trace!(
            paddr = paddr.val(),
            tag = fields.tag,
            set = fields.set,
            offset = fields.offset,
            "cache read"
        );
        let set = &mut self.sets[fields.set];

        if let Some(way) = set.find(fields.tag) {
            let byte = set.ways[way].byte(fields.offset);
            observer.observe(Event::new(EventKind::DataFromCache, byte as u64));
            return Ok(byte);
        }

        let word = memory.read_word(paddr.word_aligned());
        let way = set.victim();
        set.fill(way, fields.tag, word);
        let byte = set.ways[way].byte(fields.offset);
        observer.observe(Event::new(EventKind::DataFromMemory, byte as u64));
        Ok(byte)
    }

    /// Returns a copy of the set at `index`.
    pub fn set(&self, index: usize) -> Option<CacheSet> {
        self.sets.get(index).copied()
    }

    /// Returns a copy of one line.
    pub fn line(&self, set: usize, way: usize) -> Option<CacheLine> {
        self.sets.get(set).and_then(|s| s.ways.get(way)).copied()
    }

    /// Number of valid lines across all sets.
    pub fn occupancy(&self) -> usize {
        self.sets
            .iter()
            .flat_map(|s| s.ways.iter())
            .filter(|l| l.valid)
            .count()
    }

    /// Invalidates and zeroes every line.
    pub fn reset(&mut self) {
        self.sets.fill(CacheSet::default());
    }
}

impl Default for CacheController {
    fn default() -> Self {
        Self::new()
    }
}
