//! Two-way cache set with a single recency bit per way.
//!
//! The recency bit marks which way was filled more recently (1 = newer,
//! 0 = older). It is only written on fills, never on hits, so it tracks
//! fill order rather than use order.

use crate::common::constants::CACHE_WAYS;

/// Cache line holding one 4-byte word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Line holds data for `tag`.
    pub valid: bool,
    /// Physical address bits above the set index.
    pub tag: u64,
    /// Cached word, byte 0 in bits 0..8.
    pub data: u32,
    /// `true` if this way was filled after the other way.
    pub recent: bool,
}

impl CacheLine {
    /// Returns byte `offset` (0..4) of the cached word.
    #[inline]
    pub const fn byte(&self, offset: usize) -> u8 {
        (self.data >> (8 * offset)) as u8
    }
}

/// One set of the data cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheSet {
    /// The ways of this set, way 0 first.
    pub ways: [CacheLine; CACHE_WAYS],
}

impl CacheSet {
    /// Returns the way holding a valid line for `tag`.
    ///
    /// A line whose tag matches but which is invalid is not a hit.
    pub fn find(&self, tag: u64) -> Option<usize> {
        self.ways.iter().position(|line| line.valid && line.tag == tag)
    }

    /// Selects the way to fill on a miss.
    ///
    /// An invalid way is preferred (way 0 first); otherwise the older way is
    /// chosen, falling back to way 0 if both carry the same recency.
    pub fn victim(&self) -> usize {
        let [way0, way1] = &self.ways;
        match (way0.valid, way1.valid) {
            (false, _) => 0,
            (true, false) => 1,
            // Way 1 only when it is strictly older than way 0.
            (true, true) => usize::from(way0.recent && !way1.recent),
        }
    }

    /// Installs `data` for `tag` in `way` and makes it the newer way.
    ///
    /// The other way becomes older even when it is invalid.
    pub fn fill(&mut self, way: usize, tag: u64, data: u32) {
        for (i, line) in self.ways.iter_mut().enumerate() {
            if i == way {
                *line = CacheLine {
                    valid: true,
                    tag,
                    data,
                    recent: true,
                };
            } else {
                line.recent = false;
            }
        }
    }
}
