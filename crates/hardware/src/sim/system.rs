//! Memory system: translator and data cache composed with their collaborators.
//!
//! Owns all three tables plus the frame allocator, backing store and
//! statistics, so independent simulations never share state.

use crate::common::{MemError, PhysAddr, VirtAddr};
use crate::config::Config;
use crate::core::units::cache::CacheController;
use crate::core::units::mmu::AddressTranslator;
use crate::soc::allocator::SequentialFrameAllocator;
use crate::soc::memory::Memory;
use crate::soc::observer::TracingObserver;
use crate::soc::traits::{BackingStore, FrameAllocator};
use crate::stats::SimStats;

/// Result of a full load: the translated address and the byte found there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Access {
    /// Address supplied by the caller.
    pub vaddr: VirtAddr,
    /// Address produced by translation.
    pub paddr: PhysAddr,
    /// Byte read through the data cache.
    pub byte: u8,
}

/// A complete translation and caching path.
#[derive(Debug)]
pub struct MemorySystem<A, B> {
    /// Virtual-to-physical translator (TLB and page table).
    pub translator: AddressTranslator,
    /// Data cache.
    pub cache: CacheController,
    /// Fault handler for pages seen for the first time.
    pub frames: A,
    /// Main memory behind the cache.
    pub memory: B,
    /// Resolution counters.
    pub stats: SimStats,
}

impl MemorySystem<SequentialFrameAllocator, Memory> {
    /// Builds a system with a sequential allocator and a patterned memory.
    ///
    /// The configuration is assumed validated (`Config::from_json` and
    /// `Config::from_file` validate before returning).
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SequentialFrameAllocator::new(config.memory.first_frame),
            Memory::with_pattern(config.memory.size_bytes, config.memory.fill),
        )
    }
}

impl<A: FrameAllocator, B: BackingStore> MemorySystem<A, B> {
    /// Creates a system with empty tables around the given collaborators.
    pub fn new(frames: A, memory: B) -> Self {
        Self {
            translator: AddressTranslator::new(),
            cache: CacheController::new(),
            frames,
            memory,
            stats: SimStats::default(),
        }
    }

    /// Translates a virtual address.
    ///
    /// # Errors
    ///
    /// Returns [`MemError::InvalidVirtualAddress`] for addresses above the 18-bit space.
    pub fn translate(&mut self, vaddr: VirtAddr) -> Result<PhysAddr, MemError> {
        let mut observer = (&mut self.stats, TracingObserver);
        self.translator
            .translate(vaddr, &mut self.frames, &mut observer)
    }

    /// Reads a byte by physical address.
    ///
    /// # Errors
    ///
    /// Returns [`MemError::InvalidPhysicalAddress`] for addresses above the 20-bit space.
    pub fn read(&mut self, paddr: PhysAddr) -> Result<u8, MemError> {
        let mut observer = (&mut self.stats, TracingObserver);
        self.cache.read(paddr, &mut self.memory, &mut observer)
    }

    /// Translates `vaddr` and reads the byte it maps to.
    ///
    /// # Errors
    ///
    /// Propagates the error of whichever step rejects its address.
    pub fn load(&mut self, vaddr: VirtAddr) -> Result<Access, MemError> {
        let paddr = self.translate(vaddr)?;
        let byte = self.read(paddr)?;
        Ok(Access { vaddr, paddr, byte })
    }

    /// Returns every table to its initial empty state.
    ///
    /// Also forgets the allocator's assignments and clears statistics. Backing
    /// store contents are kept.
    pub fn reset(&mut self) {
        self.translator.reset();
        self.cache.reset();
        self.frames.reset();
        self.stats.clear();
        tracing::debug!("memory system reset");
    }
}
