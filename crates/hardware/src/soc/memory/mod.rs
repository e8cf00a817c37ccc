//! Physical System Memory.
//!
//! This module implements the backing store behind the data cache. It provides:
//! 1. **Storage:** A flat byte buffer covering the physical address space.
//! 2. **Initialisation:** Zero fill or a deterministic address-derived pattern.
//! 3. **Access:** Little-endian word reads for cache fills and bulk loads for setup.

use crate::common::PhysAddr;
use crate::common::constants::LINE_BYTES;
use crate::config::FillPattern;
use crate::soc::traits::BackingStore;

/// Byte-addressable main memory starting at physical address 0.
#[derive(Clone, Debug)]
pub struct Memory {
    bytes: Vec<u8>,
    word_reads: u64,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
            word_reads: 0,
        }
    }

    /// Creates a memory of `size` bytes initialised with `pattern`.
    pub fn with_pattern(size: usize, pattern: FillPattern) -> Self {
        let mut mem = Self::new(size);
        if pattern == FillPattern::AddressHash {
            for (addr, byte) in mem.bytes.iter_mut().enumerate() {
                *byte = address_hash(addr as u64);
            }
        }
        mem
    }

    /// Returns the size in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the memory holds no bytes.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copies `data` into memory at `offset`, truncating at the end of memory.
    pub fn load(&mut self, offset: usize, data: &[u8]) {
        if offset >= self.bytes.len() {
            return;
        }
        let end = (offset + data.len()).min(self.bytes.len());
        self.bytes[offset..end].copy_from_slice(&data[..end - offset]);
    }

    /// Reads one byte; addresses past the end read as zero.
    pub fn read_u8(&self, addr: u64) -> u8 {
        usize::try_from(addr)
            .ok()
            .and_then(|a| self.bytes.get(a))
            .copied()
            .unwrap_or(0)
    }

    /// Number of word reads served since creation.
    pub const fn word_reads(&self) -> u64 {
        self.word_reads
    }
}

impl BackingStore for Memory {
    fn read_word(&mut self, addr: PhysAddr) -> u32 {
        self.word_reads += 1;
        let base = addr.word_aligned().val();
        let mut word = [0u8; LINE_BYTES as usize];
        for (i, byte) in word.iter_mut().enumerate() {
            *byte = self.read_u8(base + i as u64);
        }
        u32::from_le_bytes(word)
    }
}

/// Deterministic byte derived from an address, used by `FillPattern::AddressHash`.
pub const fn address_hash(addr: u64) -> u8 {
    (addr ^ (addr >> 8) ^ (addr >> 16)) as u8
}
