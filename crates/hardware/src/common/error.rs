//! Lookup error definitions.
//!
//! Only two conditions are errors: an address wider than its space. Misses and
//! page faults are ordinary control flow and always resolve.

use thiserror::Error;

/// Error returned by a translation or cache lookup.
///
/// Both variants are detected before any table is touched, so a failed lookup
/// never leaves partial state behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemError {
    /// The virtual address has bits set above bit 17.
    #[error("invalid virtual address {0:#x}: exceeds the 18-bit virtual address space")]
    InvalidVirtualAddress(u64),

    /// The physical address has bits set above bit 19.
    #[error("invalid physical address {0:#x}: exceeds the 20-bit physical address space")]
    InvalidPhysicalAddress(u64),
}

impl MemError {
    /// Returns the rejected raw address.
    pub const fn addr(&self) -> u64 {
        match self {
            Self::InvalidVirtualAddress(addr) | Self::InvalidPhysicalAddress(addr) => *addr,
        }
    }
}
