//! Common utilities and types used throughout the memory hierarchy simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Address Types:** Strong types for virtual and physical addresses and their split functions.
//! 2. **Constants:** The fixed geometry of the TLB, page table, and cache.
//! 3. **Events:** Resolution events reported to observers.
//! 4. **Error Handling:** The two lookup error kinds.

/// Address type definitions (physical and virtual addresses).
pub mod addr;

/// Geometry constants for the address spaces and tables.
pub mod constants;

/// Resolution event definitions.
pub mod event;

/// Lookup error types.
pub mod error;

pub use addr::{
    PhysAddr, PhysFields, VirtAddr, VirtFields, split_physical_address, split_virtual_address,
};
pub use error::MemError;
pub use event::{Event, EventKind};
