//! Hardware units of the memory hierarchy.
//!
//! The translator and the data cache each own their tables and are driven
//! by the composed `MemorySystem`.

/// Execution units (MMU, data cache).
pub mod units;
