//! Memory hierarchy simulator library.
//!
//! This crate simulates the address-translation and data-caching path of a small memory system:
//! 1. **Translation:** 18-bit virtual addresses resolved through a 16-entry direct-mapped TLB,
//!    a 512-entry page table, and a frame-allocating fault handler.
//! 2. **Caching:** 20-bit physical addresses resolved through a 32-set, 2-way data cache with
//!    recency-bit replacement in front of main memory.
//! 3. **Collaborators:** Frame allocation, backing store, and event observation traits with
//!    default implementations.
//! 4. **Simulation:** Configuration, the composed memory system, and statistics collection.

/// Common types and constants (addresses, split functions, events, errors).
pub mod common;
/// Simulator configuration (defaults, JSON loading, validation).
pub mod config;
/// Hardware units (MMU and data cache).
pub mod core;
/// Composed memory system.
pub mod sim;
/// Collaborators (traits, frame allocator, memory, observers).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Top-level memory system; construct with `MemorySystem::new` or `MemorySystem::from_config`.
pub use crate::sim::MemorySystem;
