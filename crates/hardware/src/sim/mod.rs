//! Simulation assembly.
//!
//! Composes the translator, data cache and their collaborators into a single
//! owned memory system.

/// The composed memory system.
pub mod system;

pub use self::system::{Access, MemorySystem};
