//! Collaborators of the memory hierarchy.
//!
//! This module organizes the components the translator and cache call out to:
//! frame allocation, main memory, and event observers, together with the
//! traits that define those seams.

/// Sequential frame allocator used as the default fault handler.
pub mod allocator;

/// Main memory (backing store) implementation.
pub mod memory;

/// Tracing-backed event observer.
pub mod observer;

/// Collaborator trait definitions.
pub mod traits;

pub use allocator::SequentialFrameAllocator;
pub use memory::Memory;
pub use observer::TracingObserver;
pub use traits::{BackingStore, FrameAllocator, NullObserver, Observer};
