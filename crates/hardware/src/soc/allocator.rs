//! Sequential frame allocator.
//!
//! Hands out physical frames in first-touch order starting at a configurable
//! base frame. Every VPN maps to a distinct frame, and asking again for a VPN
//! that already has one returns the same frame.

use crate::common::constants::PAGE_TABLE_ENTRIES;
use crate::soc::traits::FrameAllocator;

/// Frame allocator assigning consecutive frames on first touch.
#[derive(Clone, Debug)]
pub struct SequentialFrameAllocator {
    first_frame: u64,
    next_frame: u64,
    assigned: Vec<Option<u64>>,
}

impl SequentialFrameAllocator {
    /// Creates an allocator whose first frame is `first_frame`.
    ///
    /// The caller guarantees `first_frame + 512` does not exceed the frame
    /// count; `Config::validate` enforces this for configured systems.
    pub fn new(first_frame: u64) -> Self {
        Self {
            first_frame,
            next_frame: first_frame,
            assigned: vec![None; PAGE_TABLE_ENTRIES],
        }
    }

    /// Returns the frame previously assigned to `vpn`, if any.
    pub fn frame_of(&self, vpn: u64) -> Option<u64> {
        self.assigned.get(vpn as usize).copied().flatten()
    }

    /// Number of frames handed out since creation or the last reset.
    pub const fn allocated(&self) -> u64 {
        self.next_frame - self.first_frame
    }
}

impl Default for SequentialFrameAllocator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FrameAllocator for SequentialFrameAllocator {
    fn allocate_frame(&mut self, vpn: u64) -> u64 {
        if let Some(frame) = self.frame_of(vpn) {
            return frame;
        }
        let frame = self.next_frame;
        self.next_frame += 1;
        if let Some(slot) = self.assigned.get_mut(vpn as usize) {
            *slot = Some(frame);
        }
        tracing::trace!(vpn, frame, "frame allocated");
        frame
    }

    fn reset(&mut self) {
        self.next_frame = self.first_frame;
        self.assigned.fill(None);
    }
}
