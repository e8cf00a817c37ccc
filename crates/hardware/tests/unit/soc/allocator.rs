//! Sequential Frame Allocator Tests.

use memsim_core::soc::allocator::SequentialFrameAllocator;
use memsim_core::soc::traits::FrameAllocator;

#[test]
fn frames_follow_first_touch_order() {
    let mut frames = SequentialFrameAllocator::new(10);
    assert_eq!(frames.allocate_frame(300), 10);
    assert_eq!(frames.allocate_frame(2), 11);
    assert_eq!(frames.allocate_frame(511), 12);
    assert_eq!(frames.allocated(), 3);
}

#[test]
fn repeated_vpn_keeps_its_frame() {
    let mut frames = SequentialFrameAllocator::default();
    let first = frames.allocate_frame(7);
    assert_eq!(frames.allocate_frame(7), first);
    assert_eq!(frames.allocated(), 1);
    assert_eq!(frames.frame_of(7), Some(first));
}

#[test]
fn reset_restarts_from_first_frame() {
    let mut frames = SequentialFrameAllocator::new(5);
    let _ = frames.allocate_frame(1);
    let _ = frames.allocate_frame(2);
    frames.reset();
    assert_eq!(frames.allocated(), 0);
    assert_eq!(frames.frame_of(1), None);
    assert_eq!(frames.allocate_frame(2), 5);
}

#[test]
fn full_space_stays_below_frame_limit() {
    let mut frames = SequentialFrameAllocator::new(2048 - 512);
    let last = (0..512).map(|vpn| frames.allocate_frame(vpn)).max();
    assert_eq!(last, Some(2047));
}
