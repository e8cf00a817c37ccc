//! Address Translator Tests.
//!
//! Verifies the three resolution paths (TLB, page table, fault handler), the
//! side effects of each, range rejection, and first-touch behaviour over the
//! whole VPN space.

use memsim_core::common::{Event, EventKind, MemError, VirtAddr};
use memsim_core::core::units::mmu::AddressTranslator;
use memsim_core::core::units::mmu::page_table::PageTableEntry;
use memsim_core::core::units::mmu::tlb::TlbEntry;
use memsim_core::soc::allocator::SequentialFrameAllocator;
use memsim_core::soc::traits::NullObserver;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::harness::TestContext;
use crate::common::mocks::allocator::{MockFrames, frames_once_each};

const F: u64 = 0x2A;

// ══════════════════════════════════════════════════════════
// 1. End-to-End Example
// ══════════════════════════════════════════════════════════

#[test]
fn first_translate_of_zero_faults_and_fills_both_tables() {
    let mut mmu = AddressTranslator::new();
    let mut frames = frames_once_each(&[0], F);
    let mut events: Vec<Event> = Vec::new();

    let pa = mmu
        .translate(VirtAddr::new(0), &mut frames, &mut events)
        .unwrap();

    assert_eq!(pa.val(), F << 9);
    assert_eq!(
        mmu.page_table.entry(0),
        Some(PageTableEntry {
            valid: true,
            frame: F
        })
    );
    assert_eq!(
        mmu.tlb.entry(0),
        Some(TlbEntry {
            valid: true,
            tag: 0,
            frame: F
        })
    );
    assert_eq!(
        events,
        vec![Event::new(EventKind::AddressFromPageFaultHandler, F << 9)]
    );
}

#[test]
fn second_translate_of_zero_is_pure_tlb_hit() {
    let mut mmu = AddressTranslator::new();
    // Exactly one allocation: a second call would fail the mock.
    let mut frames = frames_once_each(&[0], F);
    let mut events: Vec<Event> = Vec::new();

    let first = mmu
        .translate(VirtAddr::new(0), &mut frames, &mut events)
        .unwrap();
    let pt_before = mmu.page_table.clone();
    let tlb_before = mmu.tlb.entry(0);

    let second = mmu
        .translate(VirtAddr::new(0), &mut frames, &mut events)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(mmu.tlb.entry(0), tlb_before);
    assert_eq!(mmu.page_table.mapped(), pt_before.mapped());
    assert_eq!(mmu.page_table.entry(0), pt_before.entry(0));
    assert_eq!(
        events.last(),
        Some(&Event::new(EventKind::AddressFromTlb, F << 9))
    );
}

// ══════════════════════════════════════════════════════════
// 2. Page Table Path
// ══════════════════════════════════════════════════════════

/// Two VPNs sharing TLB index 0 evict each other; the page table still
/// resolves the evicted one without a new allocation.
#[test]
fn tlb_conflict_falls_back_to_page_table() {
    let mut ctx = TestContext::new();
    let vpn_a = 0x000;
    let vpn_b = 0x010; // same low 4 bits, differs in bit 4

    let pa_a = ctx.translate(vpn_a << 9).unwrap();
    let pa_b = ctx.translate(vpn_b << 9).unwrap();
    assert_ne!(pa_a, pa_b);
    assert_eq!(ctx.last_kind(), Some(EventKind::AddressFromPageFaultHandler));

    let again = ctx.translate((vpn_a << 9) | 0x1F).unwrap();
    assert_eq!(ctx.last_kind(), Some(EventKind::AddressFromPageTable));
    assert_eq!(again.val(), pa_a.val() | 0x1F);
    assert_eq!(ctx.frames.allocated(), 2);

    // The page table fill reinstalled vpn_a in the TLB.
    let _ = ctx.translate(vpn_a << 9).unwrap();
    assert_eq!(ctx.last_kind(), Some(EventKind::AddressFromTlb));
}

#[test]
fn page_table_hit_does_not_call_allocator() {
    let mut mmu = AddressTranslator::new();
    mmu.page_table.map(3, 0x55);

    let mut frames = MockFrames::new();
    let _ = frames.expect_allocate_frame().times(0);
    let mut events: Vec<Event> = Vec::new();

    let pa = mmu
        .translate(VirtAddr::new((3 << 9) | 7), &mut frames, &mut events)
        .unwrap();

    assert_eq!(pa.val(), (0x55 << 9) | 7);
    assert_eq!(mmu.tlb.lookup(3, 0), Some(0x55));
    assert_eq!(events[0].kind, EventKind::AddressFromPageTable);
}

// ══════════════════════════════════════════════════════════
// 3. Range Rejection
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(1 << 18)]
#[case((1 << 18) | 0x1FF)]
#[case(1 << 40)]
#[case(u64::MAX)]
fn rejects_addresses_beyond_18_bits(#[case] raw: u64) {
    let mut mmu = AddressTranslator::new();
    let mut frames = MockFrames::new();
    let _ = frames.expect_allocate_frame().times(0);
    let mut events: Vec<Event> = Vec::new();

    let err = mmu
        .translate(VirtAddr::new(raw), &mut frames, &mut events)
        .unwrap_err();

    assert_eq!(err, MemError::InvalidVirtualAddress(raw));
    assert_eq!(mmu.tlb.occupancy(), 0);
    assert_eq!(mmu.page_table.mapped(), 0);
    assert_eq!(
        events,
        vec![Event::new(EventKind::IllegalVirtualAddress, raw)]
    );
}

#[test]
fn accepts_highest_virtual_address() {
    let mut ctx = TestContext::new();
    let pa = ctx.translate((1 << 18) - 1).unwrap();
    assert_eq!(pa.val() & 0x1FF, 0x1FF);
}

// ══════════════════════════════════════════════════════════
// 4. Full VPN Sweep
// ══════════════════════════════════════════════════════════

/// Each VPN faults exactly once; translating all pages again in the same
/// order only ever hits the TLB or page table and returns identical addresses.
#[test]
fn every_vpn_faults_exactly_once() {
    let vpns: Vec<u64> = (0..512).collect();
    let mut frames = frames_once_each(&vpns, 1000);
    let mut mmu = AddressTranslator::new();
    let mut events: Vec<Event> = Vec::new();

    let first: Vec<u64> = vpns
        .iter()
        .map(|&vpn| {
            mmu.translate(VirtAddr::new((vpn << 9) | 0x55), &mut frames, &mut events)
                .unwrap()
                .val()
        })
        .collect();
    let faults = events
        .iter()
        .filter(|e| e.kind == EventKind::AddressFromPageFaultHandler)
        .count();
    assert_eq!(faults, 512);
    assert_eq!(mmu.page_table.mapped(), 512);

    events.clear();
    for (&vpn, &pa) in vpns.iter().zip(&first) {
        let again = mmu
            .translate(VirtAddr::new((vpn << 9) | 0x55), &mut frames, &mut events)
            .unwrap();
        assert_eq!(again.val(), pa);
        assert_eq!(again.val() & 0x1FF, 0x55);
    }
    assert!(
        events
            .iter()
            .all(|e| e.kind != EventKind::AddressFromPageFaultHandler)
    );
}

/// With a lossless split no TLB hit ever returns another page's frame.
#[test]
fn tlb_hits_never_return_a_foreign_frame() {
    let mut ctx = TestContext::new();
    let mut expected = std::collections::HashMap::new();
    // Interleave VPNs that share TLB indices.
    let order: Vec<u64> = (0..512).map(|i| (i * 37) % 512).collect();
    for round in 0..3 {
        for &vpn in &order {
            let pa = ctx.translate(vpn << 9).unwrap().val();
            let frame = pa >> 9;
            let prev = expected.insert(vpn, frame);
            if round > 0 {
                assert_eq!(prev, Some(frame), "vpn {vpn} changed frame");
            }
        }
    }
}

#[test]
fn reset_empties_both_tables() {
    let mut mmu = AddressTranslator::new();
    let mut frames = SequentialFrameAllocator::new(0);
    for va in [0, 0x200, 0x3_FE00] {
        let _ = mmu
            .translate(VirtAddr::new(va), &mut frames, &mut NullObserver)
            .unwrap();
    }
    assert_eq!(mmu.page_table.mapped(), 3);

    mmu.reset();

    assert_eq!(mmu.page_table.mapped(), 0);
    assert_eq!(mmu.tlb.occupancy(), 0);
}

proptest! {
    /// The page offset passes through translation untouched and repeated
    /// translations agree.
    #[test]
    fn offset_preserved_and_stable(va in 0u64..(1 << 18)) {
        let mut ctx = TestContext::new();
        let a = ctx.translate(va).unwrap();
        let b = ctx.translate(va).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.val() & 0x1FF, va & 0x1FF);
        prop_assert_eq!(ctx.last_kind(), Some(EventKind::AddressFromTlb));
    }
}
