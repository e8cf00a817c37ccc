//! # Address Arithmetic Tests
//!
//! Verifies range checks on `VirtAddr` / `PhysAddr` and the split functions
//! that feed the TLB and the data cache. The TLB split is checked over the
//! whole VPN space: index and tag must partition the 9 VPN bits exactly.

use std::collections::HashSet;

use memsim_core::common::addr::{
    PhysAddr, VirtAddr, split_physical_address, split_virtual_address,
};
use memsim_core::common::constants::{PAGE_TABLE_ENTRIES, TLB_ENTRIES};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0, true)]
#[case(0x3_FFFF, true)]
#[case(1 << 18, false)]
#[case((1 << 18) + 1, false)]
#[case(u64::MAX, false)]
fn virt_addr_range(#[case] raw: u64, #[case] valid: bool) {
    assert_eq!(VirtAddr::new(raw).is_valid(), valid);
}

#[rstest]
#[case(0, true)]
#[case(0xF_FFFF, true)]
#[case(1 << 20, false)]
#[case(u64::MAX, false)]
fn phys_addr_range(#[case] raw: u64, #[case] valid: bool) {
    assert_eq!(PhysAddr::new(raw).is_valid(), valid);
}

#[test]
fn split_virtual_zero() {
    let f = split_virtual_address(VirtAddr::new(0));
    assert_eq!((f.vpn, f.vpo, f.tlb_tag, f.tlb_index), (0, 0, 0, 0));
}

#[test]
fn split_virtual_fields() {
    // VPN = 0b1_0110_1011 (0x16B), VPO = 0x0AB
    let va = (0x16B << 9) | 0x0AB;
    let f = split_virtual_address(VirtAddr::new(va));
    assert_eq!(f.vpn, 0x16B);
    assert_eq!(f.vpo, 0x0AB);
    assert_eq!(f.tlb_index, 0xB);
    assert_eq!(f.tlb_tag, 0x16);
}

/// Bit 4 of the VPN must land in the tag, not vanish between index and tag.
#[test]
fn split_virtual_keeps_vpn_bit_four() {
    let a = split_virtual_address(VirtAddr::new(0x00 << 9));
    let b = split_virtual_address(VirtAddr::new(0x10 << 9));
    assert_eq!(a.tlb_index, b.tlb_index);
    assert_ne!(a.tlb_tag, b.tlb_tag);
}

/// Every VPN maps to a distinct (index, tag) pair that recombines to itself.
#[test]
fn tlb_split_is_lossless_for_every_vpn() {
    let mut seen = HashSet::new();
    for vpn in 0..PAGE_TABLE_ENTRIES as u64 {
        let f = split_virtual_address(VirtAddr::new(vpn << 9));
        assert!(f.tlb_index < TLB_ENTRIES);
        assert!(f.tlb_tag < 32, "tag for vpn {vpn} exceeds 5 bits");
        assert_eq!(f.recombined_vpn(), vpn);
        assert!(seen.insert((f.tlb_index, f.tlb_tag)), "vpn {vpn} aliases");
    }
    assert_eq!(seen.len(), PAGE_TABLE_ENTRIES);
}

#[test]
fn split_physical_fields() {
    // tag = 0x1ABC, set = 0x15, offset = 3
    let pa = (0x1ABC << 7) | (0x15 << 2) | 3;
    let f = split_physical_address(PhysAddr::new(pa));
    assert_eq!(f.tag, 0x1ABC);
    assert_eq!(f.set, 0x15);
    assert_eq!(f.offset, 3);
}

#[test]
fn from_frame_composes_offset() {
    assert_eq!(PhysAddr::from_frame(0x7FF, 0x1FF).val(), 0xF_FFFF);
    assert_eq!(PhysAddr::from_frame(3, 0).val(), 3 << 9);
}

#[test]
fn word_aligned_clears_low_bits() {
    assert_eq!(PhysAddr::new(0x1237).word_aligned().val(), 0x1234);
    assert_eq!(PhysAddr::new(0x1234).word_aligned().val(), 0x1234);
}

#[test]
fn display_is_hex() {
    assert_eq!(VirtAddr::new(0x1FF).to_string(), "0x001ff");
    assert_eq!(PhysAddr::new(0xABCDE).to_string(), "0xabcde");
}

proptest! {
    /// VPN and VPO recombine to the original virtual address.
    #[test]
    fn virtual_split_recombines(va in 0u64..(1 << 18)) {
        let f = split_virtual_address(VirtAddr::new(va));
        prop_assert_eq!((f.recombined_vpn() << 9) | f.vpo, va);
    }

    /// Tag, set and offset recombine to the original physical address.
    #[test]
    fn physical_split_recombines(pa in 0u64..(1 << 20)) {
        let f = split_physical_address(PhysAddr::new(pa));
        prop_assert!(f.set < 32);
        prop_assert!(f.offset < 4);
        prop_assert_eq!((f.tag << 7) | ((f.set as u64) << 2) | f.offset as u64, pa);
    }
}
