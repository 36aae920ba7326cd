//! OPT Policy Tests.
//!
//! The victim is the resident page used farthest in the future; a page that is
//! never used again is evicted immediately, first in frame order.

use memsim_core::common::{FrameId, PageNumber};
use memsim_core::mmu::frame_table::FrameTable;
use memsim_core::policies::{OptPolicy, ReplacementPolicy};

fn pages(seq: &[u8]) -> Vec<PageNumber> {
    seq.iter().copied().map(PageNumber).collect()
}

fn directory(resident: &[u8]) -> FrameTable {
    let mut dir = FrameTable::new(resident.len());
    for (f, &p) in resident.iter().enumerate() {
        dir.bind(FrameId(f as u8), PageNumber(p)).unwrap();
    }
    dir
}

#[test]
fn opt_next_use_scans_strictly_forward() {
    let policy = OptPolicy::new(pages(&[1, 2, 1, 3, 1]));
    assert_eq!(policy.next_use(PageNumber(1), 0), Some(2));
    assert_eq!(policy.next_use(PageNumber(1), 2), Some(4));
    assert_eq!(policy.next_use(PageNumber(1), 4), None);
    assert_eq!(policy.next_use(PageNumber(9), 0), None);
}

#[test]
fn opt_evicts_farthest_next_use() {
    // Position 2 references page 3; resident pages 1 and 2.
    let mut policy = OptPolicy::new(pages(&[1, 2, 3, 1, 2]));
    let dir = directory(&[1, 2]);
    assert_eq!(policy.victim(&dir, 2), Some(FrameId(1)));
}

#[test]
fn opt_evicts_page_never_used_again() {
    let mut policy = OptPolicy::new(pages(&[1, 2, 3, 4, 1, 3]));
    // Resident 1,2,3 at position 3 (page 4 faulting): page 2 never returns.
    let dir = directory(&[1, 2, 3]);
    assert_eq!(policy.victim(&dir, 3), Some(FrameId(1)));
}

#[test]
fn opt_first_dead_frame_wins() {
    let mut policy = OptPolicy::new(pages(&[1, 2, 3, 4, 2]));
    // Pages 1 and 3 are both dead after position 3; frame 0 comes first.
    let dir = directory(&[1, 2, 3]);
    assert_eq!(policy.victim(&dir, 3), Some(FrameId(0)));
}

#[test]
fn opt_at_end_of_sequence_evicts_first_frame() {
    let mut policy = OptPolicy::new(pages(&[1, 2, 3]));
    let dir = directory(&[1, 2]);
    assert_eq!(policy.victim(&dir, 2), Some(FrameId(0)));
}

#[test]
fn opt_empty_directory_has_no_victim() {
    let mut policy = OptPolicy::new(pages(&[1]));
    assert_eq!(policy.victim(&FrameTable::new(2), 0), None);
}
