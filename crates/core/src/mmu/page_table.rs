//! Single-level page table.
//!
//! One entry per logical page, indexed directly by page number. This is the
//! ground truth for whether a page is resident and in which frame.

use crate::common::{FrameId, PAGE_COUNT, PageNumber};

/// A page table entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    /// Whether the page currently occupies a frame.
    pub present: bool,
    /// Frame holding the page. Only meaningful while `present` is set.
    pub frame: Option<FrameId>,
}

impl PageTableEntry {
    /// Returns the frame if the page is resident.
    #[inline]
    pub fn resident_frame(&self) -> Option<FrameId> {
        if self.present { self.frame } else { None }
    }
}

/// Page table covering the whole logical address space.
#[derive(Debug)]
pub struct PageTable {
    entries: [PageTableEntry; PAGE_COUNT],
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTable {
    /// Creates a page table with no resident pages.
    pub fn new() -> Self {
        Self {
            entries: [PageTableEntry::default(); PAGE_COUNT],
        }
    }

    /// Returns the entry for `page`.
    #[inline]
    pub fn lookup(&self, page: PageNumber) -> PageTableEntry {
        self.entries[page.index()]
    }

    /// Records that `page` now lives in `frame`.
    pub fn mark_resident(&mut self, page: PageNumber, frame: FrameId) {
        self.entries[page.index()] = PageTableEntry {
            present: true,
            frame: Some(frame),
        };
    }

    /// Clears the present bit of `page`.
    ///
    /// The stale frame value is left in place but is never read while
    /// `present` is false.
    pub fn mark_evicted(&mut self, page: PageNumber) {
        self.entries[page.index()].present = false;
    }

    /// Number of resident pages.
    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }
}
