//! Translation Lookaside Buffer (TLB).
//!
//! A small fully associative cache of page-to-frame mappings, probed before the
//! page table. Insertion uses a round-robin cursor, so the TLB always replaces
//! its entries in FIFO order regardless of the page replacement algorithm
//! configured for physical memory.

use crate::common::{FrameId, PageNumber, TLB_SIZE};

/// A single entry in the TLB.
#[derive(Clone, Copy, Debug, Default)]
struct TlbEntry {
    /// Page number (tag).
    page: PageNumber,
    /// Frame holding the page (data).
    frame: FrameId,
    /// Entry validity flag.
    valid: bool,
}

/// Translation Lookaside Buffer structure.
#[derive(Debug)]
pub struct Tlb {
    /// Fixed array of TLB slots.
    entries: [TlbEntry; TLB_SIZE],
    /// Slot that the next insertion overwrites.
    cursor: usize,
}

impl Default for Tlb {
    fn default() -> Self {
        Self::new()
    }
}

impl Tlb {
    /// Creates an empty TLB with all slots invalid.
    pub fn new() -> Self {
        Self {
            entries: [TlbEntry::default(); TLB_SIZE],
            cursor: 0,
        }
    }

    /// Looks up a page in the TLB.
    ///
    /// Valid slots are scanned in order and the first match wins.
    ///
    /// # Arguments
    ///
    /// * `page` - The page number to look up.
    ///
    /// # Returns
    ///
    /// `Some(frame)` on a hit, otherwise `None`.
    pub fn lookup(&self, page: PageNumber) -> Option<FrameId> {
        self.entries
            .iter()
            .find(|e| e.valid && e.page == page)
            .map(|e| e.frame)
    }

    /// Inserts a new mapping into the slot under the round-robin cursor.
    ///
    /// Whatever the slot held before is overwritten; the cursor then advances.
    ///
    /// # Arguments
    ///
    /// * `page` - Page number.
    /// * `frame` - Frame now holding that page.
    pub fn insert(&mut self, page: PageNumber, frame: FrameId) {
        self.entries[self.cursor] = TlbEntry {
            page,
            frame,
            valid: true,
        };
        self.cursor = (self.cursor + 1) % TLB_SIZE;
    }

    /// Invalidates every entry for `page`; a no-op if none is present.
    ///
    /// Must be called in the same step that evicts the page from its frame.
    pub fn invalidate(&mut self, page: PageNumber) {
        for e in self.entries.iter_mut().filter(|e| e.page == page) {
            e.valid = false;
        }
    }

    /// Number of valid entries.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }

    /// Returns `true` if no entry is valid.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
