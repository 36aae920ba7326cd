//! Optimal (OPT / Belady) Replacement Policy.
//!
//! This policy evicts the resident page whose next reference lies farthest in
//! the future. It is an offline algorithm: the whole page reference sequence
//! must be materialized before translation starts, and the policy consults it
//! as a read-only oracle.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `victim()`: O(F × N) where F is the number of frames and N the remaining references
//! - **Space Complexity:** O(N) for the reference sequence

use tracing::trace;

use super::ReplacementPolicy;
use crate::common::{FrameId, PageNumber};
use crate::mmu::frame_table::FrameTable;

/// OPT Policy state.
#[derive(Debug, Clone)]
pub struct OptPolicy {
    /// Page number of every reference in the run, in input order.
    pages: Vec<PageNumber>,
}

impl OptPolicy {
    /// Creates a new OPT policy over the full reference sequence.
    ///
    /// # Arguments
    ///
    /// * `pages` - Page numbers of every address in the run, in order.
    pub const fn new(pages: Vec<PageNumber>) -> Self {
        Self { pages }
    }

    /// Index of the first reference to `page` strictly after `position`.
    pub fn next_use(&self, page: PageNumber, position: usize) -> Option<usize> {
        self.pages
            .iter()
            .enumerate()
            .skip(position + 1)
            .find(|&(_, &p)| p == page)
            .map(|(i, _)| i)
    }
}

impl ReplacementPolicy for OptPolicy {
    /// Scans resident frames in index order. A frame whose page is never
    /// referenced again is returned at once; otherwise the frame with the
    /// farthest next use wins.
    fn victim(&mut self, resident: &FrameTable, position: usize) -> Option<FrameId> {
        let mut best: Option<(FrameId, usize)> = None;

        for (frame, page) in resident.resident() {
            let Some(next) = self.next_use(page, position) else {
                trace!(frame = frame.0, page = page.0, "page never referenced again");
                return Some(frame);
            };
            if best.is_none_or(|(_, farthest)| next > farthest) {
                best = Some((frame, next));
            }
        }

        best.map(|(frame, _)| frame)
    }
}
