//! Frame directory: the reverse mapping from physical frame to resident page.
//!
//! The eviction path consults it to find which page-table entry to invalidate,
//! and the OPT policy reads it to learn which pages are currently resident.

use crate::common::{FrameId, PageNumber, Result, SimError};

/// Reverse map sized to the configured frame budget.
#[derive(Debug, Clone)]
pub struct FrameTable {
    owners: Vec<Option<PageNumber>>,
}

impl FrameTable {
    /// Creates a directory for `frames` physical frames, all empty.
    pub fn new(frames: usize) -> Self {
        Self {
            owners: vec![None; frames],
        }
    }

    /// Records that `frame` now holds `page`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FrameDirectory`] if `frame` is outside the budget.
    pub fn bind(&mut self, frame: FrameId, page: PageNumber) -> Result<()> {
        let slot = self
            .owners
            .get_mut(frame.index())
            .ok_or(SimError::FrameDirectory(frame))?;
        *slot = Some(page);
        Ok(())
    }

    /// Returns the page resident in `frame`, if any.
    pub fn resident_page(&self, frame: FrameId) -> Option<PageNumber> {
        self.owners.get(frame.index()).copied().flatten()
    }

    /// Iterates over populated frames in frame-index order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, PageNumber)> + '_ {
        self.owners
            .iter()
            .enumerate()
            .filter_map(|(i, owner)| owner.map(|page| (FrameId(i as u8), page)))
    }

    /// Number of frames in the budget.
    pub fn capacity(&self) -> usize {
        self.owners.len()
    }
}
