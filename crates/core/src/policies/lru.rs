//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the frame whose most recent reference is oldest. Every
//! translated address stamps the frame it used with the current logical time;
//! the victim is the frame with the smallest stamp.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1)
//!   - `victim()`: O(F) where F is the number of frames
//! - **Space Complexity:** O(F)
//! - **Worst Case:** Cyclic scans larger than physical memory (thrashing)

use super::ReplacementPolicy;
use crate::common::FrameId;
use crate::mmu::frame_table::FrameTable;

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// Logical time of the last reference to each frame.
    last_used: Vec<u64>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `frames` - Number of physical frames.
    pub fn new(frames: usize) -> Self {
        Self {
            last_used: vec![0; frames],
        }
    }

    /// Logical time at which `frame` was last referenced.
    pub fn last_used(&self, frame: FrameId) -> Option<u64> {
        self.last_used.get(frame.index()).copied()
    }
}

impl ReplacementPolicy for LruPolicy {
    fn touch(&mut self, frame: FrameId, tick: u64) {
        if let Some(stamp) = self.last_used.get_mut(frame.index()) {
            *stamp = tick;
        }
    }

    /// Returns the frame with the oldest stamp; the lowest index wins a tie.
    fn victim(&mut self, _resident: &FrameTable, _position: usize) -> Option<FrameId> {
        self.last_used
            .iter()
            .enumerate()
            .min_by_key(|&(i, &stamp)| (stamp, i))
            .map(|(i, _)| FrameId(i as u8))
    }
}
