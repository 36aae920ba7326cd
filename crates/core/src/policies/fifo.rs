//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the frame that was populated longest ago, regardless of
//! how recently it was referenced. Frames join the queue when they are first
//! filled; an evicted frame is refilled immediately and rejoins at the back.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `loaded()`: O(1)
//!   - `victim()`: O(1)
//! - **Space Complexity:** O(F) where F is the number of frames
//! - **Worst Case:** Workloads with strong temporal locality (may evict hot pages)

use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::common::FrameId;
use crate::mmu::frame_table::FrameTable;

/// FIFO Policy state.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    /// Frame ids in load order; the front is the next victim.
    queue: VecDeque<FrameId>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    ///
    /// # Arguments
    ///
    /// * `frames` - Number of physical frames, used to size the queue.
    pub fn new(frames: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(frames),
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn loaded(&mut self, frame: FrameId) {
        self.queue.push_back(frame);
    }

    /// Dequeues the oldest frame and requeues it, since the caller reloads it
    /// straight away.
    fn victim(&mut self, _resident: &FrameTable, _position: usize) -> Option<FrameId> {
        let frame = self.queue.pop_front()?;
        self.queue.push_back(frame);
        Some(frame)
    }
}
