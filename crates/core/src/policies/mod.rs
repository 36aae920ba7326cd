//! Page Replacement Policies.
//!
//! Implements the algorithms that choose a victim frame when physical memory is
//! full and a page fault needs somewhere to put the incoming page.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Opt`: Belady's optimal (offline) algorithm.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (farthest next use) replacement policy.
pub mod opt;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use opt::OptPolicy;

use crate::common::{FrameId, PageNumber};
use crate::config::PageReplacementAlgorithm;
use crate::mmu::frame_table::FrameTable;

/// Trait for page replacement policies.
///
/// Defines the interface for tracking frame usage and selecting victim frames.
pub trait ReplacementPolicy: std::fmt::Debug {
    /// Notifies the policy that an empty frame was populated for the first time.
    ///
    /// # Arguments
    ///
    /// * `frame` - The newly populated frame.
    fn loaded(&mut self, _frame: FrameId) {}

    /// Notifies the policy that `frame` served the address at logical time `tick`.
    ///
    /// Called for every translated address, whether it hit the TLB, hit the
    /// page table, or faulted.
    fn touch(&mut self, _frame: FrameId, _tick: u64) {}

    /// Selects the frame to evict. Only called when every frame is populated.
    ///
    /// # Arguments
    ///
    /// * `resident` - The frame directory, giving the page held by each frame.
    /// * `position` - Index of the faulting address in the reference sequence.
    ///
    /// # Returns
    ///
    /// The victim frame, or `None` if the policy has nothing to offer.
    fn victim(&mut self, resident: &FrameTable, position: usize) -> Option<FrameId>;
}

/// Builds the policy selected by `algorithm`.
///
/// # Arguments
///
/// * `algorithm` - The configured page replacement algorithm.
/// * `frames` - Number of physical frames.
/// * `pages` - The full page reference sequence; only OPT keeps it.
pub fn build_policy(
    algorithm: PageReplacementAlgorithm,
    frames: usize,
    pages: &[PageNumber],
) -> Box<dyn ReplacementPolicy> {
    match algorithm {
        PageReplacementAlgorithm::Fifo => Box::new(FifoPolicy::new(frames)),
        PageReplacementAlgorithm::Lru => Box::new(LruPolicy::new(frames)),
        PageReplacementAlgorithm::Opt => Box::new(OptPolicy::new(pages.to_vec())),
    }
}
