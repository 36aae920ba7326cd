//! Demand-paging virtual memory simulator library.
//!
//! This crate translates a stream of logical addresses to physical frames with the following:
//! 1. **MMU:** TLB, page table and frame directory, with page faults serviced from a backing store.
//! 2. **Memory:** Physical frame storage and the page-addressed backing store reader.
//! 3. **Policies:** FIFO, LRU and OPT page replacement.
//! 4. **Simulation:** Reference trace loading, configuration and statistics collection.

/// Common types and constants (addresses, pages, frames, errors).
pub mod common;
/// Simulator configuration (defaults, replacement algorithm selector).
pub mod config;
/// Physical memory and backing store.
pub mod memory;
/// Translation engine (TLB, page table, frame directory).
pub mod mmu;
/// Page replacement policies.
pub mod policies;
/// Reference trace loader and simulator driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Error type shared by every fallible operation.
pub use crate::common::SimError;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
