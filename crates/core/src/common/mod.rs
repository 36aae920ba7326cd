//! Common utilities and types used throughout the memory simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Address Types:** Strong types for logical addresses, page numbers and frame ids.
//! 2. **Constants:** Page geometry, TLB capacity and frame budget bounds.
//! 3. **Error Handling:** The `SimError` taxonomy and `Result` alias.

/// Address type definitions (logical addresses, pages and frames).
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::{FrameId, LogicalAddr, PageNumber};
pub use constants::{PAGE_COUNT, PAGE_SIZE, TLB_SIZE};
pub use error::{Result, SimError};
