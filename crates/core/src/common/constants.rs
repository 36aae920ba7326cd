//! Global System Constants.
//!
//! This module defines the fixed geometry of the simulated address space. It includes:
//! 1. **Page Geometry:** Page size, page count, and the shifts/masks that split a logical address.
//! 2. **Translation Constants:** TLB capacity and the frame budget bounds.
//! 3. **Run Defaults:** The backing store file name used when none is supplied.

/// Page size in bytes (and frame size, since frames hold exactly one page).
pub const PAGE_SIZE: usize = 256;

/// Number of distinct pages in the logical address space.
pub const PAGE_COUNT: usize = 256;

/// Number of bits to shift to convert between a logical address and its page number.
pub const PAGE_SHIFT: u32 = 8;

/// Mask for extracting the page offset from a logical address.
pub const OFFSET_MASK: u32 = 0xFF;

/// Mask for the meaningful part of a logical address (page + offset).
pub const ADDRESS_MASK: u32 = 0xFFFF;

/// Number of entries in the translation lookaside buffer.
pub const TLB_SIZE: usize = 16;

/// Smallest accepted frame budget.
pub const MIN_FRAMES: usize = 1;

/// Largest accepted frame budget (one frame per page).
pub const MAX_FRAMES: usize = PAGE_COUNT;

/// Size of the backing store image in bytes.
pub const BACKING_STORE_SIZE: usize = PAGE_COUNT * PAGE_SIZE;

/// Backing store file used when no path is configured.
pub const DEFAULT_BACKING_STORE: &str = "BACKING_STORE.bin";
