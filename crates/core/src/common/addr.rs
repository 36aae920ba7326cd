//! Logical address, page number and frame id types.
//!
//! This module defines strong types for the three kinds of numbers flowing through
//! the translation path so they cannot be mixed up. It provides the following:
//! 1. **Type Safety:** Distinguishes logical addresses, page numbers and frame ids at compile time.
//! 2. **Address Decomposition:** Splits a logical address into page number and offset.
//! 3. **Bounded Indices:** Page numbers and frame ids wrap a `u8`, so every table indexed
//!    by them is in bounds by construction.

use std::fmt;

use super::constants::{ADDRESS_MASK, OFFSET_MASK, PAGE_SHIFT, PAGE_SIZE};

/// A logical address as read from the reference file.
///
/// The full 32-bit signed value is kept so it can be echoed back in the output;
/// only the low 16 bits take part in translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LogicalAddr(pub i32);

/// A page number in the logical address space (0-255).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PageNumber(pub u8);

/// A physical frame number (0-255, bounded further by the configured frame budget).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FrameId(pub u8);

impl LogicalAddr {
    /// Creates a new logical address from a raw 32-bit value.
    #[inline(always)]
    pub const fn new(addr: i32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub const fn val(&self) -> i32 {
        self.0
    }

    /// Extracts the page number (bits 15:8).
    #[inline(always)]
    pub const fn page(&self) -> PageNumber {
        PageNumber(((self.0 as u32 & ADDRESS_MASK) >> PAGE_SHIFT) as u8)
    }

    /// Extracts the byte offset within the page (bits 7:0).
    #[inline(always)]
    pub const fn offset(&self) -> usize {
        (self.0 as u32 & OFFSET_MASK) as usize
    }
}

impl PageNumber {
    /// Returns the page number as a table index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Byte offset of this page inside the backing store.
    ///
    /// # Returns
    ///
    /// `page * PAGE_SIZE`, suitable for a `SeekFrom::Start`.
    #[inline(always)]
    pub const fn store_offset(self) -> u64 {
        (self.0 as u64) * (PAGE_SIZE as u64)
    }
}

impl FrameId {
    /// Returns the frame id as a table index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<i32> for LogicalAddr {
    fn from(addr: i32) -> Self {
        Self(addr)
    }
}

impl fmt::Display for LogicalAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
