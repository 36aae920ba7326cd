//! Physical memory.
//!
//! A flat buffer of `frames * PAGE_SIZE` bytes. Frame contents are written only
//! by page loads from the backing store and are never modified afterwards.

use crate::common::{FrameId, PAGE_SIZE, Result, SimError};

use super::Page;

/// Physical frame storage for one simulation run.
#[derive(Debug, Clone)]
pub struct PhysicalMemory {
    data: Vec<u8>,
    frames: usize,
}

impl PhysicalMemory {
    /// Allocates zeroed storage for `frames` frames.
    pub fn new(frames: usize) -> Self {
        Self {
            data: vec![0; frames * PAGE_SIZE],
            frames,
        }
    }

    /// Number of frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Copies a page into `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FrameDirectory`] if `frame` is outside the budget.
    pub fn load(&mut self, frame: FrameId, page: &Page) -> Result<()> {
        let range = self.range(frame)?;
        self.data[range].copy_from_slice(page);
        Ok(())
    }

    /// Returns the full content of `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FrameDirectory`] if `frame` is outside the budget.
    pub fn frame(&self, frame: FrameId) -> Result<&[u8]> {
        let range = self.range(frame)?;
        Ok(&self.data[range])
    }

    /// Reads the byte at `offset` inside `frame` as a signed value.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FrameDirectory`] if `frame` is outside the budget.
    pub fn read_i8(&self, frame: FrameId, offset: usize) -> Result<i8> {
        let bytes = self.frame(frame)?;
        Ok(bytes[offset % PAGE_SIZE] as i8)
    }

    fn range(&self, frame: FrameId) -> Result<std::ops::Range<usize>> {
        if frame.index() >= self.frames {
            return Err(SimError::FrameDirectory(frame));
        }
        let base = frame.index() * PAGE_SIZE;
        Ok(base..base + PAGE_SIZE)
    }
}
