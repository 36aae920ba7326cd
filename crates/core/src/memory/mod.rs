//! Physical memory and the backing store behind it.

/// Page-addressed reader over the backing store image.
pub mod backing_store;

/// Frame storage.
pub mod physical;

use crate::common::PAGE_SIZE;

pub use backing_store::{BackingStore, FileBackingStore};
pub use physical::PhysicalMemory;

/// Content of one page (or one frame).
pub type Page = [u8; PAGE_SIZE];
