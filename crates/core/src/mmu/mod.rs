//! Memory Management Unit (MMU).
//!
//! This module implements the translation engine, responsible for resolving a
//! logical address to a physical frame. Each address goes through the TLB,
//! then the page table, and on a page fault is serviced from the backing store,
//! evicting a frame chosen by the replacement policy when memory is full.

/// Reverse mapping from frame to resident page.
pub mod frame_table;

/// Page table indexed by page number.
pub mod page_table;

/// Translation Lookaside Buffer (TLB) for caching page-to-frame mappings.
pub mod tlb;

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::common::{FrameId, LogicalAddr, PageNumber, Result, SimError};
use crate::memory::{BackingStore, Page, PhysicalMemory};
use crate::policies::ReplacementPolicy;

use self::frame_table::FrameTable;
use self::page_table::PageTable;
use self::tlb::Tlb;

/// How a translation was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// The TLB held the mapping.
    TlbHit,
    /// TLB miss, but the page was resident.
    PageHit,
    /// The page was not resident and had to be loaded.
    PageFault {
        /// Page evicted to make room, if memory was full.
        evicted: Option<PageNumber>,
    },
}

impl Access {
    /// Returns `true` if the address caused a page fault.
    pub const fn is_fault(self) -> bool {
        matches!(self, Self::PageFault { .. })
    }
}

/// Result of translating one logical address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    /// The address as read from the input.
    pub address: LogicalAddr,
    /// The referenced byte, interpreted as signed.
    pub value: i8,
    /// Frame holding the page.
    pub frame: FrameId,
    /// Full content of that frame.
    pub content: Page,
    /// How the translation was resolved.
    pub access: Access,
}

impl Translation {
    /// Writes the output record `source, value, frame, HEX` and a newline.
    ///
    /// `source` is the address as it appeared in the input, which can differ
    /// from the parsed value for lines with trailing text or out-of-range digits.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_record<W: Write>(&self, out: &mut W, source: &str) -> io::Result<()> {
        writeln!(out, "{source}, {}", RecordFields(self))
    }
}

/// The fields of an output record after the address.
struct RecordFields<'a>(&'a Translation);

impl fmt::Display for RecordFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, ", self.0.value, self.0.frame)?;
        for byte in &self.0.content {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Translation {
    /// Formats the output record with the parsed address: `address, value, frame, HEX`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.address, RecordFields(self))
    }
}

/// Translation engine for one run.
///
/// Owns the TLB, page table, frame directory, physical memory, replacement
/// policy and backing store.
pub struct Mmu<S> {
    /// TLB probed before the page table.
    pub tlb: Tlb,
    /// Page table (page → frame).
    pub page_table: PageTable,
    /// Frame directory (frame → page).
    pub frame_table: FrameTable,
    /// Frame storage.
    pub memory: PhysicalMemory,
    policy: Box<dyn ReplacementPolicy>,
    store: S,
    /// Next never-used frame; equals the frame count once memory is full.
    next_free: usize,
}

impl<S> fmt::Debug for Mmu<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mmu")
            .field("tlb", &self.tlb)
            .field("frames", &self.memory.frames())
            .field("next_free", &self.next_free)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<S: BackingStore> Mmu<S> {
    /// Creates an MMU with `frames` empty frames.
    ///
    /// # Arguments
    ///
    /// * `frames` - Physical frame budget (already validated).
    /// * `policy` - Replacement policy used once memory is full.
    /// * `store` - Backing store that page faults read from.
    pub fn new(frames: usize, policy: Box<dyn ReplacementPolicy>, store: S) -> Self {
        Self {
            tlb: Tlb::new(),
            page_table: PageTable::new(),
            frame_table: FrameTable::new(frames),
            memory: PhysicalMemory::new(frames),
            policy,
            store,
            next_free: 0,
        }
    }

    /// Translates one logical address.
    ///
    /// # Arguments
    ///
    /// * `addr` - The logical address.
    /// * `position` - Index of this address in the reference sequence.
    /// * `tick` - Logical time of this reference (one per address).
    ///
    /// # Errors
    ///
    /// Fails only if a page load from the backing store fails or the frame
    /// bookkeeping is inconsistent; both abort the run.
    pub fn translate(
        &mut self,
        addr: LogicalAddr,
        position: usize,
        tick: u64,
    ) -> Result<Translation> {
        let page = addr.page();
        let offset = addr.offset();

        let (frame, access) = if let Some(frame) = self.tlb.lookup(page) {
            (frame, Access::TlbHit)
        } else {
            let (frame, access) = match self.page_table.lookup(page).resident_frame() {
                Some(frame) => (frame, Access::PageHit),
                None => {
                    let (frame, evicted) = self.handle_fault(page, position)?;
                    (frame, Access::PageFault { evicted })
                }
            };
            self.tlb.insert(page, frame);
            (frame, access)
        };

        self.policy.touch(frame, tick);

        let content = self.page_content(frame)?;
        let value = self.memory.read_i8(frame, offset)?;
        trace!(
            addr = addr.val(),
            page = page.0,
            offset,
            frame = frame.0,
            ?access,
            "translated"
        );

        Ok(Translation {
            address: addr,
            value,
            frame,
            content,
            access,
        })
    }

    /// Services a page fault for `page`.
    ///
    /// # Returns
    ///
    /// The frame the page now occupies and the page that was evicted, if any.
    fn handle_fault(
        &mut self,
        page: PageNumber,
        position: usize,
    ) -> Result<(FrameId, Option<PageNumber>)> {
        if self.next_free < self.memory.frames() {
            let frame = FrameId(self.next_free as u8);
            self.next_free += 1;
            self.load(page, frame)?;
            self.policy.loaded(frame);
            debug!(page = page.0, frame = frame.0, "page fault: loaded into free frame");
            return Ok((frame, None));
        }

        let frame = self
            .policy
            .victim(&self.frame_table, position)
            .ok_or(SimError::NoVictim)?;
        let victim = self
            .frame_table
            .resident_page(frame)
            .ok_or(SimError::FrameDirectory(frame))?;

        self.page_table.mark_evicted(victim);
        self.tlb.invalidate(victim);
        self.load(page, frame)?;
        debug!(
            page = page.0,
            frame = frame.0,
            evicted = victim.0,
            "page fault: evicted resident page"
        );
        Ok((frame, Some(victim)))
    }

    /// Reads `page` from the backing store into `frame` and records the mapping.
    fn load(&mut self, page: PageNumber, frame: FrameId) -> Result<()> {
        let data = self.store.read_page(page)?;
        self.memory.load(frame, &data)?;
        self.frame_table.bind(frame, page)?;
        self.page_table.mark_resident(page, frame);
        Ok(())
    }

    fn page_content(&self, frame: FrameId) -> Result<Page> {
        let mut content = [0u8; crate::common::PAGE_SIZE];
        content.copy_from_slice(self.memory.frame(frame)?);
        Ok(content)
    }

    /// Number of frames populated so far.
    pub const fn frames_in_use(&self) -> usize {
        self.next_free
    }

    /// Returns the backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}
