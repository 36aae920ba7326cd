//! Simulator: owns the MMU and the run statistics side-by-side.
//!
//! A run is two passes. The reference trace is loaded first, without any
//! translation, so the OPT policy can see the whole page sequence; the
//! simulator then takes ownership of that trace and translates every address
//! in order, emitting one record each. The translated sequence is always the
//! one the OPT policy looks ahead in.

use std::fmt;
use std::io::Write;

use tracing::info;

use crate::common::Result;
use crate::config::Config;
use crate::memory::BackingStore;
use crate::mmu::{Access, Mmu, Translation};
use crate::policies::build_policy;
use crate::sim::loader::ReferenceTrace;
use crate::stats::SimStats;

/// Top-level simulator: translation engine + statistics.
pub struct Simulator<S> {
    /// Translation engine (TLB, page table, frames, policy, backing store).
    pub mmu: Mmu<S>,
    /// Counters for the end-of-run summary.
    pub stats: SimStats,
    /// The addresses being translated; also the OPT lookahead.
    trace: ReferenceTrace,
    /// Position of the next address in the reference sequence.
    position: usize,
}

impl<S> fmt::Debug for Simulator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("mmu", &self.mmu)
            .field("stats", &self.stats)
            .field("addresses", &self.trace.len())
            .field("position", &self.position)
            .finish()
    }
}

impl<S: BackingStore> Simulator<S> {
    /// Creates a simulator that will translate `trace`.
    ///
    /// The page sequence of `trace` is handed to the policy before any
    /// translation happens.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::Configuration`] if `config` fails validation.
    pub fn new(config: &Config, trace: ReferenceTrace, store: S) -> Result<Self> {
        config.validate()?;
        let policy = build_policy(config.policy, config.frames, &trace.pages());
        info!(
            frames = config.frames,
            policy = %config.policy,
            addresses = trace.len(),
            "simulator configured"
        );
        Ok(Self {
            mmu: Mmu::new(config.frames, policy, store),
            stats: SimStats::default(),
            trace,
            position: 0,
        })
    }

    /// The trace this simulator translates.
    pub const fn trace(&self) -> &ReferenceTrace {
        &self.trace
    }

    /// Number of addresses translated so far.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Translates the next address of the trace and updates the statistics.
    ///
    /// # Returns
    ///
    /// `None` once every address has been translated.
    ///
    /// # Errors
    ///
    /// Propagates fatal backing-store and bookkeeping errors from the MMU.
    pub fn step(&mut self) -> Result<Option<Translation>> {
        let position = self.position;
        let Some(&addr) = self.trace.addresses().get(position) else {
            return Ok(None);
        };
        let tick = position as u64 + 1;
        let translation = self.mmu.translate(addr, position, tick)?;

        self.stats.addresses += 1;
        match translation.access {
            Access::TlbHit => self.stats.tlb_hits += 1,
            Access::PageHit => self.stats.tlb_misses += 1,
            Access::PageFault { evicted } => {
                self.stats.tlb_misses += 1;
                self.stats.page_faults += 1;
                if evicted.is_some() {
                    self.stats.evictions += 1;
                }
            }
        }
        self.position += 1;
        Ok(Some(translation))
    }

    /// Translates the rest of the trace, writing one line per address to `out`.
    ///
    /// Each line echoes the address as written in the input. Once the trace is
    /// exhausted further calls write nothing.
    ///
    /// # Errors
    ///
    /// Aborts on the first fatal error; output written so far stays written.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<&SimStats> {
        loop {
            let position = self.position;
            let Some(translation) = self.step()? else {
                break;
            };
            let source = self.trace.text(position).unwrap_or_default();
            translation.write_record(out, source)?;
        }
        info!(
            addresses = self.stats.addresses,
            page_faults = self.stats.page_faults,
            tlb_hits = self.stats.tlb_hits,
            "run complete"
        );
        Ok(&self.stats)
    }
}
