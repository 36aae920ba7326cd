//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters of one translation run. It provides:
//! 1. **Counters:** Addresses translated, page faults, evictions, TLB hits and misses.
//! 2. **Derived Metrics:** Page fault rate and TLB hit rate as fractions.
//! 3. **Reporting:** The plain-text end-of-run summary and a JSON form.

use std::io::{self, Write};

use serde::Serialize;

/// Simulation statistics structure.
///
/// Counters only ever grow during a run. `tlb_hits + tlb_misses == addresses`
/// and `page_faults <= tlb_misses` hold at every point.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of logical addresses translated.
    pub addresses: u64,
    /// Number of references to non-resident pages.
    pub page_faults: u64,
    /// Page faults that had to evict a resident page.
    pub evictions: u64,
    /// Translations resolved by the TLB.
    pub tlb_hits: u64,
    /// Translations that had to consult the page table.
    pub tlb_misses: u64,
}

/// Fraction with a zero-denominator guard.
fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}

impl SimStats {
    /// Page faults per translated address, in `[0, 1]`.
    pub fn page_fault_rate(&self) -> f64 {
        ratio(self.page_faults, self.addresses)
    }

    /// TLB hits per translated address, in `[0, 1]`.
    pub fn tlb_hit_rate(&self) -> f64 {
        ratio(self.tlb_hits, self.addresses)
    }

    /// Writes the end-of-run summary.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Number of Translated Addresses = {}", self.addresses)?;
        writeln!(out, "Page Faults = {}", self.page_faults)?;
        writeln!(out, "Page Fault Rate = {:.3}", self.page_fault_rate())?;
        writeln!(out, "TLB Hits = {}", self.tlb_hits)?;
        writeln!(out, "TLB Misses = {}", self.tlb_misses)?;
        writeln!(out, "TLB Hit Rate = {:.3}", self.tlb_hit_rate())?;
        Ok(())
    }

    /// Writes the summary as one JSON object, including the derived rates.
    ///
    /// # Errors
    ///
    /// Propagates serialization or I/O errors from `out`.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        #[derive(Serialize)]
        struct Report<'a> {
            #[serde(flatten)]
            counters: &'a SimStats,
            page_fault_rate: f64,
            tlb_hit_rate: f64,
        }

        let report = Report {
            counters: self,
            page_fault_rate: self.page_fault_rate(),
            tlb_hit_rate: self.tlb_hit_rate(),
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)
    }
}
