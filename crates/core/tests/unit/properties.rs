//! # Property Tests
//!
//! Invariants that must hold after every translated address, whatever the
//! reference stream, frame budget or replacement algorithm.

use memsim_core::common::PageNumber;
use memsim_core::config::PageReplacementAlgorithm;
use memsim_core::sim::loader::parse_leading_int;
use proptest::prelude::*;

use crate::common::harness::{TestContext, addr};
use crate::common::mocks::store::pattern_byte;

fn policy() -> impl Strategy<Value = PageReplacementAlgorithm> {
    prop_oneof![
        Just(PageReplacementAlgorithm::Fifo),
        Just(PageReplacementAlgorithm::Lru),
        Just(PageReplacementAlgorithm::Opt),
    ]
}

/// Address streams over a narrow page range, so hits and evictions both occur.
fn local_stream() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec((0u8..24, any::<u8>()), 0..300)
        .prop_map(|refs| refs.into_iter().map(|(p, o)| addr(p, o)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Page table, TLB and frame directory never disagree.
    #[test]
    fn prop_structures_stay_consistent(
        addresses in local_stream(),
        frames in 1usize..=32,
        policy in policy(),
    ) {
        let mut ctx = TestContext::new(&addresses, frames, policy);
        while let Some(t) = ctx.sim.step().unwrap() {
            let a = t.address;
            let mmu = &ctx.sim.mmu;

            prop_assert_eq!(mmu.page_table.lookup(a.page()).resident_frame(), Some(t.frame));
            prop_assert!(mmu.page_table.resident_count() <= frames);

            for page in (0..=255).map(PageNumber) {
                if let Some(frame) = mmu.tlb.lookup(page) {
                    prop_assert_eq!(mmu.page_table.lookup(page).resident_frame(), Some(frame));
                }
            }
            for (frame, page) in mmu.frame_table.resident() {
                prop_assert_eq!(mmu.page_table.lookup(page).resident_frame(), Some(frame));
            }
        }
    }

    /// Counters partition the run and every value matches the store.
    #[test]
    fn prop_counters_and_values(
        addresses in local_stream(),
        frames in 1usize..=32,
        policy in policy(),
    ) {
        let mut ctx = TestContext::new(&addresses, frames, policy);
        let out = ctx.run_all();
        let stats = &ctx.sim.stats;

        prop_assert_eq!(out.len(), addresses.len());
        prop_assert_eq!(stats.addresses, addresses.len() as u64);
        prop_assert_eq!(stats.tlb_hits + stats.tlb_misses, stats.addresses);
        prop_assert!(stats.page_faults <= stats.tlb_misses);
        prop_assert!(stats.evictions <= stats.page_faults);

        for t in &out {
            let expected = pattern_byte(t.address.page().0, t.address.offset() as u8) as i8;
            prop_assert_eq!(t.value, expected);
        }
    }

    /// No algorithm beats the offline optimum.
    #[test]
    fn prop_opt_is_a_lower_bound(addresses in local_stream(), frames in 1usize..=16) {
        let faults = |policy| {
            let mut ctx = TestContext::new(&addresses, frames, policy);
            let _ = ctx.run_all();
            ctx.sim.stats.page_faults
        };
        let opt = faults(PageReplacementAlgorithm::Opt);
        prop_assert!(opt <= faults(PageReplacementAlgorithm::Fifo));
        prop_assert!(opt <= faults(PageReplacementAlgorithm::Lru));
    }

    /// Arbitrary 32-bit inputs translate through their low 16 bits only.
    #[test]
    fn prop_upper_bits_are_ignored(raw in any::<i32>(), policy in policy()) {
        let low = raw & 0xFFFF;
        let mut ctx = TestContext::new(&[raw, low], 4, policy);
        let out = ctx.run_all();
        prop_assert_eq!(out[0].frame, out[1].frame);
        prop_assert_eq!(out[0].value, out[1].value);
        prop_assert_eq!(out[0].address.val(), raw);
    }

    /// Decimal text of any 32-bit value parses back to it.
    #[test]
    fn prop_leading_int_reads_decimal(v in any::<i32>(), suffix in "[ a-z,]{0,8}") {
        prop_assert_eq!(parse_leading_int(&format!("{v}{suffix}")), Some(v));
    }
}
