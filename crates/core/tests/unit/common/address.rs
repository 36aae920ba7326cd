//! Address Decomposition Tests.
//!
//! Verifies that logical addresses split into page (bits 15:8) and offset
//! (bits 7:0), and that bits above 15 are ignored.

use memsim_core::common::{LogicalAddr, PageNumber};
use rstest::rstest;

#[rstest]
#[case(0, 0, 0)]
#[case(255, 0, 255)]
#[case(256, 1, 0)]
#[case(16916, 66, 20)]
#[case(62493, 244, 29)]
#[case(65535, 255, 255)]
fn splits_page_and_offset(#[case] raw: i32, #[case] page: u8, #[case] offset: usize) {
    let addr = LogicalAddr::new(raw);
    assert_eq!(addr.page(), PageNumber(page));
    assert_eq!(addr.offset(), offset);
}

#[test]
fn upper_bits_are_ignored() {
    let low = LogicalAddr::new(0x1234);
    let high = LogicalAddr::new(0x7FFF_1234);
    assert_eq!(low.page(), high.page());
    assert_eq!(low.offset(), high.offset());
}

#[test]
fn negative_addresses_use_low_16_bits() {
    // -1 is 0xFFFF_FFFF.
    let addr = LogicalAddr::new(-1);
    assert_eq!(addr.page(), PageNumber(255));
    assert_eq!(addr.offset(), 255);
    assert_eq!(addr.val(), -1);
}

#[test]
fn store_offset_is_page_times_page_size() {
    assert_eq!(PageNumber(0).store_offset(), 0);
    assert_eq!(PageNumber(1).store_offset(), 256);
    assert_eq!(PageNumber(255).store_offset(), 255 * 256);
}

#[test]
fn display_echoes_raw_value() {
    assert_eq!(LogicalAddr::new(-42).to_string(), "-42");
    assert_eq!(LogicalAddr::from(70000).to_string(), "70000");
}
