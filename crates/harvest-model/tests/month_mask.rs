//! Tests for month masks and their renderings.

use harvest_model::{Month, MonthMask, MonthRange, NormalizedPeriod};
use proptest::prelude::*;

#[test]
fn wraparound_range_is_union_of_both_halves() {
    let mask = MonthMask::from_range(Month::Oct, Month::Feb);
    let months: Vec<u32> = mask.months().map(Month::number).collect();
    assert_eq!(months, vec![1, 2, 10, 11, 12]);
    assert_eq!(mask.bits(), 0b1110_0000_0011);
}

#[test]
fn window_order_keeps_wrapping_run_together() {
    let mask = MonthMask::from_range(Month::Oct, Month::Feb);
    assert_eq!(mask.month_names(), vec!["Oct", "Nov", "Dec", "Jan", "Feb"]);

    let scattered: MonthMask = [Month::Jan, Month::Mar, Month::Dec].into_iter().collect();
    assert_eq!(scattered.month_names(), vec!["Dec", "Jan", "Mar"]);
}

#[test]
fn window_order_is_calendar_order_without_wrap() {
    let mask: MonthMask = [Month::Sep, Month::Feb, Month::Jun].into_iter().collect();
    assert_eq!(mask.month_names(), vec!["Feb", "Jun", "Sep"]);
    assert_eq!(MonthMask::ALL.month_names().len(), 12);
    assert_eq!(MonthMask::ALL.month_names()[0], "Jan");
}

#[test]
fn ranges_report_contiguous_runs() {
    let mask = MonthMask::from_range(Month::Mar, Month::May)
        | MonthMask::from_range(Month::Nov, Month::Jan);
    assert_eq!(
        mask.ranges(),
        vec![
            MonthRange {
                start: Month::Mar,
                end: Month::May
            },
            MonthRange {
                start: Month::Nov,
                end: Month::Jan
            },
        ]
    );
    assert!(mask.ranges()[1].wraps());
}

#[test]
fn ranges_of_full_and_empty_masks() {
    assert!(MonthMask::EMPTY.ranges().is_empty());
    assert_eq!(
        MonthMask::ALL.ranges(),
        vec![MonthRange {
            start: Month::Jan,
            end: Month::Dec
        }]
    );
}

#[test]
fn mask_serializes_as_integer() {
    let period = NormalizedPeriod::from_mask(MonthMask::from_range(Month::Jun, Month::Aug), "");
    let json = serde_json::to_value(&period).expect("serialize period");
    assert_eq!(json["month_mask"], 224);
    let round: NormalizedPeriod = serde_json::from_value(json).expect("deserialize period");
    assert_eq!(round, period);
}

fn month_strategy() -> impl Strategy<Value = Month> {
    (1u32..=12).prop_map(|n| Month::from_number(n).expect("valid month"))
}

proptest! {
    #[test]
    fn range_masks_stay_in_bounds(start in month_strategy(), end in month_strategy()) {
        let mask = MonthMask::from_range(start, end);
        prop_assert!(mask.bits() <= 4095);
        prop_assert!(mask.contains(start));
        prop_assert!(mask.contains(end));
        prop_assert!(!mask.is_empty());
    }

    #[test]
    fn ranges_cover_exactly_the_mask(bits in 0u16..=4095) {
        let mask = MonthMask::from_bits(bits);
        let rebuilt = mask
            .ranges()
            .into_iter()
            .fold(MonthMask::EMPTY, |acc, r| acc | MonthMask::from_range(r.start, r.end));
        prop_assert_eq!(rebuilt, mask);
    }

    #[test]
    fn window_order_is_a_permutation(bits in 0u16..=4095) {
        let mask = MonthMask::from_bits(bits);
        let mut ordered = mask.window_order();
        prop_assert_eq!(ordered.len(), mask.len());
        ordered.sort();
        prop_assert_eq!(ordered, mask.months().collect::<Vec<_>>());
    }
}
