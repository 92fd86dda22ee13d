//! Property tests for the aggregation layer

use aurum_charts::{SectorUsageAggregator, YearlyAverageAggregator};
use aurum_common::{PriceRecord, UsageRecord};
use chrono::NaiveDate;
use proptest::prelude::*;

proptest! {
    #[test]
    fn category_order_is_descending_and_multiset_preserved(
        amounts in proptest::collection::vec(0u32..1000, 0..40)
    ) {
        let records: Vec<UsageRecord> = amounts
            .iter()
            .enumerate()
            .map(|(i, a)| UsageRecord {
                sector: format!("s{}", i),
                tonnes: f64::from(*a),
            })
            .collect();

        let sorted = SectorUsageAggregator::new().aggregate(&records);

        prop_assert_eq!(sorted.len(), records.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].tonnes >= pair[1].tonnes);
        }

        let mut before: Vec<f64> = records.iter().map(|r| r.tonnes).collect();
        let mut after: Vec<f64> = sorted.iter().map(|r| r.tonnes).collect();
        before.sort_by(f64::total_cmp);
        after.sort_by(f64::total_cmp);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn category_sort_is_stable_for_ties(
        // A narrow value range forces plenty of ties
        amounts in proptest::collection::vec(0u32..4, 0..30)
    ) {
        let records: Vec<UsageRecord> = amounts
            .iter()
            .enumerate()
            .map(|(i, a)| UsageRecord {
                sector: format!("{}", i),
                tonnes: f64::from(*a),
            })
            .collect();

        let sorted = SectorUsageAggregator::new().aggregate(&records);

        // Within a run of equal amounts, input indices must stay ascending
        for pair in sorted.windows(2) {
            if pair[0].tonnes == pair[1].tonnes {
                let left: usize = pair[0].sector.parse().unwrap();
                let right: usize = pair[1].sector.parse().unwrap();
                prop_assert!(left < right);
            }
        }
    }

    #[test]
    fn trailing_window_is_monotone_in_n(
        years in proptest::collection::vec(1950i32..2030, 0..60),
        a in 1u32..80,
        b in 1u32..80,
    ) {
        let records: Vec<PriceRecord> = years
            .iter()
            .map(|y| PriceRecord {
                date: NaiveDate::from_ymd_opt(*y, 6, 1).unwrap(),
                price: 1000.0,
            })
            .collect();

        let narrow = a.min(b);
        let wide = a.max(b);
        let narrow_years: Vec<i32> = YearlyAverageAggregator::with_window(2030, narrow)
            .aggregate(&records)
            .iter()
            .map(|p| p.year)
            .collect();
        let wide_years: Vec<i32> = YearlyAverageAggregator::with_window(2030, wide)
            .aggregate(&records)
            .iter()
            .map(|p| p.year)
            .collect();

        prop_assert!(narrow_years.iter().all(|y| wide_years.contains(y)));
        for year in &narrow_years {
            prop_assert!(*year >= 2030 - narrow as i32);
        }
    }
}
