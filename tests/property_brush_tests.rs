use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;
use scatter_rs::core::{DataPoint, Dataset, LegendDateScale};
use scatter_rs::interaction::classify;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 1).expect("valid date")
}

proptest! {
    #[test]
    fn brush_range_width_and_clamp_property(
        x in -500.0f64..800.0,
        span_days in 31i64..1_000,
        legend_width in 50.0f64..600.0
    ) {
        let first = base_date();
        let last = first + Duration::days(span_days);
        let bar = legend_width * 0.05;
        let scale = LegendDateScale::new(legend_width, bar, (first, last), 30)
            .expect("legend scale");

        let range = scale.range_at(x);
        prop_assert_eq!(range.width(), Duration::days(30));

        let position = scale.clamp_position(x);
        let (lo, hi) = scale.active_extent();
        prop_assert!(position >= lo && position <= hi);

        let earliest = first.and_time(NaiveTime::MIN);
        let latest = (last - Duration::days(30)).and_time(NaiveTime::MIN);
        prop_assert!(range.start() >= earliest - Duration::milliseconds(1));
        prop_assert!(range.start() <= latest + Duration::milliseconds(1));
    }

    #[test]
    fn selection_partitions_dataset_property(
        offsets in prop::collection::vec(0i64..400, 1..80),
        start_offset in -40i64..420
    ) {
        let points: Vec<DataPoint> = offsets
            .iter()
            .map(|offset| DataPoint::new(base_date() + Duration::days(*offset), 10.0, 20.0))
            .collect();
        let dataset = Dataset::new(points).expect("dataset");
        let start = (base_date() + Duration::days(start_offset)).and_time(NaiveTime::MIN);
        let range = scatter_rs::core::BrushRange::new(start, Duration::days(30));
        let selection = classify(&dataset, range);

        let selected: Vec<usize> = selection.selected_indices().collect();
        let unselected: Vec<usize> = selection.unselected_indices().collect();
        prop_assert_eq!(selected.len() + unselected.len(), dataset.len());
        prop_assert!(selected.iter().all(|index| !unselected.contains(index)));
        for index in selected {
            prop_assert!(range.contains(dataset.points()[index].date));
        }
        for index in unselected {
            prop_assert!(!range.contains(dataset.points()[index].date));
        }
    }
}
