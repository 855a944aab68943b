use chrono::{Duration, NaiveDate, NaiveTime};
use scatter_rs::ScatterError;
use scatter_rs::core::{BrushRange, DataPoint, Dataset, LegendDateScale};
use scatter_rs::interaction::classify;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn year_scale() -> LegendDateScale {
    LegendDateScale::new(250.0, 12.5, (day(2018, 1, 1), day(2018, 12, 31)), 30)
        .expect("legend scale")
}

#[test]
fn brush_window_is_thirty_days_wide() {
    let scale = year_scale();
    for x in [-50.0, 0.0, 6.25, 100.0, 243.75, 400.0] {
        let range = scale.range_at(x);
        assert_eq!(range.end() - range.start(), Duration::days(30));
    }
}

#[test]
fn positions_clamp_to_active_extent() {
    let scale = year_scale();
    assert_eq!(scale.active_extent(), (6.25, 243.75));
    assert_eq!(scale.clamp_position(-10.0), 6.25);
    assert_eq!(scale.clamp_position(1_000.0), 243.75);
    assert_eq!(scale.clamp_position(f64::NAN), 6.25);

    assert_eq!(scale.date_at(0.0), day(2018, 1, 1).and_time(NaiveTime::MIN));
    assert_eq!(
        scale.date_at(250.0),
        (day(2018, 12, 31) - Duration::days(30)).and_time(NaiveTime::MIN)
    );
}

#[test]
fn window_label_uses_month_and_day() {
    let range = BrushRange::new(day(2018, 1, 1).and_time(NaiveTime::MIN), Duration::days(30));
    assert_eq!(range.label(), "January 01 – January 31");
}

#[test]
fn selection_is_half_open() {
    let start = day(2018, 3, 1).and_time(NaiveTime::MIN);
    let range = BrushRange::new(start, Duration::days(30));
    assert!(range.contains(day(2018, 3, 1)));
    assert!(range.contains(day(2018, 3, 30)));
    assert!(!range.contains(day(2018, 3, 31)));
    assert!(!range.contains(day(2018, 2, 28)));

    let dataset = Dataset::new(vec![
        DataPoint::new(day(2018, 2, 28), 30.0, 40.0),
        DataPoint::new(day(2018, 3, 1), 31.0, 41.0),
        DataPoint::new(day(2018, 3, 31), 32.0, 42.0),
    ])
    .expect("dataset");
    let selection = classify(&dataset, range);
    assert_eq!(selection.selected_indices().collect::<Vec<_>>(), vec![1]);
    assert_eq!(selection.unselected_indices().collect::<Vec<_>>(), vec![0, 2]);
}

#[test]
fn invalid_legend_geometry_is_rejected() {
    let extent = (day(2018, 1, 1), day(2018, 12, 31));
    assert!(matches!(
        LegendDateScale::new(250.0, 250.0, extent, 30),
        Err(ScatterError::InvalidConfig(_))
    ));
    assert!(matches!(
        LegendDateScale::new(250.0, 12.5, extent, 0),
        Err(ScatterError::InvalidConfig(_))
    ));
}
