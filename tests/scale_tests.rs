use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use mobility_chart::core::{
    LinearScale, PixelRange, TimeAxis, TimeScale, TimeTickInterval, ValueScale, format_time_tick,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn linear_scale_maps_and_inverts() {
    let scale = LinearScale::new(0.0, 100.0, PixelRange::new(30.0, 930.0)).expect("scale");
    assert_abs_diff_eq!(scale.domain_to_pixel(50.0).expect("px"), 480.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.pixel_to_domain(930.0).expect("value"), 100.0, epsilon = 1e-9);
    assert!(scale.domain_to_pixel(f64::NAN).is_err());
}

#[test]
fn linear_scale_rejects_degenerate_domains() {
    let range = PixelRange::new(0.0, 100.0);
    assert!(LinearScale::new(5.0, 5.0, range).is_err());
    assert!(LinearScale::new(0.0, f64::INFINITY, range).is_err());
}

#[test]
fn value_scale_is_niced_and_flipped() {
    let scale = ValueScale::new(-7.3, 18.2, PixelRange::new(470.0, 30.0)).expect("scale");
    assert_eq!(scale.domain(), (-8.0, 20.0));
    assert_abs_diff_eq!(scale.value_to_pixel(-8.0).expect("px"), 470.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.value_to_pixel(20.0).expect("px"), 30.0, epsilon = 1e-9);
    assert!(scale.value_to_pixel(10.0).expect("px") < scale.value_to_pixel(0.0).expect("px"));
}

#[test]
fn value_scale_widens_constant_extent() {
    let scale = ValueScale::new(3.0, 3.0, PixelRange::new(470.0, 30.0)).expect("scale");
    let (low, high) = scale.domain();
    assert!(low <= 2.0 && high >= 4.0);
}

#[test]
fn value_scale_widens_constant_extent_beyond_float_precision() {
    let value = 9_000_000_000_000_000_000.0;
    let scale = ValueScale::new(value, value, PixelRange::new(470.0, 30.0)).expect("scale");
    let (low, high) = scale.domain();
    assert!(low < value && high > value);
    let px = scale.value_to_pixel(value).expect("px");
    assert!(px > 30.0 && px < 470.0);
    assert!(!scale.ticks(10).is_empty());
}

#[test]
fn value_ticks_cover_domain_with_round_steps() {
    let scale = ValueScale::new(-60.0, 35.0, PixelRange::new(470.0, 30.0)).expect("scale");
    let (low, high) = scale.domain();
    let ticks = scale.ticks(10);
    assert_eq!(ticks.first().copied(), Some(low));
    assert_eq!(ticks.last().copied(), Some(high));
    for pair in ticks.windows(2) {
        assert_abs_diff_eq!(pair[1] - pair[0], 10.0, epsilon = 1e-9);
    }
}

#[test]
fn time_scale_spans_axis_bounds() {
    let axis = TimeAxis::new(vec![date(2020, 1, 13), date(2020, 1, 14), date(2020, 1, 15)])
        .expect("axis");
    let scale = TimeScale::from_axis(&axis, PixelRange::new(30.0, 930.0)).expect("scale");

    assert_abs_diff_eq!(scale.date_to_pixel(date(2020, 1, 13)).expect("px"), 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.date_to_pixel(date(2020, 1, 15)).expect("px"), 930.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        scale.pixel_to_time(480.0).expect("time"),
        axis.seconds()[1],
        epsilon = 1e-6
    );
}

#[test]
fn single_point_axis_gets_a_day_wide_domain() {
    let axis = TimeAxis::new(vec![date(2020, 5, 1)]).expect("axis");
    let scale = TimeScale::from_axis(&axis, PixelRange::new(0.0, 100.0)).expect("scale");
    let (start, end) = scale.domain();
    assert_abs_diff_eq!(end - start, 86_400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.date_to_pixel(date(2020, 5, 1)).expect("px"), 50.0, epsilon = 1e-9);
}

#[test]
fn time_ticks_are_calendar_aligned_and_inside_domain() {
    let dates: Vec<NaiveDate> = (0..120)
        .map(|i| date(2020, 1, 13) + chrono::Duration::days(i))
        .collect();
    let axis = TimeAxis::new(dates.clone()).expect("axis");
    let scale = TimeScale::from_axis(&axis, PixelRange::new(30.0, 930.0)).expect("scale");

    let ticks = scale.ticks(11).expect("ticks");
    let (start, end) = scale.domain();
    let interval = TimeTickInterval::for_span(end - start, 11);
    assert!(!ticks.is_empty());
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(ticks.iter().all(|tick| interval.contains(*tick)));
    assert!(ticks.first().copied() >= dates.first().copied());
    assert!(ticks.last().copied() <= dates.last().copied());
}

#[test]
fn tick_labels_switch_with_calendar_boundaries() {
    assert_eq!(format_time_tick(date(2020, 1, 1)), "2020");
    assert_eq!(format_time_tick(date(2020, 4, 1)), "April");
    assert_eq!(format_time_tick(date(2020, 4, 12)), "Apr 12");
}
