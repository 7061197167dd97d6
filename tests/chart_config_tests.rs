use mobility_chart::ChartError;
use mobility_chart::api::ChartConfig;
use mobility_chart::core::{Margin, Viewport};

#[test]
fn empty_json_yields_defaults() {
    let config = ChartConfig::from_json_str("{}").expect("config");
    assert_eq!(config, ChartConfig::default());
    assert_eq!(config.dataset.geo_type_filter, "country/region");
    assert_eq!(config.dataset.transportation_type_filter, "driving");
    assert_eq!(config.dataset.value_offset, 100);
    assert_eq!(config.margin, Margin::default());
}

#[test]
fn dataset_options_are_top_level_keys() {
    let config = ChartConfig::from_json_str(
        r#"{
            "width": 640,
            "height": 360,
            "geo_type_filter": "city",
            "transportation_type_filter": "walking",
            "value_offset": 0,
            "style": { "value_axis_caption": "City" }
        }"#,
    )
    .expect("config");

    assert_eq!(config.viewport(), Viewport::new(640, 360));
    assert_eq!(config.dataset.geo_type_filter, "city");
    assert_eq!(config.dataset.transportation_type_filter, "walking");
    assert_eq!(config.dataset.value_offset, 0);
    assert_eq!(config.style.value_axis_caption, "City");
    assert_eq!(config.style.series_stroke_width, 1.5);
}

#[test]
fn camel_case_dataset_keys_are_accepted() {
    let config = ChartConfig::from_json_str(
        r#"{ "geoTypeFilter": "city", "transportationTypeFilter": "transit", "valueOffset": 10 }"#,
    )
    .expect("config");
    assert_eq!(config.dataset.geo_type_filter, "city");
    assert_eq!(config.dataset.transportation_type_filter, "transit");
    assert_eq!(config.dataset.value_offset, 10);
}

#[test]
fn json_round_trip_preserves_builders() {
    let config = ChartConfig::new(800, 400)
        .with_geo_type_filter("sub-region")
        .with_value_offset(50);
    let json = config.to_json_string().expect("json");
    assert_eq!(ChartConfig::from_json_str(&json).expect("config"), config);
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        ChartConfig::from_json_str("{ not json"),
        Err(ChartError::Config(_))
    ));
    assert!(matches!(
        ChartConfig::new(0, 400).validate(),
        Err(ChartError::InvalidViewport { .. })
    ));
    assert!(matches!(
        ChartConfig::new(50, 50).validate(),
        Err(ChartError::Config(_))
    ));
    assert!(matches!(
        ChartConfig::default()
            .with_date_column_pattern("[")
            .validate(),
        Err(ChartError::Config(_))
    ));

    let mut config = ChartConfig::default();
    config.style.series_stroke_width = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn ranges_follow_margins() {
    let config = ChartConfig::new(960, 500);
    let time = config.time_range();
    let value = config.value_range();
    assert_eq!((time.start, time.end), (30.0, 930.0));
    assert_eq!((value.start, value.end), (470.0, 30.0));
}

#[test]
fn sized_for_subtracts_right_and_bottom_margins() {
    let config = ChartConfig::default()
        .with_margin(Margin {
            top: 10.0,
            right: 20.0,
            bottom: 40.0,
            left: 50.0,
        })
        .sized_for(Viewport::new(1024, 768));
    assert_eq!(config.viewport(), Viewport::new(1004, 728));
}
