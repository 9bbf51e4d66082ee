use scatter_room::animation::Easing;
use scatter_room::api::{AxisStyle, DEFAULT_MARKER_COLOR, MarkerStyle, ScatterChartConfig};
use scatter_room::core::Margins;
use scatter_room::error::ChartError;
use scatter_room::interaction::HoverTransition;
use scatter_room::render::Color;
use scatter_room::site::ExploreRoomTiming;

#[test]
fn defaults_match_the_published_look() {
    let config = ScatterChartConfig::default();
    assert_eq!(config.x_label, "X Axis");
    assert_eq!(config.y_label, "Y Axis");
    assert_eq!(config.color, DEFAULT_MARKER_COLOR);
    assert_eq!(config.color.to_css(), "#8b5cf6");
    assert_eq!(config.margins, Margins::new(20.0, 20.0, 60.0, 60.0));
    assert_eq!((config.marker.radius, config.marker.opacity), (5.0, 0.7));
    assert_eq!(
        (config.marker.hover_radius, config.marker.hover_opacity),
        (8.0, 1.0)
    );
    assert_eq!(config.hover_transition.duration_ms, 200);
    assert_eq!(config.hover_transition.easing, Easing::CubicInOut);
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ScatterChartConfig::default()
        .with_labels("Daily hours", "Sleep quality")
        .with_color(Color::rgb(0.2, 0.8, 0.9))
        .with_hover_transition(HoverTransition {
            duration_ms: 350,
            easing: Easing::EaseOut,
        });
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ScatterChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = ScatterChartConfig::from_json_str(r#"{ "x_label": "Minutes" }"#).expect("parse");
    assert_eq!(parsed.x_label, "Minutes");
    assert_eq!(parsed.y_label, "Y Axis");
    assert_eq!(parsed.marker, MarkerStyle::default());
}

#[test]
fn invalid_values_are_rejected() {
    let marker = MarkerStyle {
        radius: 0.0,
        ..MarkerStyle::default()
    };
    let err = ScatterChartConfig::default()
        .with_marker_style(marker)
        .validate()
        .expect_err("zero radius");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = ScatterChartConfig::default()
        .with_css_color("not-a-color")
        .expect_err("bad color");
    assert!(matches!(err, ChartError::InvalidColor(_)));

    let axis = AxisStyle {
        tick_count: 5_000_000,
        ..AxisStyle::default()
    };
    let err = ScatterChartConfig::default()
        .with_axis_style(axis)
        .validate()
        .expect_err("tick count too large");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let json = ScatterChartConfig::default()
        .to_json_pretty()
        .expect("serialize")
        .replace("\"tick_count\": 10", "\"tick_count\": 1000000");
    let err = ScatterChartConfig::from_json_str(&json).expect_err("tick count too large");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = ScatterChartConfig::from_json_str("{ \"x_label\": 3 }").expect_err("type error");
    assert!(matches!(err, ChartError::Json(_)));
}

#[test]
fn css_color_forms_are_accepted() {
    for input in ["#fff", "#22d3ee", "#59cccaff", "rgb(34, 211, 238)", "rgba(0,0,0,0.4)", "white"] {
        Color::from_css(input).expect("valid css color");
    }
    assert_eq!(
        Color::from_css("#59cccaff").expect("hex").to_css(),
        Color::from_css("#59ccca").expect("hex").to_css()
    );
}

#[test]
fn explore_room_timing_round_trips() {
    let timing = ExploreRoomTiming::default();
    assert_eq!(timing.info_delay_ms, 900);
    assert_eq!(timing.zoom_easing, Easing::CINEMATIC);

    let json = timing.to_json_pretty().expect("serialize");
    assert_eq!(ExploreRoomTiming::from_json_str(&json).expect("parse"), timing);

    let err = ExploreRoomTiming::from_json_str(r#"{ "zoom_opacity": 1.5 }"#).expect_err("range");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
