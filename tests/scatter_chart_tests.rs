use std::time::Duration;

use approx::assert_abs_diff_eq;
use scatter_room::api::{RenderOutcome, ScatterChart, ScatterChartConfig};
use scatter_room::core::{ScatterPoint, Viewport};
use scatter_room::error::ChartError;
use scatter_room::interaction::{HoverPhase, MarkerVisual};
use scatter_room::render::{CanvasLayerKind, NullRenderer};

fn chart_with_scenario() -> ScatterChart<NullRenderer> {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterChartConfig::default(),
        Viewport::new(400, 300),
    )
    .expect("chart init");
    chart.set_data(vec![ScatterPoint::new(10.0, 20.0), ScatterPoint::new(30.0, 5.0)]);
    chart
}

#[test]
fn render_draws_one_circle_per_point() {
    let mut chart = chart_with_scenario();
    let outcome = chart.render().expect("render");
    assert_eq!(outcome, RenderOutcome::Drawn { markers: 2 });
    assert_eq!(chart.renderer().frames_rendered, 1);
    assert_eq!(chart.renderer().last_circle_count, 2);
    assert_eq!(chart.renderer().last_rect_count, 0);
}

#[test]
fn axes_carry_nice_tick_labels_and_titles() {
    let chart = chart_with_scenario();
    let frame = chart
        .build_render_frame()
        .expect("frame")
        .expect("measured viewport");
    let axis = frame.layer(CanvasLayerKind::Axis).expect("axis layer");

    let labels: Vec<&str> = axis.texts.iter().map(|text| text.text.as_str()).collect();
    // 7 bottom ticks, 12 left ticks, two titles.
    assert_eq!(labels.len(), 21);
    assert!(labels.contains(&"30"));
    assert!(labels.contains(&"22"));
    assert!(labels.contains(&"X Axis"));
    assert!(labels.contains(&"Y Axis"));
    // Domain line with two outer ticks plus one tick line per value, per axis.
    assert_eq!(axis.lines.len(), 3 + 7 + 3 + 12);

    let y_title = axis
        .texts
        .iter()
        .find(|text| text.text == "Y Axis")
        .expect("y title");
    assert_eq!(y_title.rotation_deg, -90.0);
    assert_abs_diff_eq!(y_title.x, 60.0 - 45.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y_title.y, 20.0 + 110.0, epsilon = 1e-9);
}

#[test]
fn empty_data_draws_axes_only() {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterChartConfig::default(),
        Viewport::new(400, 300),
    )
    .expect("chart init");
    chart.set_data(Vec::new());

    assert_eq!(chart.render().expect("render"), RenderOutcome::Drawn { markers: 0 });
    assert_eq!(chart.renderer().last_circle_count, 0);
    assert!(chart.renderer().last_line_count > 0);
}

#[test]
fn unmeasured_container_skips_render() {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterChartConfig::default(),
        Viewport::new(0, 0),
    )
    .expect("chart init");
    chart.set_data(vec![ScatterPoint::new(1.0, 1.0)]);

    assert_eq!(chart.render().expect("render"), RenderOutcome::SkippedUnmeasured);
    assert_eq!(chart.renderer().frames_rendered, 0);

    chart.on_resize(Viewport::new(300, 200));
    assert_eq!(chart.render().expect("render"), RenderOutcome::Drawn { markers: 1 });
}

#[test]
fn non_finite_points_are_skipped() {
    let mut chart = chart_with_scenario();
    chart.set_data(vec![
        ScatterPoint::new(1.0, 2.0),
        ScatterPoint::new(f64::NAN, 3.0),
        ScatterPoint::new(4.0, f64::INFINITY),
    ]);
    let markers = chart.marker_positions().expect("positions");
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].index, 0);
}

#[test]
fn hover_round_trip_restores_base_visual() {
    let mut chart = chart_with_scenario();
    chart.marker_pointer_enter(0).expect("enter");
    assert_eq!(chart.marker_phase(0), Some(HoverPhase::Hovered));
    assert!(chart.has_tooltip(0));
    assert!(chart.advance(Duration::from_millis(100)));

    let midway = chart.marker_visual(0).expect("visual");
    assert!(midway.radius > 5.0 && midway.radius < 8.0);

    assert!(!chart.advance(Duration::from_millis(100)));
    assert_eq!(chart.marker_visual(0), Some(MarkerVisual::new(8.0, 1.0)));

    chart.marker_pointer_leave(0).expect("leave");
    assert!(!chart.has_tooltip(0));
    chart.advance(Duration::from_millis(200));
    assert_eq!(chart.marker_visual(0), Some(MarkerVisual::new(5.0, 0.7)));
    assert!(!chart.is_animating());
}

#[test]
fn tooltip_sits_above_the_hovered_marker() {
    let mut chart = chart_with_scenario();
    chart.marker_pointer_enter(0).expect("enter");
    let frame = chart
        .build_render_frame()
        .expect("frame")
        .expect("measured viewport");
    let overlay = frame.layer(CanvasLayerKind::Overlay).expect("overlay layer");

    assert_eq!(overlay.rects.len(), 1);
    assert_eq!(overlay.texts.len(), 1);
    let marker_x = 60.0 + 320.0 * 10.0 / 33.0;
    let rect = overlay.rects[0];
    assert_abs_diff_eq!(rect.x, marker_x - 30.0, epsilon = 1e-6);
    assert_abs_diff_eq!(rect.y, 40.0 - 15.0 - 30.0, epsilon = 1e-6);
    assert_eq!((rect.width, rect.height, rect.corner_radius), (60.0, 35.0, 5.0));

    let text = &overlay.texts[0];
    assert_eq!(text.text, "20.0");
    assert_abs_diff_eq!(text.y, 40.0 - 15.0 - 5.0, epsilon = 1e-6);
}

#[test]
fn pointer_move_hit_tests_topmost_marker() {
    let mut chart = chart_with_scenario();
    let marker_x = 60.0 + 320.0 * 10.0 / 33.0;

    assert_eq!(chart.pointer_move(marker_x + 1.0, 41.0).expect("move"), Some(0));
    assert_eq!(chart.marker_phase(0), Some(HoverPhase::Hovered));

    assert_eq!(chart.pointer_move(5.0, 5.0).expect("move"), None);
    assert_eq!(chart.marker_phase(0), Some(HoverPhase::Idle));

    chart.pointer_move(marker_x, 40.0).expect("move");
    chart.pointer_leave().expect("leave");
    assert_eq!(chart.tooltip_count(), 0);
}

#[test]
fn data_change_and_resize_reset_hover() {
    let mut chart = chart_with_scenario();
    chart.marker_pointer_enter(1).expect("enter");
    chart.on_resize(Viewport::new(800, 600));
    assert_eq!(chart.marker_phase(1), Some(HoverPhase::Idle));
    assert_eq!(chart.tooltip_count(), 0);

    chart.marker_pointer_enter(1).expect("enter");
    chart.set_data(vec![ScatterPoint::new(1.0, 1.0)]);
    assert_eq!(chart.marker_phase(1), None);
    assert!(!chart.has_tooltip(0));
}

#[test]
fn out_of_range_marker_is_an_error() {
    let mut chart = chart_with_scenario();
    let err = chart.marker_pointer_enter(5).expect_err("out of range");
    assert!(matches!(err, ChartError::MarkerOutOfRange { index: 5, len: 2 }));
}

#[test]
fn events_after_unmount_are_ignored() {
    let mut chart = chart_with_scenario();
    chart.marker_pointer_enter(0).expect("enter");
    chart.unmount();
    assert!(!chart.is_mounted());

    chart.marker_pointer_enter(1).expect("ignored");
    chart.set_data(vec![ScatterPoint::new(2.0, 2.0)]);
    chart.on_resize(Viewport::new(10, 10));
    assert!(!chart.advance(Duration::from_millis(50)));
    assert_eq!(chart.render().expect("render"), RenderOutcome::Detached);
    assert_eq!(chart.points().len(), 2);
    assert_eq!(chart.tooltip_count(), 0);
}

#[test]
fn config_change_restyles_markers() {
    let mut chart = chart_with_scenario();
    let config = ScatterChartConfig::default()
        .with_labels("Hours", "Score")
        .with_css_color("#22d3ee")
        .expect("css color");
    chart.set_config(config).expect("valid config");

    let frame = chart
        .build_render_frame()
        .expect("frame")
        .expect("measured viewport");
    let fill = frame.circles().next().expect("circle").fill;
    assert_eq!(fill.to_css(), "#22d3ee");
    assert!(frame.texts().any(|text| text.text == "Hours"));
}

#[test]
fn extreme_finite_values_still_render() {
    let mut chart = chart_with_scenario();
    chart.set_data(vec![ScatterPoint::new(1.7e308, 1.0)]);
    let layout = chart.layout().expect("layout").expect("measured viewport");
    assert_eq!(layout.x_scale.domain(), (0.0, f64::MAX));
    assert_eq!(
        chart.render().expect("render"),
        RenderOutcome::Drawn { markers: 1 }
    );

    // The second sample lands beyond the representable pixel range.
    chart.set_data(vec![
        ScatterPoint::new(1e-300, 1.0),
        ScatterPoint::new(-1e300, 1.0),
    ]);
    let positions = chart.marker_positions().expect("positions");
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].index, 0);
    assert_eq!(
        chart.render().expect("render"),
        RenderOutcome::Drawn { markers: 1 }
    );
}

#[test]
fn huge_advance_settles_hover() {
    let mut chart = chart_with_scenario();
    chart.marker_pointer_enter(0).expect("enter");
    chart.advance(Duration::from_millis(1));
    assert!(!chart.advance(Duration::MAX));
    assert_eq!(chart.marker_phase(0), Some(HoverPhase::Hovered));
}
