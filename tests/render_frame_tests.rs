use scatter_room::api::{ScatterChart, ScatterChartConfig};
use scatter_room::core::{ScatterPoint, Viewport};
use scatter_room::render::{
    CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, NullRenderer, RectPrimitive,
    RenderFrame, Renderer, SvgRenderer, TextHAlign, TextPrimitive,
};

#[test]
fn layers_keep_paint_order_regardless_of_push_order() {
    let frame = RenderFrame::new(Viewport::new(100, 100))
        .with_rect(
            CanvasLayerKind::Overlay,
            RectPrimitive::new(0.0, 0.0, 10.0, 10.0, Color::WHITE),
        )
        .with_circle(
            CanvasLayerKind::Series,
            CirclePrimitive::new(5.0, 5.0, 2.0, Color::BLACK),
        );

    let kinds: Vec<_> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(kinds, CanvasLayerKind::ORDER.to_vec());
    assert_eq!(frame.rects().count(), 1);
    assert_eq!(frame.circles().count(), 1);
}

#[test]
fn append_translated_shifts_every_primitive() {
    let local = RenderFrame::new(Viewport::new(100, 100))
        .with_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(0.0, 0.0, 10.0, 0.0, 1.0, Color::WHITE),
        )
        .with_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new("0", 1.0, 2.0, 11.0, Color::WHITE, TextHAlign::Center),
        );
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    frame.append_translated(&local, 60.0, 20.0);

    let line = frame.lines().next().expect("line");
    assert_eq!((line.x1, line.y1, line.x2), (60.0, 20.0, 70.0));
    let text = frame.texts().next().expect("text");
    assert_eq!((text.x, text.y), (61.0, 22.0));
}

#[test]
fn null_renderer_rejects_invalid_primitives() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_circle(
        CanvasLayerKind::Series,
        CirclePrimitive::new(f64::NAN, 5.0, 2.0, Color::BLACK),
    );
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn svg_document_contains_markers_and_tooltip() {
    let mut chart = ScatterChart::new(
        SvgRenderer::new(),
        ScatterChartConfig::default(),
        Viewport::new(400, 300),
    )
    .expect("chart init");
    chart.set_data(vec![ScatterPoint::new(10.0, 20.0), ScatterPoint::new(30.0, 5.0)]);
    chart.marker_pointer_enter(1).expect("enter");
    chart.render().expect("render");

    let svg = chart.renderer().document();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("#8b5cf6"));
    assert!(svg.contains(">5.0</text>"));
    assert!(svg.contains("rotate(-90)"));

    let series = svg.find(r#"data-layer="Series""#).expect("series group");
    let overlay = svg.find(r#"data-layer="Overlay""#).expect("overlay group");
    assert!(series < overlay);
}

#[test]
fn svg_escapes_label_text() {
    let config = ScatterChartConfig::default().with_labels("Hours <daily>", "A & B");
    let mut chart = ScatterChart::new(SvgRenderer::new(), config, Viewport::new(400, 300))
        .expect("chart init");
    chart.set_data(vec![ScatterPoint::new(1.0, 1.0)]);
    chart.render().expect("render");

    let svg = chart.into_renderer().into_document();
    assert!(svg.contains("Hours &lt;daily&gt;"));
    assert!(svg.contains("A &amp; B"));
}
