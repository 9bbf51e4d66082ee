use crate::core::{LinearScale, MarkerGeometry, ScatterLayout, ScatterPoint, format_tick_label, project_markers};
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::{AxisStyle, ScatterChart, ScatterChartConfig, TooltipStyle};

/// Baseline shift of bottom-axis labels, in ems.
const BOTTOM_LABEL_BASELINE_EM: f64 = 0.71;
/// Baseline shift of left-axis labels, in ems.
const LEFT_LABEL_BASELINE_EM: f64 = 0.32;
/// Gap between the tooltip box bottom edge and its text baseline.
const TOOLTIP_TEXT_INSET_PX: f64 = 5.0;

impl<R: Renderer> ScatterChart<R> {
    /// Builds the full scene for the current state: axes and titles, one
    /// circle per finite sample and a tooltip per hovered marker.
    ///
    /// Returns `None` while the container is unmeasured.
    pub fn build_render_frame(&self) -> ChartResult<Option<RenderFrame>> {
        let Some(layout) = self.layout()? else {
            return Ok(None);
        };
        let frame = build_scatter_frame(self.config(), self.points(), &layout, self.hover_state());
        frame.validate()?;
        Ok(Some(frame))
    }
}

/// Pure scene construction. Primitives are laid out in plot-local coordinates
/// and then shifted by the plot origin.
pub(super) fn build_scatter_frame(
    config: &ScatterChartConfig,
    points: &[ScatterPoint],
    layout: &ScatterLayout,
    hover: &HoverState,
) -> RenderFrame {
    let mut local = RenderFrame::new(layout.viewport);
    let (width, height) = (layout.chart_width(), layout.chart_height());

    append_bottom_axis(&mut local, layout.x_scale, width, height, &config.axis);
    append_left_axis(&mut local, layout.y_scale, height, &config.axis);
    append_axis_titles(&mut local, config, width, height);

    let markers = project_markers(points, layout);
    append_markers(&mut local, config, &markers, hover);
    append_tooltips(&mut local, &config.tooltip, points, &markers, hover);

    let mut frame = RenderFrame::new(layout.viewport);
    frame.append_translated(&local, layout.plot.left, layout.plot.top);
    frame
}

fn append_bottom_axis(
    frame: &mut RenderFrame,
    scale: LinearScale,
    width: f64,
    height: f64,
    axis: &AxisStyle,
) {
    let tick = axis.tick_size_px;
    let domain_line = |x1, y1, x2, y2| LinePrimitive::new(x1, y1, x2, y2, axis.line_width, axis.line_color);

    frame.push_line(CanvasLayerKind::Axis, domain_line(0.0, height, width, height));
    frame.push_line(CanvasLayerKind::Axis, domain_line(0.0, height, 0.0, height + tick));
    frame.push_line(CanvasLayerKind::Axis, domain_line(width, height, width, height + tick));

    let step = scale.tick_step(axis.tick_count);
    let label_y =
        height + tick + axis.tick_padding_px + BOTTOM_LABEL_BASELINE_EM * axis.tick_font_size_px;
    for (value, x) in scale.tick_positions(axis.tick_count) {
        frame.push_line(CanvasLayerKind::Axis, domain_line(x, height, x, height + tick));
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_tick_label(value, step),
                x,
                label_y,
                axis.tick_font_size_px,
                axis.label_color,
                TextHAlign::Center,
            ),
        );
    }
}

fn append_left_axis(frame: &mut RenderFrame, scale: LinearScale, height: f64, axis: &AxisStyle) {
    let tick = axis.tick_size_px;
    let domain_line = |x1, y1, x2, y2| LinePrimitive::new(x1, y1, x2, y2, axis.line_width, axis.line_color);

    frame.push_line(CanvasLayerKind::Axis, domain_line(0.0, 0.0, 0.0, height));
    frame.push_line(CanvasLayerKind::Axis, domain_line(-tick, 0.0, 0.0, 0.0));
    frame.push_line(CanvasLayerKind::Axis, domain_line(-tick, height, 0.0, height));

    let step = scale.tick_step(axis.tick_count);
    let label_x = -(tick + axis.tick_padding_px);
    let baseline = LEFT_LABEL_BASELINE_EM * axis.tick_font_size_px;
    for (value, y) in scale.tick_positions(axis.tick_count) {
        frame.push_line(CanvasLayerKind::Axis, domain_line(-tick, y, 0.0, y));
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_tick_label(value, step),
                label_x,
                y + baseline,
                axis.tick_font_size_px,
                axis.label_color,
                TextHAlign::Right,
            ),
        );
    }
}

fn append_axis_titles(frame: &mut RenderFrame, config: &ScatterChartConfig, width: f64, height: f64) {
    let axis = &config.axis;
    if !config.x_label.is_empty() {
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                config.x_label.clone(),
                width / 2.0,
                height + axis.title_offset_px,
                axis.title_font_size_px,
                axis.label_color,
                TextHAlign::Center,
            )
            .with_weight(axis.title_font_weight),
        );
    }
    if !config.y_label.is_empty() {
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                config.y_label.clone(),
                -axis.title_offset_px,
                height / 2.0,
                axis.title_font_size_px,
                axis.label_color,
                TextHAlign::Center,
            )
            .with_weight(axis.title_font_weight)
            .with_rotation(-90.0),
        );
    }
}

fn append_markers(
    frame: &mut RenderFrame,
    config: &ScatterChartConfig,
    markers: &[MarkerGeometry],
    hover: &HoverState,
) {
    let base = config.marker.base_visual();
    for marker in markers {
        let visual = hover.visual(marker.index).unwrap_or(base);
        frame.push_circle(
            CanvasLayerKind::Series,
            CirclePrimitive::new(marker.x, marker.y, visual.radius, config.color)
                .with_opacity(visual.opacity)
                .with_stroke(config.marker.stroke),
        );
    }
}

/// One tooltip per hovered marker, anchored above the marker's resting
/// center so it does not follow the radius transition.
fn append_tooltips(
    frame: &mut RenderFrame,
    style: &TooltipStyle,
    points: &[ScatterPoint],
    markers: &[MarkerGeometry],
    hover: &HoverState,
) {
    for marker in markers.iter().filter(|marker| hover.has_tooltip(marker.index)) {
        let Some(point) = points.get(marker.index) else {
            continue;
        };
        let anchor_x = marker.x;
        let anchor_y = marker.y - style.offset_px;

        frame.push_rect(
            CanvasLayerKind::Overlay,
            RectPrimitive::new(
                anchor_x - style.width_px / 2.0,
                anchor_y - style.height_px + TOOLTIP_TEXT_INSET_PX,
                style.width_px,
                style.height_px,
                style.background,
            )
            .with_corner_radius(style.corner_radius_px)
            .with_stroke(style.border),
        );
        frame.push_text(
            CanvasLayerKind::Overlay,
            TextPrimitive::new(
                tooltip_text(point.y, style.precision),
                anchor_x,
                anchor_y - TOOLTIP_TEXT_INSET_PX,
                style.font_size_px,
                style.text_color,
                TextHAlign::Center,
            )
            .with_weight(style.font_weight),
        );
    }
}

/// Tooltip value: the sample's y with fixed precision.
#[must_use]
pub fn tooltip_text(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::tooltip_text;

    #[test]
    fn tooltip_text_uses_fixed_precision() {
        assert_eq!(tooltip_text(20.0, 1), "20.0");
        assert_eq!(tooltip_text(5.0, 1), "5.0");
        assert_eq!(tooltip_text(3.14159, 2), "3.14");
    }
}
