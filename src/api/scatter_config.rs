use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TICK_COUNT, MAX_TICK_COUNT, Margins};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverTransition, MarkerVisual};
use crate::render::{Color, StrokeStyle};

/// Default violet fill of scatter markers (`#8b5cf6`).
pub const DEFAULT_MARKER_COLOR: Color = Color::rgb(139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0);

/// Marker geometry at rest and while hovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub opacity: f64,
    pub hover_radius: f64,
    pub hover_opacity: f64,
    pub stroke: StrokeStyle,
}

impl MarkerStyle {
    #[must_use]
    pub fn base_visual(self) -> MarkerVisual {
        MarkerVisual::new(self.radius, self.opacity)
    }

    #[must_use]
    pub fn hover_visual(self) -> MarkerVisual {
        MarkerVisual::new(self.hover_radius, self.hover_opacity)
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 5.0,
            opacity: 0.7,
            hover_radius: 8.0,
            hover_opacity: 1.0,
            // #1f2937
            stroke: StrokeStyle::new(Color::rgb(31.0 / 255.0, 41.0 / 255.0, 55.0 / 255.0), 1.0),
        }
    }
}

/// Axis line, tick and title styling tuned for a dark background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub label_color: Color,
    pub tick_font_size_px: f64,
    pub tick_count: usize,
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub title_font_size_px: f64,
    pub title_font_weight: u16,
    /// Distance from the axis line to the title anchor.
    pub title_offset_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgba(1.0, 1.0, 1.0, 0.3),
            line_width: 1.0,
            label_color: Color::WHITE,
            tick_font_size_px: 11.0,
            tick_count: DEFAULT_TICK_COUNT,
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            title_font_size_px: 12.0,
            title_font_weight: 500,
            title_offset_px: 45.0,
        }
    }
}

/// Floating value box shown above a hovered marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    /// Vertical distance between marker center and tooltip anchor.
    pub offset_px: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub corner_radius_px: f64,
    pub background: Color,
    pub border: StrokeStyle,
    pub text_color: Color,
    pub font_size_px: f64,
    pub font_weight: u16,
    /// Fractional digits of the displayed y value.
    pub precision: usize,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        // #69b3a2
        let accent = Color::rgb(105.0 / 255.0, 179.0 / 255.0, 162.0 / 255.0);
        Self {
            offset_px: 15.0,
            width_px: 60.0,
            height_px: 35.0,
            corner_radius_px: 5.0,
            background: Color::rgba(31.0 / 255.0, 41.0 / 255.0, 55.0 / 255.0, 0.95),
            border: StrokeStyle::new(accent, 2.0),
            text_color: accent,
            font_size_px: 14.0,
            font_weight: 700,
            precision: 1,
        }
    }
}

/// Public scatter chart configuration.
///
/// Serializable so hosts can persist chart setup; every field has a default,
/// so partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub marker: MarkerStyle,
    #[serde(default)]
    pub hover_transition: HoverTransition,
    #[serde(default)]
    pub axis: AxisStyle,
    #[serde(default)]
    pub tooltip: TooltipStyle,
}

fn default_x_label() -> String {
    "X Axis".to_owned()
}

fn default_y_label() -> String {
    "Y Axis".to_owned()
}

fn default_color() -> Color {
    DEFAULT_MARKER_COLOR
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            x_label: default_x_label(),
            y_label: default_y_label(),
            color: default_color(),
            margins: Margins::default(),
            marker: MarkerStyle::default(),
            hover_transition: HoverTransition::default(),
            axis: AxisStyle::default(),
            tooltip: TooltipStyle::default(),
        }
    }
}

impl ScatterChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the marker fill from a CSS color string such as `#22d3ee`.
    pub fn with_css_color(self, color: &str) -> ChartResult<Self> {
        Ok(self.with_color(Color::from_css(color)?))
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_marker_style(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_hover_transition(mut self, transition: HoverTransition) -> Self {
        self.hover_transition = transition;
        self
    }

    #[must_use]
    pub fn with_axis_style(mut self, axis: AxisStyle) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_tooltip_style(mut self, tooltip: TooltipStyle) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.color.validate()?;
        if !self.margins.is_valid() {
            return Err(ChartError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }

        let marker = self.marker;
        for (name, radius) in [("radius", marker.radius), ("hover_radius", marker.hover_radius)] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "marker {name} must be finite and > 0"
                )));
            }
        }
        for (name, opacity) in [
            ("opacity", marker.opacity),
            ("hover_opacity", marker.hover_opacity),
        ] {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(ChartError::InvalidData(format!(
                    "marker {name} must be in [0, 1]"
                )));
            }
        }
        marker.stroke.validate()?;

        if !self.hover_transition.easing.is_valid() {
            return Err(ChartError::InvalidData(
                "hover easing control points are invalid".to_owned(),
            ));
        }

        let axis = self.axis;
        axis.line_color.validate()?;
        axis.label_color.validate()?;
        if axis.tick_count > MAX_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "axis tick_count must be <= {MAX_TICK_COUNT}"
            )));
        }
        for (name, value) in [
            ("tick_font_size_px", axis.tick_font_size_px),
            ("title_font_size_px", axis.title_font_size_px),
            ("line_width", axis.line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "axis {name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("tick_size_px", axis.tick_size_px),
            ("tick_padding_px", axis.tick_padding_px),
            ("title_offset_px", axis.title_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "axis {name} must be finite and >= 0"
                )));
            }
        }

        let tooltip = self.tooltip;
        tooltip.background.validate()?;
        tooltip.text_color.validate()?;
        tooltip.border.validate()?;
        for (name, value) in [
            ("width_px", tooltip.width_px),
            ("height_px", tooltip.height_px),
            ("font_size_px", tooltip.font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "tooltip {name} must be finite and > 0"
                )));
            }
        }
        if tooltip.precision > 12 {
            return Err(ChartError::InvalidData(
                "tooltip precision must be <= 12".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}
