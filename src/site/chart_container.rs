use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, Color, RectPrimitive, RenderFrame, StrokeStyle, TextHAlign, TextPrimitive,
};

/// Card chrome around a titled chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerStyle {
    pub fill: Color,
    pub border: StrokeStyle,
    pub corner_radius_px: f64,
    pub padding_px: f64,
    pub title_color: Color,
    pub title_font_size_px: f64,
    pub title_font_weight: u16,
    pub title_line_height_px: f64,
    /// Space between the title line and the content.
    pub title_gap_px: f64,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            // #111827
            fill: Color::rgb(17.0 / 255.0, 24.0 / 255.0, 39.0 / 255.0),
            // #374151
            border: StrokeStyle::new(Color::rgb(55.0 / 255.0, 65.0 / 255.0, 81.0 / 255.0), 1.0),
            corner_radius_px: 8.0,
            padding_px: 24.0,
            // #7dd3fc
            title_color: Color::rgb(125.0 / 255.0, 211.0 / 255.0, 252.0 / 255.0),
            title_font_size_px: 20.0,
            title_font_weight: 600,
            title_line_height_px: 28.0,
            title_gap_px: 16.0,
        }
    }
}

impl ContainerStyle {
    /// Offset of the content origin from the card origin.
    #[must_use]
    pub fn content_offset(&self) -> (f64, f64) {
        (
            self.padding_px,
            self.padding_px + self.title_line_height_px + self.title_gap_px,
        )
    }
}

/// Titled card that frames arbitrary nested content.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartContainer {
    title: String,
    style: ContainerStyle,
}

impl ChartContainer {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            style: ContainerStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ContainerStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn style(&self) -> &ContainerStyle {
        &self.style
    }

    /// Size available to nested content inside a card of `viewport` size.
    #[must_use]
    pub fn content_viewport(&self, viewport: Viewport) -> Viewport {
        let (left, top) = self.style.content_offset();
        let shrink = |extent: u32, used: f64| {
            (f64::from(extent) - used).max(0.0).floor() as u32
        };
        Viewport::new(
            shrink(viewport.width, left + self.style.padding_px),
            shrink(viewport.height, top + self.style.padding_px),
        )
    }

    /// Card, title, then `content` shifted into the content box.
    pub fn compose(&self, viewport: Viewport, content: &RenderFrame) -> ChartResult<RenderFrame> {
        if content.is_empty() {
            return Err(ChartError::MissingContent {
                title: self.title.clone(),
            });
        }

        let style = &self.style;
        let mut frame = RenderFrame::new(viewport).with_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
                style.fill,
            )
            .with_corner_radius(style.corner_radius_px)
            .with_stroke(style.border),
        );

        if !self.title.is_empty() {
            let baseline = style.padding_px + (style.title_line_height_px + style.title_font_size_px) / 2.0;
            frame.push_text(
                CanvasLayerKind::Background,
                TextPrimitive::new(
                    self.title.clone(),
                    style.padding_px,
                    baseline,
                    style.title_font_size_px,
                    style.title_color,
                    TextHAlign::Left,
                )
                .with_weight(style.title_font_weight),
            );
        }

        let (dx, dy) = style.content_offset();
        frame.append_translated(content, dx, dy);
        debug!(title = %self.title, "compose chart container");
        frame.validate()?;
        Ok(frame)
    }
}
