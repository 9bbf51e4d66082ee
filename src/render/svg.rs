//! SVG document backend.

use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer, StrokeStyle, TextHAlign,
    TextPrimitive,
};

/// Serializes each frame into a standalone SVG document.
///
/// Layers are emitted as `<g>` groups in paint order, so later layers stack
/// above earlier ones exactly as in the frame.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the last successful render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = frame_to_svg(frame);
        Ok(())
    }
}

/// Converts a frame into SVG markup without validating it.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame) -> String {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    for layer in &frame.layers {
        if layer.is_empty() {
            continue;
        }
        let _ = writeln!(out, r#"<g data-layer="{:?}">"#, layer.kind);
        for rect in &layer.rects {
            write_rect(&mut out, rect);
        }
        for line in &layer.lines {
            write_line(&mut out, line);
        }
        for circle in &layer.circles {
            write_circle(&mut out, circle);
        }
        for text in &layer.texts {
            write_text(&mut out, text);
        }
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn stroke_attrs(stroke: Option<StrokeStyle>) -> String {
    match stroke {
        Some(stroke) => format!(
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color.to_css(),
            stroke.width
        ),
        None => String::new(),
    }
}

fn write_rect(out: &mut String, rect: &RectPrimitive) {
    let radius = if rect.corner_radius > 0.0 {
        format!(r#" rx="{}""#, rect.corner_radius)
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}"{radius} fill="{}"{}/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        rect.fill.to_css(),
        stroke_attrs(rect.stroke)
    );
}

fn write_line(out: &mut String, line: &LinePrimitive) {
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        line.color.to_css(),
        line.stroke_width
    );
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) {
    let _ = writeln!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" opacity="{}"{}/>"#,
        circle.cx,
        circle.cy,
        circle.radius,
        circle.fill.to_css(),
        circle.opacity,
        stroke_attrs(circle.stroke)
    );
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let placement = if text.rotation_deg == 0.0 {
        format!(r#"x="{}" y="{}""#, text.x, text.y)
    } else {
        format!(
            r#"transform="translate({},{}) rotate({})""#,
            text.x, text.y, text.rotation_deg
        )
    };
    let _ = writeln!(
        out,
        r#"<text {placement} text-anchor="{anchor}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
        text.font_size_px,
        text.font_weight,
        text.color.to_css(),
        escape_text(&text.text)
    );
}

fn escape_text(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_text;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_text("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
