use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive,
};

/// Primitives of one paint layer. Within a layer, rects paint first, then
/// lines, circles and texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one draw pass.
///
/// Every render builds a fresh frame; nothing is patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        if let Some(index) = self.layers.iter().position(|layer| layer.kind == kind) {
            return &mut self.layers[index];
        }
        let rank = |candidate: CanvasLayerKind| {
            CanvasLayerKind::ORDER
                .iter()
                .position(|ordered| *ordered == candidate)
                .unwrap_or(usize::MAX)
        };
        let insert_at = self
            .layers
            .iter()
            .position(|layer| rank(layer.kind) > rank(kind))
            .unwrap_or(self.layers.len());
        self.layers.insert(insert_at, LayerPrimitives::empty(kind));
        &mut self.layers[insert_at]
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    #[must_use]
    pub fn with_line(mut self, kind: CanvasLayerKind, line: LinePrimitive) -> Self {
        self.push_line(kind, line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, kind: CanvasLayerKind, rect: RectPrimitive) -> Self {
        self.push_rect(kind, rect);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, kind: CanvasLayerKind, circle: CirclePrimitive) -> Self {
        self.push_circle(kind, circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, kind: CanvasLayerKind, text: TextPrimitive) -> Self {
        self.push_text(kind, text);
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.layers.iter().flat_map(|layer| layer.rects.iter())
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.layers.iter().flat_map(|layer| layer.circles.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    /// Appends every primitive of `other`, shifted by `(dx, dy)`, into the
    /// matching layers of this frame.
    pub fn append_translated(&mut self, other: &RenderFrame, dx: f64, dy: f64) {
        for source in &other.layers {
            let target = self.layer_mut(source.kind);
            target
                .rects
                .extend(source.rects.iter().map(|rect| rect.translated(dx, dy)));
            target
                .lines
                .extend(source.lines.iter().map(|line| line.translated(dx, dy)));
            target.circles.extend(
                source
                    .circles
                    .iter()
                    .map(|circle| circle.translated(dx, dy)),
            );
            target.texts.extend(
                source
                    .texts
                    .iter()
                    .map(|text| text.clone().translated(dx, dy)),
            );
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for rect in &layer.rects {
                rect.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::render::{CanvasLayerKind, CirclePrimitive, Color, TextHAlign, TextPrimitive};

    #[test]
    fn append_translated_shifts_into_matching_layers() {
        let inner = RenderFrame::new(Viewport::new(100, 100))
            .with_circle(
                CanvasLayerKind::Series,
                CirclePrimitive::new(10.0, 20.0, 5.0, Color::WHITE),
            )
            .with_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new("0", 1.0, 2.0, 11.0, Color::WHITE, TextHAlign::Center),
            );

        let mut outer = RenderFrame::new(Viewport::new(200, 200));
        outer.append_translated(&inner, 24.0, 68.0);

        let circle = outer.circles().next().expect("circle copied");
        assert_eq!((circle.cx, circle.cy), (34.0, 88.0));
        let text = outer
            .layer(CanvasLayerKind::Axis)
            .and_then(|layer| layer.texts.first())
            .expect("text copied into axis layer");
        assert_eq!((text.x, text.y), (25.0, 70.0));
    }

    #[test]
    fn new_frame_is_empty_and_ordered() {
        let frame = RenderFrame::new(Viewport::new(10, 10));
        assert!(frame.is_empty());
        let kinds: Vec<_> = frame.layers.iter().map(|layer| layer.kind).collect();
        assert_eq!(kinds, CanvasLayerKind::ORDER.to_vec());
    }
}
