mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod svg;
mod text_metrics;

pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, StrokeStyle, TextHAlign, TextPrimitive,
};
pub use svg::{SvgRenderer, frame_to_svg};
pub use text_metrics::estimate_text_width_px;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart, hover and scene logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
