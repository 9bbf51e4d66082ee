use serde::{Deserialize, Serialize};

/// Draw layers of a frame, painted bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Card backgrounds, scene dimming.
    Background,
    /// Axis lines, tick labels and axis titles.
    Axis,
    /// Scatter markers, hotspot icons.
    Series,
    /// Tooltips, info cards and buttons.
    Overlay,
}

impl CanvasLayerKind {
    /// Canonical paint order.
    pub const ORDER: [Self; 4] = [Self::Background, Self::Axis, Self::Series, Self::Overlay];
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn overlay_paints_after_series() {
        let position = |kind| {
            CanvasLayerKind::ORDER
                .iter()
                .position(|candidate| *candidate == kind)
                .expect("layer is part of canonical order")
        };
        assert!(position(CanvasLayerKind::Axis) < position(CanvasLayerKind::Series));
        assert!(position(CanvasLayerKind::Series) < position(CanvasLayerKind::Overlay));
    }
}
