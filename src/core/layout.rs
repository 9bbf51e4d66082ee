use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::scale::LinearScale;
use crate::core::types::{Margins, PlotArea, ScatterPoint, Viewport};
use crate::error::ChartResult;

/// Head-room added above the largest sample on both axes.
pub const DOMAIN_PADDING_RATIO: f64 = 0.1;

/// Largest finite value, or `0.0` when there is none.
#[must_use]
pub fn max_or_zero(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map_or(0.0, OrderedFloat::into_inner)
}

/// Padded upper domain bound: `max_or_zero(values) * 1.1`, saturated to the
/// finite `f64` range when the padding overflows.
#[must_use]
pub fn padded_domain_end(values: impl IntoIterator<Item = f64>) -> f64 {
    (max_or_zero(values) * (1.0 + DOMAIN_PADDING_RATIO)).clamp(f64::MIN, f64::MAX)
}

/// Scales and plot rectangle for one scatter render pass.
///
/// This is a pure function of the current points and viewport and is rebuilt
/// on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterLayout {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl ScatterLayout {
    /// Computes the layout, or `None` while the viewport is unmeasured.
    pub fn compute(
        points: &[ScatterPoint],
        viewport: Viewport,
        margins: Margins,
    ) -> ChartResult<Option<Self>> {
        if !viewport.is_valid() {
            trace!(
                width = viewport.width,
                height = viewport.height,
                "skip scatter layout for unmeasured viewport"
            );
            return Ok(None);
        }

        let plot = PlotArea::from_viewport(viewport, margins);
        let x_end = padded_domain_end(points.iter().map(|point| point.x));
        let y_end = padded_domain_end(points.iter().map(|point| point.y));

        let x_scale = LinearScale::new((0.0, x_end), (0.0, plot.chart_width))?;
        let y_scale = LinearScale::new((0.0, y_end), (plot.chart_height, 0.0))?;

        Ok(Some(Self {
            viewport,
            plot,
            x_scale,
            y_scale,
        }))
    }

    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.plot.chart_width
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.plot.chart_height
    }

    /// Plot-local pixel position of a sample.
    #[must_use]
    pub fn project(&self, point: &ScatterPoint) -> (f64, f64) {
        (self.x_scale.map(point.x), self.y_scale.map(point.y))
    }

    /// Viewport pixel position of a sample.
    #[must_use]
    pub fn project_to_viewport(&self, point: &ScatterPoint) -> (f64, f64) {
        let (x, y) = self.project(point);
        self.plot.to_viewport(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::{max_or_zero, padded_domain_end};

    #[test]
    fn max_or_zero_ignores_non_finite_values() {
        assert_eq!(max_or_zero([1.0, f64::NAN, 3.0, f64::INFINITY]), 3.0);
        assert_eq!(max_or_zero(std::iter::empty()), 0.0);
        assert_eq!(max_or_zero([f64::NAN]), 0.0);
    }

    #[test]
    fn negative_maxima_are_kept() {
        assert_eq!(max_or_zero([-4.0, -2.0]), -2.0);
        assert!((padded_domain_end([-4.0, -2.0]) + 2.2).abs() <= 1e-12);
    }

    #[test]
    fn padding_saturates_near_f64_max() {
        assert_eq!(padded_domain_end([1.7e308]), f64::MAX);
        assert_eq!(padded_domain_end([-1.7e308]), f64::MIN);
    }
}
