#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::layout::ScatterLayout;
use crate::core::types::ScatterPoint;

/// Plot-local position of one marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerGeometry {
    /// Index of the source sample.
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Projects samples into marker positions, skipping non-finite samples and
/// samples whose pixel position overflows.
///
/// Output order follows input order so later markers stack above earlier ones.
#[must_use]
pub fn project_markers(points: &[ScatterPoint], layout: &ScatterLayout) -> Vec<MarkerGeometry> {
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .enumerate()
            .filter_map(|(index, point)| project_single_marker(index, point, layout))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| project_single_marker(index, point, layout))
            .collect()
    }
}

fn project_single_marker(
    index: usize,
    point: &ScatterPoint,
    layout: &ScatterLayout,
) -> Option<MarkerGeometry> {
    if !point.is_finite() {
        return None;
    }
    let (x, y) = layout.project(point);
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(MarkerGeometry { index, x, y })
}
