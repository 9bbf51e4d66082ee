use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::core::{MarkerGeometry, ScatterLayout, ScatterPoint, Viewport, project_markers};
use crate::error::ChartResult;
use crate::interaction::{HoverPhase, HoverState, MarkerVisual};
use crate::render::Renderer;

use super::ScatterChartConfig;

/// Result of one render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A frame was built and handed to the renderer.
    Drawn { markers: usize },
    /// The container has no measured size yet; nothing was drawn.
    SkippedUnmeasured,
    /// The chart was unmounted; nothing was drawn.
    Detached,
}

/// Interactive scatter plot bound to one host container.
///
/// The chart is mounted on construction: it owns the container size
/// observation and the marker hover listeners until [`ScatterChart::unmount`].
/// Every data, size or configuration change invalidates the whole scene; the
/// next render rebuilds it from scratch.
pub struct ScatterChart<R: Renderer> {
    renderer: R,
    config: ScatterChartConfig,
    viewport: Viewport,
    points: Vec<ScatterPoint>,
    hover: HoverState,
    mounted: bool,
}

impl<R: Renderer> ScatterChart<R> {
    /// Mounts a chart into a container whose current measured size is
    /// `viewport`. An unmeasured (zero) size is accepted; rendering is
    /// skipped until a resize reports a real size.
    pub fn new(renderer: R, config: ScatterChartConfig, viewport: Viewport) -> ChartResult<Self> {
        config.validate()?;
        let hover = HoverState::new(
            config.marker.base_visual(),
            config.marker.hover_visual(),
            config.hover_transition,
        );
        debug!(
            width = viewport.width,
            height = viewport.height,
            "mount scatter chart"
        );
        Ok(Self {
            renderer,
            config,
            viewport,
            points: Vec::new(),
            hover,
            mounted: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScatterChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScatterChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.hover.reconfigure(
            config.marker.base_visual(),
            config.marker.hover_visual(),
            config.hover_transition,
        );
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Replaces the sample set. Hover state and tooltips are discarded.
    pub fn set_data(&mut self, points: Vec<ScatterPoint>) {
        if !self.mounted {
            debug!("ignore set_data on unmounted scatter chart");
            return;
        }
        let non_finite = points.iter().filter(|point| !point.is_finite()).count();
        if non_finite > 0 {
            warn!(non_finite, "non-finite scatter samples will not be drawn");
        }
        debug!(count = points.len(), "set scatter data");
        self.hover.reset(points.len());
        self.points = points;
    }

    /// Container size notification. Hover state and tooltips are discarded.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if !self.mounted {
            debug!("ignore resize on unmounted scatter chart");
            return;
        }
        if viewport == self.viewport {
            return;
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "scatter container resized"
        );
        self.viewport = viewport;
        self.hover.reset(self.points.len());
    }

    /// Scales and plot rectangle for the current state, or `None` while the
    /// container is unmeasured.
    pub fn layout(&self) -> ChartResult<Option<ScatterLayout>> {
        ScatterLayout::compute(&self.points, self.viewport, self.config.margins)
    }

    /// Plot-local marker positions for the current state.
    pub fn marker_positions(&self) -> ChartResult<Vec<MarkerGeometry>> {
        Ok(match self.layout()? {
            Some(layout) => project_markers(&self.points, &layout),
            None => Vec::new(),
        })
    }

    #[must_use]
    pub fn marker_phase(&self, index: usize) -> Option<HoverPhase> {
        self.hover.phase(index)
    }

    #[must_use]
    pub fn marker_visual(&self, index: usize) -> Option<MarkerVisual> {
        self.hover.visual(index)
    }

    #[must_use]
    pub fn has_tooltip(&self, index: usize) -> bool {
        self.hover.has_tooltip(index)
    }

    /// Number of tooltips currently shown.
    #[must_use]
    pub fn tooltip_count(&self) -> usize {
        self.hover.hovered_indices().count()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.hover.is_animating()
    }

    pub(super) fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    /// Pointer entered the marker at `index`.
    pub fn marker_pointer_enter(&mut self, index: usize) -> ChartResult<()> {
        if !self.mounted {
            return Ok(());
        }
        self.hover.on_marker_enter(index)
    }

    /// Pointer left the marker at `index`.
    pub fn marker_pointer_leave(&mut self, index: usize) -> ChartResult<()> {
        if !self.mounted {
            return Ok(());
        }
        self.hover.on_marker_leave(index)
    }

    /// Pointer moved to `(x, y)` in container pixels. The topmost marker under
    /// the pointer, if any, becomes the hover target.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        if !self.mounted {
            return Ok(None);
        }
        let target = self.hit_test(x, y)?;
        self.hover.on_pointer_target(target)?;
        Ok(target)
    }

    /// Pointer left the chart container.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        if !self.mounted {
            return Ok(());
        }
        self.hover.on_pointer_target(None)
    }

    /// Topmost marker whose displayed circle contains `(x, y)`.
    pub fn hit_test(&self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        let Some(layout) = self.layout()? else {
            return Ok(None);
        };
        if !x.is_finite() || !y.is_finite() {
            return Ok(None);
        }

        let (local_x, local_y) = (x - layout.plot.left, y - layout.plot.top);
        let base_radius = self.config.marker.radius;
        let hit = project_markers(&self.points, &layout)
            .into_iter()
            .filter_map(|marker| {
                let radius = self
                    .hover
                    .visual(marker.index)
                    .map_or(base_radius, |visual| visual.radius);
                let distance_sq = (marker.x - local_x).powi(2) + (marker.y - local_y).powi(2);
                (distance_sq <= radius * radius).then_some(marker.index)
            })
            // Later markers paint on top.
            .last();
        Ok(hit)
    }

    /// Moves hover transitions forward by `delta`. Returns `true` while any
    /// transition is still running, i.e. while the host should keep
    /// rendering.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.mounted {
            return false;
        }
        let running = self.hover.advance(delta);
        trace!(delta_ms = delta.as_millis() as u64, running, "advance hover transitions");
        running
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<RenderOutcome> {
        if !self.mounted {
            debug!("skip render of unmounted scatter chart");
            return Ok(RenderOutcome::Detached);
        }
        let Some(frame) = self.build_render_frame()? else {
            debug!("skip render until scatter container is measured");
            return Ok(RenderOutcome::SkippedUnmeasured);
        };
        let markers = frame.circles().count();
        self.renderer.render(&frame)?;
        Ok(RenderOutcome::Drawn { markers })
    }

    /// Detaches size observation and hover listeners and drops pending
    /// transitions and tooltips. Later events are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.hover.release();
        debug!("unmount scatter chart");
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
