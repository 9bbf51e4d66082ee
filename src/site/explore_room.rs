//! Explore-room scene: a background that zooms into one of several hotspots
//! and reveals an info card once the zoom has settled.
//!
//! ```text
//! Idle --click(id)--> Zooming --info delay--> InfoShown
//!   ^                    |                        |
//!   +------- exit -------+------------------------+
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{CancellableTimer, Easing, Interpolate, Tween};
use crate::error::{ChartError, ChartResult};

use super::hotspots::{Hotspot, HotspotRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplorePhase {
    Idle,
    Zooming,
    InfoShown,
}

/// Durations, curves and target values of the scene animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreRoomTiming {
    pub zoom_duration_ms: u64,
    pub zoom_easing: Easing,
    pub zoom_scale: f64,
    pub zoom_opacity: f64,
    /// Delay between a hotspot click and the info card appearing.
    pub info_delay_ms: u64,
    pub overlay_duration_ms: u64,
    pub overlay_easing: Easing,
    pub overlay_idle_opacity: f64,
    pub overlay_zoomed_opacity: f64,
    pub card_duration_ms: u64,
    pub card_easing: Easing,
}

impl Default for ExploreRoomTiming {
    fn default() -> Self {
        Self {
            zoom_duration_ms: 1_200,
            zoom_easing: Easing::CINEMATIC,
            zoom_scale: 2.2,
            zoom_opacity: 0.9,
            info_delay_ms: 900,
            overlay_duration_ms: 800,
            overlay_easing: Easing::EaseInOut,
            overlay_idle_opacity: 0.1,
            overlay_zoomed_opacity: 0.25,
            card_duration_ms: 600,
            card_easing: Easing::EaseOut,
        }
    }
}

impl ExploreRoomTiming {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, easing) in [
            ("zoom_easing", self.zoom_easing),
            ("overlay_easing", self.overlay_easing),
            ("card_easing", self.card_easing),
        ] {
            if !easing.is_valid() {
                return Err(ChartError::InvalidData(format!(
                    "{name} control points are invalid"
                )));
            }
        }
        if !self.zoom_scale.is_finite() || self.zoom_scale <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom_scale must be finite and > 0".to_owned(),
            ));
        }
        for (name, opacity) in [
            ("zoom_opacity", self.zoom_opacity),
            ("overlay_idle_opacity", self.overlay_idle_opacity),
            ("overlay_zoomed_opacity", self.overlay_zoomed_opacity),
        ] {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(ChartError::InvalidData(format!("{name} must be in [0, 1]")));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let timing: Self = serde_json::from_str(input)?;
        timing.validate()?;
        Ok(timing)
    }
}

/// Transform applied to the scene background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTransform {
    pub scale: f64,
    pub opacity: f64,
    /// Horizontal pan in percent of the background width.
    pub pan_x_pct: f64,
    /// Vertical pan in percent of the background height.
    pub pan_y_pct: f64,
}

impl BackgroundTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        opacity: 1.0,
        pan_x_pct: 0.0,
        pan_y_pct: 0.0,
    };

    #[must_use]
    pub fn zoomed(hotspot: &Hotspot, timing: &ExploreRoomTiming) -> Self {
        Self {
            scale: timing.zoom_scale,
            opacity: timing.zoom_opacity,
            pan_x_pct: hotspot.pan_x_pct,
            pan_y_pct: hotspot.pan_y_pct,
        }
    }
}

impl Interpolate for BackgroundTransform {
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        Self {
            scale: f64::interpolate(from.scale, to.scale, t),
            opacity: f64::interpolate(from.opacity, to.opacity, t),
            pan_x_pct: f64::interpolate(from.pan_x_pct, to.pan_x_pct, t),
            pan_y_pct: f64::interpolate(from.pan_y_pct, to.pan_y_pct, t),
        }
    }
}

/// Entrance and exit animation state of the info card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfoCardPresentation {
    pub opacity: f64,
    pub offset_y_px: f64,
    pub scale: f64,
}

impl InfoCardPresentation {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset_y_px: 40.0,
        scale: 0.95,
    };

    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y_px: 0.0,
        scale: 1.0,
    };
}

impl Interpolate for InfoCardPresentation {
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        Self {
            opacity: f64::interpolate(from.opacity, to.opacity, t),
            offset_y_px: f64::interpolate(from.offset_y_px, to.offset_y_px, t),
            scale: f64::interpolate(from.scale, to.scale, t),
        }
    }
}

/// Explore-room scene state. Time only moves through
/// [`ExploreRoom::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExploreRoom {
    registry: HotspotRegistry,
    timing: ExploreRoomTiming,
    phase: ExplorePhase,
    selected: Option<usize>,
    /// Hotspot whose card is still animating out after an exit.
    departing: Option<usize>,
    background: Tween<BackgroundTransform>,
    overlay_opacity: Tween<f64>,
    card: Tween<InfoCardPresentation>,
    info_timer: CancellableTimer,
    mounted: bool,
}

impl Default for ExploreRoom {
    fn default() -> Self {
        let timing = ExploreRoomTiming::default();
        Self::with_parts(HotspotRegistry::default(), timing)
    }
}

impl ExploreRoom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: ExploreRoomTiming) -> ChartResult<Self> {
        timing.validate()?;
        Ok(Self::with_parts(HotspotRegistry::default(), timing))
    }

    fn with_parts(registry: HotspotRegistry, timing: ExploreRoomTiming) -> Self {
        Self {
            registry,
            timing,
            phase: ExplorePhase::Idle,
            selected: None,
            departing: None,
            background: Tween::settled(BackgroundTransform::IDENTITY),
            overlay_opacity: Tween::settled(timing.overlay_idle_opacity),
            card: Tween::settled(InfoCardPresentation::HIDDEN),
            info_timer: CancellableTimer::new(Duration::from_millis(timing.info_delay_ms)),
            mounted: true,
        }
    }

    #[must_use]
    pub fn hotspots(&self) -> &HotspotRegistry {
        &self.registry
    }

    #[must_use]
    pub fn timing(&self) -> &ExploreRoomTiming {
        &self.timing
    }

    #[must_use]
    pub fn phase(&self) -> ExplorePhase {
        self.phase
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn selected_hotspot(&self) -> Option<&Hotspot> {
        self.selected
            .and_then(|index| self.registry.get_index(index))
    }

    /// Zooms into the hotspot `id` and schedules the info card.
    ///
    /// Returns `Ok(false)` when the click is ignored: hotspot buttons only
    /// exist while idle, and nothing reacts after unmount. Unknown ids are an
    /// error.
    pub fn click_hotspot(&mut self, id: &str) -> ChartResult<bool> {
        if !self.mounted {
            debug!(id, "ignore hotspot click on unmounted explore room");
            return Ok(false);
        }
        let index = self.registry.index_of(id)?;
        if self.phase != ExplorePhase::Idle {
            debug!(id, phase = ?self.phase, "ignore hotspot click while zoomed");
            return Ok(false);
        }
        let Some(hotspot) = self.registry.get_index(index).copied() else {
            return Err(ChartError::UnknownHotspot(id.to_owned()));
        };

        let timing = self.timing;
        if self.departing.take().is_some() {
            self.card = Tween::settled(InfoCardPresentation::HIDDEN);
        }
        self.phase = ExplorePhase::Zooming;
        self.selected = Some(index);
        self.background.retarget(
            BackgroundTransform::zoomed(&hotspot, &timing),
            Duration::from_millis(timing.zoom_duration_ms),
            timing.zoom_easing,
        );
        self.overlay_opacity.retarget(
            timing.overlay_zoomed_opacity,
            Duration::from_millis(timing.overlay_duration_ms),
            timing.overlay_easing,
        );
        self.info_timer.arm();
        debug!(id, "explore room zooming");
        Ok(true)
    }

    /// Leaves the zoomed view. Returns whether anything changed; exiting
    /// while idle is a no-op.
    pub fn exit(&mut self) -> bool {
        if !self.mounted {
            debug!("ignore exit on unmounted explore room");
            return false;
        }
        if self.phase == ExplorePhase::Idle {
            return false;
        }

        let timing = self.timing;
        if self.info_timer.cancel() {
            debug!("cancel pending info card");
        }
        if self.phase == ExplorePhase::InfoShown {
            self.departing = self.selected;
            self.card.retarget(
                InfoCardPresentation::HIDDEN,
                Duration::from_millis(timing.card_duration_ms),
                timing.card_easing,
            );
        } else {
            self.card = Tween::settled(InfoCardPresentation::HIDDEN);
        }
        self.phase = ExplorePhase::Idle;
        self.selected = None;
        self.background.retarget(
            BackgroundTransform::IDENTITY,
            Duration::from_millis(timing.zoom_duration_ms),
            timing.zoom_easing,
        );
        self.overlay_opacity.retarget(
            timing.overlay_idle_opacity,
            Duration::from_millis(timing.overlay_duration_ms),
            timing.overlay_easing,
        );
        debug!("explore room back to idle");
        true
    }

    /// Moves the scene clock forward. Returns `true` while any animation or
    /// the info delay is still pending.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.mounted {
            return false;
        }
        self.background.advance(delta);
        self.overlay_opacity.advance(delta);
        if !self.card.advance(delta) && self.departing.take().is_some() {
            debug!("explore room info card removed");
        }

        if self.info_timer.advance(delta) && self.phase == ExplorePhase::Zooming {
            self.phase = ExplorePhase::InfoShown;
            self.card = Tween::new(
                InfoCardPresentation::HIDDEN,
                InfoCardPresentation::SHOWN,
                Duration::from_millis(self.timing.card_duration_ms),
                self.timing.card_easing,
            );
            debug!(
                id = self.selected_hotspot().map(|hotspot| hotspot.id),
                "explore room info shown"
            );
        }

        self.is_animating()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.info_timer.is_pending()
            || !self.background.is_finished()
            || !self.overlay_opacity.is_finished()
            || !self.card.is_finished()
    }

    /// Clears the pending info delay; later events are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.info_timer.cancel();
        self.mounted = false;
        debug!("unmount explore room");
    }

    #[must_use]
    pub fn background_transform(&self) -> BackgroundTransform {
        self.background.value()
    }

    #[must_use]
    pub fn overlay_opacity(&self) -> f64 {
        self.overlay_opacity.value()
    }

    /// Current card presentation, or `None` while no card is on screen. A
    /// card keeps animating out for its exit duration after [`Self::exit`].
    #[must_use]
    pub fn info_card(&self) -> Option<InfoCardPresentation> {
        (self.info_card_visible() || self.departing.is_some()).then(|| self.card.value())
    }

    /// Hotspot whose card is on screen, entering or leaving.
    #[must_use]
    pub fn card_hotspot(&self) -> Option<&Hotspot> {
        if self.info_card_visible() {
            return self.selected_hotspot();
        }
        self.departing
            .and_then(|index| self.registry.get_index(index))
    }

    #[must_use]
    pub fn is_card_leaving(&self) -> bool {
        self.departing.is_some()
    }

    #[must_use]
    pub fn instruction_visible(&self) -> bool {
        self.phase == ExplorePhase::Idle
    }

    #[must_use]
    pub fn hotspots_visible(&self) -> bool {
        self.phase == ExplorePhase::Idle
    }

    #[must_use]
    pub fn exit_button_visible(&self) -> bool {
        self.phase != ExplorePhase::Idle
    }

    #[must_use]
    pub fn info_card_visible(&self) -> bool {
        self.phase == ExplorePhase::InfoShown && self.selected.is_some()
    }
}
