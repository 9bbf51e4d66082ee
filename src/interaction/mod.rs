//! Per-marker hover state machine.
//!
//! Every marker is independently `Idle` or `Hovered`. Entering a marker
//! starts a transition towards the hovered visual and shows its tooltip;
//! leaving transitions back and hides the tooltip. A repeated enter or leave
//! restarts the transition from whatever value is currently displayed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::animation::{Easing, Interpolate, Tween};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverPhase {
    Idle,
    Hovered,
}

/// Animated marker properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerVisual {
    pub radius: f64,
    pub opacity: f64,
}

impl MarkerVisual {
    #[must_use]
    pub const fn new(radius: f64, opacity: f64) -> Self {
        Self { radius, opacity }
    }
}

impl Interpolate for MarkerVisual {
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        Self {
            radius: f64::interpolate(from.radius, to.radius, t),
            opacity: f64::interpolate(from.opacity, to.opacity, t),
        }
    }
}

/// Timing of hover enter/leave transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverTransition {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl HoverTransition {
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for HoverTransition {
    fn default() -> Self {
        Self {
            duration_ms: 200,
            easing: Easing::CubicInOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct MarkerHoverState {
    phase: HoverPhase,
    animation: Tween<MarkerVisual>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverState {
    base: MarkerVisual,
    hovered: MarkerVisual,
    transition: HoverTransition,
    markers: Vec<MarkerHoverState>,
    pointer_target: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn new(base: MarkerVisual, hovered: MarkerVisual, transition: HoverTransition) -> Self {
        Self {
            base,
            hovered,
            transition,
            markers: Vec::new(),
            pointer_target: None,
        }
    }

    /// Discards all hover state and tooltips and tracks `count` idle markers.
    pub fn reset(&mut self, count: usize) {
        let idle = MarkerHoverState {
            phase: HoverPhase::Idle,
            animation: Tween::settled(self.base),
        };
        self.markers.clear();
        self.markers.resize(count, idle);
        self.pointer_target = None;
    }

    /// Replaces visuals and timing; existing markers are reset to idle.
    pub fn reconfigure(
        &mut self,
        base: MarkerVisual,
        hovered: MarkerVisual,
        transition: HoverTransition,
    ) {
        self.base = base;
        self.hovered = hovered;
        self.transition = transition;
        self.reset(self.markers.len());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    pub fn base_visual(&self) -> MarkerVisual {
        self.base
    }

    #[must_use]
    pub fn phase(&self, index: usize) -> Option<HoverPhase> {
        self.markers.get(index).map(|marker| marker.phase)
    }

    /// Currently displayed radius and opacity of a marker.
    #[must_use]
    pub fn visual(&self, index: usize) -> Option<MarkerVisual> {
        self.markers.get(index).map(|marker| marker.animation.value())
    }

    /// Tooltips exist exactly while a marker is hovered.
    #[must_use]
    pub fn has_tooltip(&self, index: usize) -> bool {
        self.phase(index) == Some(HoverPhase::Hovered)
    }

    pub fn hovered_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.markers
            .iter()
            .enumerate()
            .filter(|(_, marker)| marker.phase == HoverPhase::Hovered)
            .map(|(index, _)| index)
    }

    #[must_use]
    pub fn pointer_target(&self) -> Option<usize> {
        self.pointer_target
    }

    pub fn on_marker_enter(&mut self, index: usize) -> ChartResult<()> {
        let (hovered, transition) = (self.hovered, self.transition);
        let marker = self.marker_mut(index)?;
        marker.phase = HoverPhase::Hovered;
        marker
            .animation
            .retarget(hovered, transition.duration(), transition.easing);
        trace!(index, "marker hover enter");
        Ok(())
    }

    pub fn on_marker_leave(&mut self, index: usize) -> ChartResult<()> {
        let (base, transition) = (self.base, self.transition);
        let marker = self.marker_mut(index)?;
        marker.phase = HoverPhase::Idle;
        marker
            .animation
            .retarget(base, transition.duration(), transition.easing);
        trace!(index, "marker hover leave");
        Ok(())
    }

    /// Routes a pointer hit-test result: leaves the previous target and
    /// enters the new one when they differ.
    pub fn on_pointer_target(&mut self, target: Option<usize>) -> ChartResult<()> {
        if target == self.pointer_target {
            return Ok(());
        }
        if let Some(target) = target {
            // Validate before touching the previous target.
            self.marker_mut(target)?;
        }
        if let Some(previous) = self.pointer_target.take() {
            self.on_marker_leave(previous)?;
        }
        if let Some(target) = target {
            self.on_marker_enter(target)?;
        }
        self.pointer_target = target;
        Ok(())
    }

    /// Moves every running transition forward. Returns `true` while any is
    /// still running.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let mut running = false;
        for marker in &mut self.markers {
            running |= marker.animation.advance(delta);
        }
        running
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.markers
            .iter()
            .any(|marker| !marker.animation.is_finished())
    }

    /// Drops all markers, transitions and tooltips.
    pub fn release(&mut self) {
        self.markers.clear();
        self.pointer_target = None;
    }

    fn marker_mut(&mut self, index: usize) -> ChartResult<&mut MarkerHoverState> {
        let len = self.markers.len();
        self.markers
            .get_mut(index)
            .ok_or(ChartError::MarkerOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{HoverPhase, HoverState, HoverTransition, MarkerVisual};

    fn state(count: usize) -> HoverState {
        let mut state = HoverState::new(
            MarkerVisual::new(5.0, 0.7),
            MarkerVisual::new(8.0, 1.0),
            HoverTransition::default(),
        );
        state.reset(count);
        state
    }

    #[test]
    fn pointer_target_switch_leaves_previous_marker() {
        let mut state = state(3);
        state.on_pointer_target(Some(0)).expect("enter 0");
        state.on_pointer_target(Some(2)).expect("switch to 2");
        assert_eq!(state.phase(0), Some(HoverPhase::Idle));
        assert_eq!(state.phase(2), Some(HoverPhase::Hovered));
        assert_eq!(state.hovered_indices().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn invalid_target_keeps_previous_hover() {
        let mut state = state(1);
        state.on_pointer_target(Some(0)).expect("enter 0");
        assert!(state.on_pointer_target(Some(4)).is_err());
        assert_eq!(state.pointer_target(), Some(0));
        assert!(state.has_tooltip(0));
    }

    #[test]
    fn reentrant_enter_restarts_from_current_value() {
        let mut state = state(1);
        state.on_marker_enter(0).expect("enter");
        state.advance(Duration::from_millis(100));
        let midway = state.visual(0).expect("visual");
        state.on_marker_enter(0).expect("enter again");
        assert_eq!(state.visual(0), Some(midway));
        assert!(state.is_animating());
        state.advance(Duration::from_millis(200));
        assert_eq!(state.visual(0), Some(MarkerVisual::new(8.0, 1.0)));
    }
}
