use std::time::Duration;

use super::Easing;

/// Values that can be blended linearly between two endpoints.
pub trait Interpolate: Copy {
    fn interpolate(from: Self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        from + (to - from) * t
    }
}

/// Deterministic time-based transition between two values.
///
/// Time only moves through [`Tween::advance`], so hosts and tests control the
/// clock explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    #[must_use]
    pub fn new(from: T, to: T, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// A finished tween resting at `value`.
    #[must_use]
    pub fn settled(value: T) -> Self {
        Self::new(value, value, Duration::ZERO, Easing::Linear)
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        T::interpolate(self.from, self.to, self.easing.apply(progress))
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Moves time forward; returns `true` while the tween is still running.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        !self.is_finished()
    }

    /// Restarts towards `to` from the current value.
    pub fn retarget(&mut self, to: T, duration: Duration, easing: Easing) {
        *self = Self::new(self.value(), to, duration, easing);
    }

    /// Jumps to the target and stops.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }
}
