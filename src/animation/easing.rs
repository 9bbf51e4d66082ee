use serde::{Deserialize, Serialize};

/// Timing curves used by hover transitions and scene animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Symmetric cubic, the default curve of hover transitions.
    CubicInOut,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// CSS-style cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    /// Slow start and slow stop used for the explore-room zoom.
    pub const CINEMATIC: Self = Self::CubicBezier {
        x1: 0.76,
        y1: 0.0,
        x2: 0.24,
        y2: 1.0,
    };

    /// Maps linear progress in `[0, 1]` to eased progress. Inputs outside the
    /// unit interval are clamped.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled * doubled / 2.0
                } else {
                    let shifted = doubled - 2.0;
                    (shifted * shifted * shifted + 2.0) / 2.0
                }
            }
            Self::EaseOut => solve_cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => solve_cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => solve_cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Self::CubicBezier { x1, y1, x2, y2 } => {
                [x1, y1, x2, y2].into_iter().all(f64::is_finite)
                    && (0.0..=1.0).contains(&x1)
                    && (0.0..=1.0).contains(&x2)
            }
            _ => true,
        }
    }
}

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f64 = 1e-7;

fn solve_cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample_x = |t: f64| ((ax * t + bx) * t + cx) * t;
    let sample_y = |t: f64| ((ay * t + by) * t + cy) * t;
    let slope_x = |t: f64| (3.0 * ax * t + 2.0 * bx) * t + cx;

    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = sample_x(t) - x;
        if error.abs() < SOLVE_EPSILON {
            return sample_y(t);
        }
        let slope = slope_x(t);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= error / slope;
    }

    // Newton diverged or stalled on a flat segment: fall back to bisection.
    let (mut low, mut high) = (0.0, 1.0);
    t = x;
    for _ in 0..BISECTION_ITERATIONS {
        let estimate = sample_x(t);
        if (estimate - x).abs() < SOLVE_EPSILON {
            break;
        }
        if estimate < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    sample_y(t)
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn curves_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::CubicInOut,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CINEMATIC,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn symmetric_curves_pass_through_midpoint() {
        assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() <= 1e-12);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() <= 1e-6);
        assert!((Easing::CINEMATIC.apply(0.5) - 0.5).abs() <= 1e-6);
    }

    #[test]
    fn cinematic_curve_starts_slowly() {
        assert!(Easing::CINEMATIC.apply(0.2) < 0.05);
        assert!(Easing::EaseOut.apply(0.2) > 0.2);
    }
}
