//! Deterministic animation building blocks driven by host-reported time.

mod easing;
mod timer;
mod tween;

pub use easing::Easing;
pub use timer::CancellableTimer;
pub use tween::{Interpolate, Tween};
