use std::time::Duration;

/// One-shot delayed callback slot owned by a component.
///
/// The owner arms it when a delayed transition starts and cancels it when the
/// triggering state reverts or the component unmounts, so a stale timer never
/// fires into a state it no longer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancellableTimer {
    delay: Duration,
    remaining: Option<Duration>,
}

impl CancellableTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left before the timer fires, if armed.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Arms (or re-arms) the timer with its full delay.
    pub fn arm(&mut self) {
        self.remaining = Some(self.delay);
    }

    /// Disarms the timer. Returns whether a pending fire was dropped.
    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    /// Moves time forward. Returns `true` exactly once, on the step that
    /// reaches the deadline.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        if delta >= remaining {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining - delta);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::CancellableTimer;

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = CancellableTimer::new(Duration::from_millis(900));
        timer.arm();
        assert!(!timer.advance(Duration::from_millis(899)));
        assert!(timer.advance(Duration::from_millis(1)));
        assert!(!timer.advance(Duration::from_millis(1)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = CancellableTimer::new(Duration::from_millis(900));
        timer.arm();
        timer.advance(Duration::from_millis(500));
        assert!(timer.cancel());
        assert!(!timer.advance(Duration::from_secs(5)));
        assert!(!timer.cancel());
    }
}
