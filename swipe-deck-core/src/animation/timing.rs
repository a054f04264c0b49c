//! Simple time-based tween between two positions

use std::time::{Duration, Instant};

use crate::easing::{EasingFunction, lerp};
use crate::geometry::Vector2;

#[derive(Debug, Clone)]
pub struct TimingAnimation {
    from: Vector2,
    to: Vector2,
    duration: Duration,
    easing: EasingFunction,
    /// Set by the first tick; the tween starts on the frame after it is
    /// requested.
    started_at: Option<Instant>,
}

impl TimingAnimation {
    pub fn new(
        from: Vector2,
        to: Vector2,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started_at: None,
        }
    }

    /// Returns the value for `now` and whether the tween has finished.
    pub fn sample(&mut self, now: Instant) -> (Vector2, bool) {
        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let te = self.easing.apply(t);
        let value = Vector2::new(
            lerp(self.from.x, self.to.x, te),
            lerp(self.from.y, self.to.y, te),
        );
        (value, false)
    }
}
