pub mod spring;
pub mod timing;

pub use spring::SpringAnimation;
pub use timing::TimingAnimation;

use std::time::Instant;

use crate::geometry::Vector2;

/// Result of advancing an animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationFrame {
    Running(Vector2),
    /// Final frame; the value equals the animation target.
    Finished(Vector2),
}

/// Any animation that can drive the deck position.
pub trait Animation {
    fn step(&mut self, now: Instant) -> AnimationFrame;
}

impl Animation for TimingAnimation {
    fn step(&mut self, now: Instant) -> AnimationFrame {
        match self.sample(now) {
            (value, true) => AnimationFrame::Finished(value),
            (value, false) => AnimationFrame::Running(value),
        }
    }
}

impl Animation for SpringAnimation {
    fn step(&mut self, now: Instant) -> AnimationFrame {
        match self.sample(now) {
            (value, true) => AnimationFrame::Finished(value),
            (value, false) => AnimationFrame::Running(value),
        }
    }
}
