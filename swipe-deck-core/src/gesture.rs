//! Gesture vocabulary understood by the deck

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// One step of a single-pointer drag. Displacements are accumulated since
/// the pointer went down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Down,
    Move { dx: f32, dy: f32 },
    Release { dx: f32, dy: f32 },
    /// The gesture was taken away (pointer lost, window unfocused).
    Cancel,
}

/// What a release decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDecision {
    Commit(SwipeDirection),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No card left to drag.
    Exhausted,
    /// A committed card is still flying off screen.
    SwipeInFlight,
    /// Move or release without a preceding down.
    NotTracking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResponse {
    /// The deck will handle this gesture.
    Claimed,
    Moved,
    Released(ReleaseDecision),
    Ignored(IgnoreReason),
}

/// Decide a release from horizontal displacement alone.
///
/// Strict inequality: `|dx| == threshold` resets.
pub fn decide_release(dx: f32, threshold: f32) -> ReleaseDecision {
    if dx > threshold {
        ReleaseDecision::Commit(SwipeDirection::Right)
    } else if dx < -threshold {
        ReleaseDecision::Commit(SwipeDirection::Left)
    } else {
        ReleaseDecision::Reset
    }
}
